#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const CSS: &str = "dist/foundation.css";
const MANIFEST: &str = "dist/manifest.json";
const SWIFT: &str = "ios/Sources/FoundationTokens.swift";
const CATALOG: &str = "ios/Assets.xcassets/Foundation";

fn foundation(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("foundation").unwrap();
    cmd.current_dir(dir.path())
        .env("FOUNDATION_ROOT", dir.path())
        .env_remove("CI");
    cmd
}

fn init_project(dir: &TempDir) {
    foundation(dir).arg("init").assert().success();
}

fn generated_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    foundation(&dir).arg("generate").assert().success();
    dir
}

fn edit(path: &Path, from: &str, to: &str) {
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains(from), "{from} not found in {}", path.display());
    std::fs::write(path, text.replacen(from, to, 1)).unwrap();
}

fn add_unmapped_colorset(dir: &TempDir) {
    let catalog = dir.path().join(CATALOG);
    let extra = catalog.join("Unmapped.colorset");
    std::fs::create_dir_all(&extra).unwrap();
    std::fs::copy(
        catalog.join("TextPrimary.colorset/Contents.json"),
        extra.join("Contents.json"),
    )
    .unwrap();
}

// ---------------------------------------------------------------------------
// foundation init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_config_and_tokens() {
    let dir = TempDir::new().unwrap();
    foundation(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created: foundation.yaml"));

    assert!(dir.path().join("foundation.yaml").is_file());
    assert!(dir.path().join("tokens/foundation.json").is_file());
}

#[test]
fn init_keeps_existing_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("foundation.yaml"), "validation:\n  strict: true\n").unwrap();
    foundation(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:  foundation.yaml"));

    let config = std::fs::read_to_string(dir.path().join("foundation.yaml")).unwrap();
    assert_eq!(config, "validation:\n  strict: true\n");
}

// ---------------------------------------------------------------------------
// foundation generate
// ---------------------------------------------------------------------------

#[test]
fn generate_writes_artifacts() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    foundation(&dir)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("dist/foundation.css"))
        .stdout(predicate::str::contains("Generated 55 tokens"));

    let css = std::fs::read_to_string(dir.path().join(CSS)).unwrap();
    assert!(css.contains("--foundation-bg-light-1: #FFFFFF;"));
    assert!(css.contains("--foundation-bg-dark-1: #212121;"));
    assert!(css.contains("\"SF Pro\""));
    assert!(dir.path().join(SWIFT).is_file());
    assert!(dir
        .path()
        .join(CATALOG)
        .join("BackgroundPrimary.colorset/Contents.json")
        .is_file());
}

#[test]
fn generate_json_prints_manifest() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let out = foundation(&dir)
        .args(["generate", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let manifest: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(manifest["tokenCount"]["colors"], 22);
    assert_eq!(manifest["schemaVersion"], "unknown");
    assert_eq!(manifest["appsSdkUiVersion"], "unknown");
    assert_eq!(manifest["sha256"]["css"].as_str().unwrap().len(), 64);

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join(MANIFEST)).unwrap())
            .unwrap();
    assert_eq!(written, manifest);
}

#[test]
fn generate_is_byte_stable() {
    let dir = generated_project();
    let first = std::fs::read(dir.path().join(CSS)).unwrap();
    let first_swift = std::fs::read(dir.path().join(SWIFT)).unwrap();
    foundation(&dir).arg("generate").assert().success();
    assert_eq!(std::fs::read(dir.path().join(CSS)).unwrap(), first);
    assert_eq!(std::fs::read(dir.path().join(SWIFT)).unwrap(), first_swift);
}

#[test]
fn generate_missing_leaf_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let tokens = dir.path().join("tokens/foundation.json");
    let mut doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&tokens).unwrap()).unwrap();
    doc["color"]["background"]["light"]
        .as_object_mut()
        .unwrap()
        .remove("primary");
    std::fs::write(&tokens, doc.to_string()).unwrap();

    foundation(&dir)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("color.background.light.primary"));
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn generate_with_token_override() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let alt = dir.path().join("alt.json");
    std::fs::rename(dir.path().join("tokens/foundation.json"), &alt).unwrap();

    foundation(&dir).arg("generate").assert().failure();
    foundation(&dir)
        .args(["generate", "--tokens"])
        .arg(&alt)
        .assert()
        .success();
    assert!(dir.path().join(CSS).is_file());
}

// ---------------------------------------------------------------------------
// foundation validate
// ---------------------------------------------------------------------------

#[test]
fn validate_generated_project_passes() {
    let dir = generated_project();
    foundation(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("consistent (0 warning(s))"));
    foundation(&dir).args(["validate", "--strict"]).assert().success();
}

#[test]
fn validate_reports_color_drift() {
    let dir = generated_project();
    edit(
        &dir.path().join(CSS),
        "--foundation-bg-light-1: #FFFFFF;",
        "--foundation-bg-light-1: #FAFAFA;",
    );
    foundation(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("background.primary (light)"))
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn validate_reports_spacing_side() {
    let dir = generated_project();
    edit(&dir.path().join(SWIFT), "[128, ", "[256, 128, ");
    foundation(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "spacing 256 is in the native scale but missing from CSS",
        ));
}

#[test]
fn validate_warning_only_fails_in_strict_mode() {
    let dir = generated_project();
    add_unmapped_colorset(&dir);

    foundation(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("[warning] colorset 'Unmapped'"));
    foundation(&dir)
        .args(["validate", "--strict"])
        .assert()
        .failure();
}

#[test]
fn ci_signal_implies_strict() {
    let dir = generated_project();
    add_unmapped_colorset(&dir);

    foundation(&dir).env("CI", "true").arg("validate").assert().failure();
    foundation(&dir).env("CI", "false").arg("validate").assert().success();
}

#[test]
fn validate_missing_catalog_fails() {
    let dir = generated_project();
    std::fs::remove_dir_all(dir.path().join(CATALOG)).unwrap();
    foundation(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog not found"));
}

#[test]
fn validate_json_output() {
    let dir = generated_project();
    add_unmapped_colorset(&dir);
    let out = foundation(&dir)
        .args(["validate", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["errors"].as_array().unwrap().len(), 0);
    assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// foundation config
// ---------------------------------------------------------------------------

#[test]
fn config_show_without_file_prints_defaults() {
    let dir = TempDir::new().unwrap();
    foundation(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dist/foundation.css"));
}

#[test]
fn config_validate_clean() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    foundation(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_flags_bad_prefix() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("foundation.yaml"),
        "validation:\n  typography:\n    - name: body\n      css_prefix: \"--brand-body\"\n      native_group: Body\n",
    )
    .unwrap();
    foundation(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error]"));
}
