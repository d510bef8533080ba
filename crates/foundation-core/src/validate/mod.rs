//! Cross-platform consistency validation.
//!
//! The validator never sees the token source. It reads the rendered CSS, the
//! native asset catalog and the native constants source, and checks that they
//! encode the same values through the configured mapping tables.

pub mod catalog;
pub mod compare;
pub mod css;
pub mod mapping;
pub mod swift;

use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

pub const CI_ENV: &str = "CI";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report {
    /// Errors fail the run; warnings fail it only when `strict`.
    pub fn failed(&self, strict: bool) -> bool {
        !self.errors.is_empty() || (strict && !self.warnings.is_empty())
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Whether the environment signals a CI run.
pub fn strict_from_env() -> bool {
    ci_value_is_strict(std::env::var(CI_ENV).ok().as_deref())
}

fn ci_value_is_strict(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !(v == "0" || v.eq_ignore_ascii_case("false")),
    }
}

/// Read the three platform artifacts under `root` and compare them.
///
/// Unreadable CSS or Swift, a missing catalog, or a malformed colorset abort
/// with an error. Every parity and structural finding is collected.
pub fn run(root: &Path, config: &Config) -> Result<Report> {
    let resolved = config.paths.resolve(root);
    let mappings = &config.validation;

    let css_text = std::fs::read_to_string(&resolved.css)?;
    let swift_text = std::fs::read_to_string(&resolved.swift)?;
    let native_catalog = catalog::NativeCatalog::load(&resolved.catalog)?;

    let css_tokens = css::extract_css_tokens(&css_text);
    let native = swift::parse_native_constants(&swift_text);
    let native_colors = native_catalog.colors();
    tracing::debug!(
        css_tokens = css_tokens.len(),
        colorsets = native_colors.len(),
        type_groups = native.typography.len(),
        "artifacts loaded"
    );

    let mut report = Report::default();

    for (name, set) in &native_catalog.colorsets {
        report
            .errors
            .extend(catalog::validate_colorset_structure(name, set));
    }

    report.errors.extend(compare::compare_colors(
        &mappings.colors,
        &css_tokens,
        &native_colors,
    ));

    match &native.spacing {
        Some(scale) => report.errors.extend(compare::compare_spacing_sets(
            &css::css_spacing_scale(&css_tokens),
            scale,
        )),
        None => report
            .errors
            .push("native spacing scale not found".to_string()),
    }

    report.errors.extend(compare::compare_typography_groups(
        &mappings.typography,
        &css_tokens,
        &native.typography,
    ));
    report.errors.extend(compare::compare_font_family(
        &css_tokens,
        native.font_family.as_deref(),
    ));

    let mapped: BTreeSet<&str> = mappings.colors.iter().map(|m| m.colorset.as_str()).collect();
    for name in native_catalog.colorsets.keys() {
        if !mapped.contains(name.as_str()) {
            report
                .warnings
                .push(format!("colorset '{name}' is not covered by any color mapping"));
        }
    }

    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation complete"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{self, Generator, OutputLayout};
    use crate::manifest::MetadataSources;
    use crate::paths;
    use crate::tokens::{ColorRole, HexColor, Rgba, TokenSource};
    use crate::TokenError;
    use chrono::Utc;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn starter() -> TokenSource {
        TokenSource::from_dtcg_str(crate::STARTER_TOKENS).unwrap()
    }

    fn generate_into(dir: &Path, tokens: TokenSource) {
        let layout = OutputLayout::under(dir, &Config::default().paths);
        Generator::new(tokens)
            .generate(&layout, &MetadataSources::default(), Utc::now())
            .unwrap();
    }

    fn rewrite(path: &Path, from: &str, to: &str) {
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains(from), "{from} not in {}", path.display());
        std::fs::write(path, text.replacen(from, to, 1)).unwrap();
    }

    #[test]
    fn generated_artifacts_are_consistent() {
        let dir = TempDir::new().unwrap();
        generate_into(dir.path(), starter());
        let report = run(dir.path(), &Config::default()).unwrap();
        assert!(report.is_clean(), "{report:?}");
        assert!(!report.failed(true));
    }

    #[test]
    fn css_color_drift_is_detected() {
        let dir = TempDir::new().unwrap();
        generate_into(dir.path(), starter());
        rewrite(
            &dir.path().join(paths::CSS_FILE),
            "--foundation-bg-dark-1: #212121;",
            "--foundation-bg-dark-1: #222222;",
        );
        let report = run(dir.path(), &Config::default()).unwrap();
        assert_eq!(report.errors.len(), 1, "{report:?}");
        assert!(report.errors[0].contains("background.primary (dark)"));
    }

    #[test]
    fn native_spacing_drift_is_detected() {
        let dir = TempDir::new().unwrap();
        generate_into(dir.path(), starter());
        rewrite(&dir.path().join(paths::SWIFT_FILE), "128, ", "");
        let report = run(dir.path(), &Config::default()).unwrap();
        assert_eq!(
            report.errors,
            vec!["spacing 128 is in CSS but missing from the native scale".to_string()]
        );
    }

    #[test]
    fn native_weight_drift_is_detected() {
        let dir = TempDir::new().unwrap();
        generate_into(dir.path(), starter());
        rewrite(
            &dir.path().join(paths::SWIFT_FILE),
            "weight: Font.Weight = .regular",
            "weight: Font.Weight = .medium",
        );
        let report = run(dir.path(), &Config::default()).unwrap();
        assert_eq!(
            report.errors,
            vec!["body weight: CSS 400 vs native 500".to_string()]
        );
    }

    #[test]
    fn unmapped_colorset_is_a_warning() {
        let dir = TempDir::new().unwrap();
        generate_into(dir.path(), starter());
        let catalog = dir.path().join(paths::CATALOG_DIR);
        let extra = paths::colorset_contents(&catalog, "BrandExtra");
        std::fs::create_dir_all(extra.parent().unwrap()).unwrap();
        std::fs::copy(paths::colorset_contents(&catalog, "BackgroundPrimary"), extra).unwrap();

        let report = run(dir.path(), &Config::default()).unwrap();
        assert!(report.errors.is_empty(), "{report:?}");
        assert_eq!(report.warnings.len(), 1);
        assert!(!report.failed(false));
        assert!(report.failed(true));
    }

    #[test]
    fn unreadable_colorset_component_is_an_error() {
        let dir = TempDir::new().unwrap();
        generate_into(dir.path(), starter());
        let contents = paths::colorset_contents(
            &dir.path().join(paths::CATALOG_DIR),
            "BackgroundPrimary",
        );
        let mut set: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&contents).unwrap()).unwrap();
        for entry in set["colors"].as_array_mut().unwrap() {
            entry["color"]["components"]["red"] = serde_json::json!("garbage");
        }
        std::fs::write(&contents, set.to_string()).unwrap();

        let report = run(dir.path(), &Config::default()).unwrap();
        assert_eq!(report.errors.len(), 2, "{report:?}");
        assert!(report
            .errors
            .iter()
            .all(|e| e.contains("'BackgroundPrimary'") && e.contains("unreadable components: red")));
        assert!(report.failed(false));
    }

    #[test]
    fn missing_catalog_aborts() {
        let dir = TempDir::new().unwrap();
        generate_into(dir.path(), starter());
        std::fs::remove_dir_all(dir.path().join(paths::CATALOG_DIR)).unwrap();
        let err = run(dir.path(), &Config::default()).unwrap_err();
        assert!(matches!(err, TokenError::CatalogNotFound(_)));
    }

    #[test]
    fn missing_css_aborts() {
        let dir = TempDir::new().unwrap();
        generate_into(dir.path(), starter());
        std::fs::remove_file(dir.path().join(paths::CSS_FILE)).unwrap();
        assert!(matches!(
            run(dir.path(), &Config::default()),
            Err(TokenError::Io(_))
        ));
    }

    #[test]
    fn findings_accumulate() {
        let dir = TempDir::new().unwrap();
        generate_into(dir.path(), starter());
        let css = dir.path().join(paths::CSS_FILE);
        rewrite(&css, "--foundation-bg-light-1: #FFFFFF;", "--foundation-bg-light-1: #FFFFFE;");
        rewrite(&css, "--foundation-space-128: 128px;", "--foundation-space-120: 120px;");
        let report = run(dir.path(), &Config::default()).unwrap();
        // one color, one spacing value on each side
        assert_eq!(report.errors.len(), 3, "{report:?}");
    }

    #[test]
    fn run_through_generate_entry_point() {
        let dir = TempDir::new().unwrap();
        let tokens = dir.path().join(paths::TOKENS_FILE);
        std::fs::create_dir_all(tokens.parent().unwrap()).unwrap();
        std::fs::write(&tokens, crate::STARTER_TOKENS).unwrap();
        generate::run(dir.path(), &Config::default(), Utc::now()).unwrap();
        assert!(run(dir.path(), &Config::default()).unwrap().is_clean());
    }

    #[test]
    fn ci_signal_parsing() {
        assert!(!ci_value_is_strict(None));
        assert!(!ci_value_is_strict(Some("")));
        assert!(!ci_value_is_strict(Some("0")));
        assert!(!ci_value_is_strict(Some("FALSE")));
        assert!(ci_value_is_strict(Some("true")));
        assert!(ci_value_is_strict(Some("1")));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn any_hex_survives_both_renderers(
            light in any::<[u8; 4]>(),
            dark in any::<[u8; 4]>(),
        ) {
            let to_hex = |[r, g, b, a]: [u8; 4]| HexColor::from_rgba(Rgba { r, g, b, a });
            let (light, dark) = (to_hex(light), to_hex(dark));

            let mut tokens = starter();
            let mut pair = tokens.colors.role(ColorRole::Accent).unwrap().clone();
            pair.light.insert("blue".to_string(), light.clone());
            pair.dark.insert("blue".to_string(), dark.clone());
            tokens.colors.insert(ColorRole::Accent, pair);

            let dir = TempDir::new().unwrap();
            generate_into(dir.path(), tokens);
            let report = run(dir.path(), &Config::default()).unwrap();
            prop_assert!(report.is_clean(), "{:?} / {} {}", report, light, dark);
        }
    }
}
