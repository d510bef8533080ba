use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Default locations, relative to the project root
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "foundation.yaml";

pub const TOKENS_FILE: &str = "tokens/foundation.json";
pub const SCHEMA_VERSION_FILE: &str = "tokens/VERSION";
pub const PACKAGE_MANIFEST: &str = "package.json";

pub const CSS_FILE: &str = "dist/foundation.css";
pub const MANIFEST_FILE: &str = "dist/manifest.json";
pub const SWIFT_FILE: &str = "ios/Sources/FoundationTokens.swift";
pub const CATALOG_DIR: &str = "ios/Assets.xcassets/Foundation";

pub const COLORSET_EXT: &str = "colorset";
pub const CONTENTS_JSON: &str = "Contents.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn colorset_dir(catalog: &Path, name: &str) -> PathBuf {
    catalog.join(format!("{name}.{COLORSET_EXT}"))
}

pub fn colorset_contents(catalog: &Path, name: &str) -> PathBuf {
    colorset_dir(catalog, name).join(CONTENTS_JSON)
}

/// Colorset name for a `<Name>.colorset` directory, or `None` for anything else.
pub fn colorset_name(dir: &Path) -> Option<&str> {
    if dir.extension().and_then(|e| e.to_str()) != Some(COLORSET_EXT) {
        return None;
    }
    dir.file_stem().and_then(|s| s.to_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
