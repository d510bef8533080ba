use crate::error::{Result, TokenError};
use crate::paths;
use crate::validate::mapping::{
    default_color_mappings, default_typography_mappings, ColorMapping, TypographyMapping,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const CSS_PREFIX: &str = "--foundation-";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// PathsConfig
// ---------------------------------------------------------------------------

/// Input and output locations, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_tokens")]
    pub tokens: PathBuf,
    #[serde(default = "default_css")]
    pub css: PathBuf,
    #[serde(default = "default_swift")]
    pub swift: PathBuf,
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    #[serde(default = "default_schema_version")]
    pub schema_version: PathBuf,
    #[serde(default = "default_package_manifest")]
    pub package_manifest: PathBuf,
}

fn default_tokens() -> PathBuf {
    PathBuf::from(paths::TOKENS_FILE)
}

fn default_css() -> PathBuf {
    PathBuf::from(paths::CSS_FILE)
}

fn default_swift() -> PathBuf {
    PathBuf::from(paths::SWIFT_FILE)
}

fn default_catalog() -> PathBuf {
    PathBuf::from(paths::CATALOG_DIR)
}

fn default_manifest() -> PathBuf {
    PathBuf::from(paths::MANIFEST_FILE)
}

fn default_schema_version() -> PathBuf {
    PathBuf::from(paths::SCHEMA_VERSION_FILE)
}

fn default_package_manifest() -> PathBuf {
    PathBuf::from(paths::PACKAGE_MANIFEST)
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tokens: default_tokens(),
            css: default_css(),
            swift: default_swift(),
            catalog: default_catalog(),
            manifest: default_manifest(),
            schema_version: default_schema_version(),
            package_manifest: default_package_manifest(),
        }
    }
}

impl PathsConfig {
    /// The same layout with every path joined onto `root`.
    pub fn resolve(&self, root: &Path) -> PathsConfig {
        PathsConfig {
            tokens: root.join(&self.tokens),
            css: root.join(&self.css),
            swift: root.join(&self.swift),
            catalog: root.join(&self.catalog),
            manifest: root.join(&self.manifest),
            schema_version: root.join(&self.schema_version),
            package_manifest: root.join(&self.package_manifest),
        }
    }

    fn entries(&self) -> [(&'static str, &Path); 7] {
        [
            ("tokens", self.tokens.as_path()),
            ("css", self.css.as_path()),
            ("swift", self.swift.as_path()),
            ("catalog", self.catalog.as_path()),
            ("manifest", self.manifest.as_path()),
            ("schema_version", self.schema_version.as_path()),
            ("package_manifest", self.package_manifest.as_path()),
        ]
    }
}

// ---------------------------------------------------------------------------
// ValidationConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Treat warnings as errors even outside CI.
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_color_mappings")]
    pub colors: Vec<ColorMapping>,
    #[serde(default = "default_typography_mappings")]
    pub typography: Vec<TypographyMapping>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: false,
            colors: default_color_mappings(),
            typography: default_typography_mappings(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Config {
    /// Load `foundation.yaml` from `root`; a missing file means defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = self.to_yaml()?;
        crate::io::atomic_write(&paths::config_path(root), data.as_bytes())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Like [`Config::validate`], but any error-level finding becomes
    /// [`TokenError::InvalidConfig`].
    pub fn ensure_valid(&self) -> Result<()> {
        let errors: Vec<String> = self
            .validate()
            .into_iter()
            .filter(|w| w.level == WarnLevel::Error)
            .map(|w| w.message)
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(TokenError::InvalidConfig(errors.join("; ")))
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let v = &self.validation;

        // 1. Mapping tables must not be empty
        if v.colors.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "validation.colors is empty; no color parity will be checked".into(),
            });
        }
        if v.typography.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "validation.typography is empty; no type styles will be checked".into(),
            });
        }

        // 2. Mapping names are unique
        let mut seen = HashSet::new();
        for name in v.colors.iter().map(|m| &m.name) {
            if !seen.insert(name) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("duplicate color mapping '{name}'"),
                });
            }
        }
        let mut seen = HashSet::new();
        for name in v.typography.iter().map(|m| &m.name) {
            if !seen.insert(name) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("duplicate typography mapping '{name}'"),
                });
            }
        }

        // 3. CSS names must use the extracted prefix, or they can never match
        let css_names = v
            .colors
            .iter()
            .flat_map(|m| [(&m.name, &m.css_light), (&m.name, &m.css_dark)])
            .chain(v.typography.iter().map(|m| (&m.name, &m.css_prefix)));
        for (name, css) in css_names {
            if !css.starts_with(CSS_PREFIX) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!(
                        "mapping '{name}' uses '{css}', which does not start with {CSS_PREFIX}"
                    ),
                });
            }
        }

        // 4. Absolute paths make the config machine-specific
        for (key, path) in self.paths.entries() {
            if path.is_absolute() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("paths.{key} is absolute ({})", path.display()),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
