//! Asset-catalog colorset reading.
//!
//! A catalog directory holds one `<Name>.colorset/Contents.json` per color.
//! Entries without `appearances` are the light variant; an appearance whose
//! value is `dark` marks the dark variant.

use crate::error::{Result, TokenError};
use crate::paths;
use crate::tokens::{HexColor, Rgba};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const CHANNELS: [&str; 4] = ["red", "green", "blue", "alpha"];

// ---------------------------------------------------------------------------
// Contents.json model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Colorset {
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorEntry {
    #[serde(default)]
    pub appearances: Vec<Appearance>,
    #[serde(default)]
    pub color: Option<ColorSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Appearance {
    #[serde(default)]
    pub appearance: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorSpec {
    #[serde(default, rename = "color-space")]
    pub color_space: Option<String>,
    #[serde(default)]
    pub components: BTreeMap<String, Component>,
}

/// Xcode writes components as strings (`"0.500"`, `"128"`, `"0x80"`);
/// other tools write plain numbers.
///
/// A string without a decimal point is an 8-bit value, so `"1"` means
/// `1/255`. Write `"1.000"` for full intensity.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Component {
    Number(f64),
    Text(String),
}

impl Component {
    /// Normalized 0..1 value.
    pub fn unit(&self) -> Option<f64> {
        let value = match self {
            Component::Number(v) => Some(*v),
            Component::Text(s) => {
                let s = s.trim();
                if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                    u8::from_str_radix(hex, 16).ok().map(|b| f64::from(b) / 255.0)
                } else if s.contains('.') {
                    s.parse::<f64>().ok()
                } else {
                    s.parse::<u8>().ok().map(|b| f64::from(b) / 255.0)
                }
            }
        };
        value.filter(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Light,
    Dark,
    Other,
}

impl ColorEntry {
    pub fn variant(&self) -> Variant {
        if self.appearances.is_empty() {
            Variant::Light
        } else if self.appearances.iter().any(|a| a.value == "dark") {
            Variant::Dark
        } else {
            Variant::Other
        }
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when alpha < 1. `None` if any channel is
    /// missing or unparseable.
    pub fn hex(&self) -> Option<String> {
        let components = &self.color.as_ref()?.components;
        let mut channels = [0.0; 4];
        for (slot, name) in channels.iter_mut().zip(CHANNELS) {
            *slot = components.get(name)?.unit()?;
        }
        let [r, g, b, a] = channels;
        Some(HexColor::from_rgba(Rgba::from_unit(r, g, b, a)).to_string())
    }
}

// ---------------------------------------------------------------------------
// NativeCatalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogColor {
    pub light: Option<String>,
    pub dark: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NativeCatalog {
    pub colorsets: BTreeMap<String, Colorset>,
}

impl NativeCatalog {
    /// Read every `*.colorset` directory under `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(TokenError::CatalogNotFound(dir.display().to_string()));
        }
        let mut colorsets = BTreeMap::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = paths::colorset_name(&path) else {
                continue;
            };
            let data = std::fs::read_to_string(path.join(paths::CONTENTS_JSON)).map_err(|e| {
                TokenError::MalformedColorset {
                    name: name.to_string(),
                    reason: e.to_string(),
                }
            })?;
            let colorset: Colorset =
                serde_json::from_str(&data).map_err(|e| TokenError::MalformedColorset {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
            colorsets.insert(name.to_string(), colorset);
        }
        tracing::debug!(dir = %dir.display(), count = colorsets.len(), "loaded colorsets");
        Ok(Self { colorsets })
    }

    /// Light/dark hex per colorset.
    pub fn colors(&self) -> BTreeMap<String, CatalogColor> {
        self.colorsets
            .iter()
            .map(|(name, set)| (name.clone(), catalog_color(set)))
            .collect()
    }
}

pub fn extract_native_color_catalog(dir: &Path) -> Result<BTreeMap<String, CatalogColor>> {
    Ok(NativeCatalog::load(dir)?.colors())
}

fn catalog_color(set: &Colorset) -> CatalogColor {
    let mut out = CatalogColor::default();
    for entry in &set.colors {
        let slot = match entry.variant() {
            Variant::Light => &mut out.light,
            Variant::Dark => &mut out.dark,
            Variant::Other => continue,
        };
        if slot.is_none() {
            *slot = entry.hex();
        }
    }
    out
}

/// Structural problems only: both variants present, every entry complete,
/// every channel readable as a value in `0..=1`.
pub fn validate_colorset_structure(name: &str, colorset: &Colorset) -> Vec<String> {
    let mut errors = Vec::new();
    let has = |v: Variant| colorset.colors.iter().any(|e| e.variant() == v);
    if !has(Variant::Light) {
        errors.push(format!("colorset '{name}' has no light (any appearance) variant"));
    }
    if !has(Variant::Dark) {
        errors.push(format!("colorset '{name}' has no dark variant"));
    }
    for (i, entry) in colorset.colors.iter().enumerate() {
        let components = entry.color.as_ref().map(|c| &c.components);
        let missing: Vec<&str> = CHANNELS
            .iter()
            .copied()
            .filter(|ch| components.map_or(true, |c| !c.contains_key(*ch)))
            .collect();
        if !missing.is_empty() {
            errors.push(format!(
                "colorset '{name}' entry {i} is missing components: {}",
                missing.join(", ")
            ));
        }
        let Some(components) = components else {
            continue;
        };
        let invalid: Vec<&str> = CHANNELS
            .iter()
            .copied()
            .filter(|ch| {
                components
                    .get(*ch)
                    .is_some_and(|c| !c.unit().is_some_and(|v| (0.0..=1.0).contains(&v)))
            })
            .collect();
        if !invalid.is_empty() {
            errors.push(format!(
                "colorset '{name}' entry {i} has unreadable components: {}",
                invalid.join(", ")
            ));
        }
    }
    errors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_colorset(dir: &Path, name: &str, json: &str) {
        let path = paths::colorset_contents(dir, name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, json).unwrap();
    }

    const XCODE_STYLE: &str = r#"{
      "colors": [
        { "color": { "color-space": "srgb",
            "components": { "alpha": "1.000", "blue": "0xFF", "green": "255", "red": "1.000" } },
          "idiom": "universal" },
        { "appearances": [{ "appearance": "luminosity", "value": "dark" }],
          "color": { "color-space": "srgb",
            "components": { "alpha": 0.5, "blue": 0.129, "green": 0.129, "red": 0.129 } },
          "idiom": "universal" }
      ],
      "info": { "author": "xcode", "version": 1 }
    }"#;

    #[test]
    fn extracts_light_and_dark_hex() {
        let dir = TempDir::new().unwrap();
        write_colorset(dir.path(), "BackgroundPrimary", XCODE_STYLE);
        let colors = extract_native_color_catalog(dir.path()).unwrap();
        let c = &colors["BackgroundPrimary"];
        assert_eq!(c.light.as_deref(), Some("#FFFFFF"));
        assert_eq!(c.dark.as_deref(), Some("#21212180"));
    }

    #[test]
    fn missing_catalog_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = NativeCatalog::load(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, TokenError::CatalogNotFound(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_colorset(dir.path(), "Broken", "{ colors: ");
        let err = NativeCatalog::load(dir.path()).unwrap_err();
        assert!(
            matches!(&err, TokenError::MalformedColorset { name, .. } if name == "Broken"),
            "{err}"
        );
    }

    #[test]
    fn ignores_other_directories() {
        let dir = TempDir::new().unwrap();
        write_colorset(dir.path(), "TextPrimary", XCODE_STYLE);
        std::fs::create_dir_all(dir.path().join("AppIcon.appiconset")).unwrap();
        std::fs::write(dir.path().join("Contents.json"), "{}").unwrap();
        let catalog = NativeCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.colorsets.len(), 1);
    }

    #[test]
    fn structure_requires_both_variants() {
        let set: Colorset = serde_json::from_str(
            r#"{ "colors": [ { "color": { "components":
                { "red": 1, "green": 1, "blue": 1, "alpha": 1 } } } ] }"#,
        )
        .unwrap();
        let errors = validate_colorset_structure("Solo", &set);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("no dark variant"));
    }

    #[test]
    fn structure_requires_components() {
        let set: Colorset = serde_json::from_str(
            r#"{ "colors": [
                { "color": { "components": { "red": 1, "green": 1, "blue": 1 } } },
                { "appearances": [{ "value": "dark" }] }
            ] }"#,
        )
        .unwrap();
        let errors = validate_colorset_structure("Partial", &set);
        assert_eq!(errors.len(), 2, "{errors:?}");
        assert!(errors[0].contains("entry 0 is missing components: alpha"));
        assert!(errors[1].contains("entry 1 is missing components: red, green, blue, alpha"));
    }

    #[test]
    fn structure_rejects_unreadable_components() {
        let set: Colorset = serde_json::from_str(
            r#"{ "colors": [
                { "color": { "components":
                    { "red": "garbage", "green": 1, "blue": 1, "alpha": 1 } } },
                { "appearances": [{ "value": "dark" }], "color": { "components":
                    { "red": 0.1, "green": 1.5, "blue": "0xZZ", "alpha": 1 } } }
            ] }"#,
        )
        .unwrap();
        let errors = validate_colorset_structure("Corrupt", &set);
        assert_eq!(
            errors,
            vec![
                "colorset 'Corrupt' entry 0 has unreadable components: red".to_string(),
                "colorset 'Corrupt' entry 1 has unreadable components: green, blue".to_string(),
            ]
        );
    }

    #[test]
    fn well_formed_colorset_has_no_structure_errors() {
        let set: Colorset = serde_json::from_str(XCODE_STYLE).unwrap();
        assert!(validate_colorset_structure("Ok", &set).is_empty());
    }

    #[test]
    fn component_parsing() {
        assert_eq!(Component::Text("0x80".into()).unit(), Some(128.0 / 255.0));
        assert_eq!(Component::Text("255".into()).unit(), Some(1.0));
        assert_eq!(Component::Text("0.250".into()).unit(), Some(0.25));
        assert_eq!(Component::Number(0.5).unit(), Some(0.5));
        assert_eq!(Component::Text("bogus".into()).unit(), None);
        // dotless strings are 8-bit
        assert_eq!(Component::Text("1".into()).unit(), Some(1.0 / 255.0));
        assert_eq!(Component::Text("1.000".into()).unit(), Some(1.0));
    }
}
