//! DTCG (Design Tokens Community Group) JSON loading.
//!
//! Every leaf is an object carrying a `value` (and optionally a `type`).
//! A leaf or group that is absent fails with
//! [`TokenError::MissingTokenValue`] naming the dotted path; nothing is
//! defaulted.

use super::{
    ColorRole, ColorTokens, HexColor, Scheme, SchemePair, ShadowLayer, TokenSource, TypeStyle,
    Typography,
};
use crate::error::{Result, TokenError};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

const FONT_FAMILY_KEY: &str = "fontFamily";

impl TokenSource {
    pub fn from_dtcg_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_dtcg_str(&data)
    }

    pub fn from_dtcg_str(data: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(data)?;
        let root = root
            .as_object()
            .ok_or_else(|| TokenError::invalid("$", "token document must be a JSON object"))?;

        let tokens = TokenSource {
            colors: colors(group(root, "color", "")?)?,
            spacing: spacing(root)?,
            typography: typography(group(root, "typography", "")?)?,
            radius: dimensions(group(root, "radius", "")?, "radius")?,
            shadow: shadows(group(root, "shadow", "")?)?,
            size: dimensions(group(root, "size", "")?, "size")?,
        };
        tokens.check()?;
        Ok(tokens)
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

fn colors(node: &Map<String, Value>) -> Result<ColorTokens> {
    let mut colors = ColorTokens::default();
    for role in ColorRole::all() {
        let role_path = format!("color.{role}");
        let role_node = group(node, role.as_str(), "color")?;
        let mut pair = SchemePair::default();
        for scheme in Scheme::all() {
            let scheme_node = group(role_node, scheme.as_str(), &role_path)?;
            let scheme_path = join(&role_path, scheme.as_str());
            let mut slots = BTreeMap::new();
            for slot in token_keys(scheme_node) {
                let path = join(&scheme_path, slot);
                let raw = leaf(scheme_node, slot, &scheme_path)?;
                slots.insert(slot.to_string(), hex(raw, &path)?);
            }
            match scheme {
                Scheme::Light => pair.light = slots,
                Scheme::Dark => pair.dark = slots,
            }
        }
        colors.insert(*role, pair);
    }
    Ok(colors)
}

fn spacing(root: &Map<String, Value>) -> Result<Vec<f64>> {
    let raw = leaf(root, "spacing", "")?;
    let items = raw
        .as_array()
        .ok_or_else(|| TokenError::invalid("spacing", "value must be an array of lengths"))?;
    items
        .iter()
        .enumerate()
        .map(|(i, v)| number(v, &format!("spacing.{i}")))
        .collect()
}

fn typography(node: &Map<String, Value>) -> Result<Typography> {
    let family = leaf(node, FONT_FAMILY_KEY, "typography")?;
    let font_family = family
        .as_str()
        .ok_or_else(|| TokenError::invalid("typography.fontFamily", "value must be a string"))?
        .to_string();

    let mut styles = BTreeMap::new();
    for name in token_keys(node).filter(|k| *k != FONT_FAMILY_KEY) {
        let path = join("typography", name);
        let style = group(node, name, "typography")?;
        let style = TypeStyle {
            size: number(leaf(style, "size", &path)?, &join(&path, "size"))?,
            line_height: number(leaf(style, "lineHeight", &path)?, &join(&path, "lineHeight"))?,
            weight: weight(leaf(style, "weight", &path)?, &join(&path, "weight"))?,
            emphasis_weight: optional_leaf(style, "emphasisWeight", &path)?
                .map(|v| weight(v, &join(&path, "emphasisWeight")))
                .transpose()?,
            regular_weight: optional_leaf(style, "regularWeight", &path)?
                .map(|v| weight(v, &join(&path, "regularWeight")))
                .transpose()?,
            tracking: number(leaf(style, "tracking", &path)?, &join(&path, "tracking"))?,
        };
        styles.insert(name.to_string(), style);
    }

    Ok(Typography {
        font_family,
        styles,
    })
}

fn dimensions(node: &Map<String, Value>, category: &str) -> Result<BTreeMap<String, f64>> {
    token_keys(node)
        .map(|key| {
            let raw = leaf(node, key, category)?;
            Ok((key.to_string(), number(raw, &join(category, key))?))
        })
        .collect()
}

fn shadows(node: &Map<String, Value>) -> Result<BTreeMap<String, Vec<ShadowLayer>>> {
    let mut out = BTreeMap::new();
    for key in token_keys(node) {
        let path = join("shadow", key);
        let raw = leaf(node, key, "shadow")?;
        let layers = match raw {
            Value::Array(items) => items.iter().collect::<Vec<_>>(),
            Value::Object(_) => vec![raw],
            _ => {
                return Err(TokenError::invalid(
                    path,
                    "value must be a layer object or an array of layers",
                ))
            }
        };
        let layers = layers
            .into_iter()
            .enumerate()
            .map(|(i, layer)| shadow_layer(layer, &join(&path, &i.to_string())))
            .collect::<Result<Vec<_>>>()?;
        out.insert(key.to_string(), layers);
    }
    Ok(out)
}

fn shadow_layer(raw: &Value, path: &str) -> Result<ShadowLayer> {
    let obj = raw
        .as_object()
        .ok_or_else(|| TokenError::invalid(path, "shadow layer must be an object"))?;
    let field = |name: &str| -> Result<f64> {
        let v = obj
            .get(name)
            .ok_or_else(|| TokenError::missing(join(path, name)))?;
        number(v, &join(path, name))
    };
    let color = obj
        .get("color")
        .ok_or_else(|| TokenError::missing(join(path, "color")))?
        .as_str()
        .ok_or_else(|| TokenError::invalid(join(path, "color"), "must be a string"))?
        .to_string();
    Ok(ShadowLayer {
        offset_x: field("offsetX")?,
        offset_y: field("offsetY")?,
        blur: field("blur")?,
        spread: field("spread")?,
        color,
    })
}

// ---------------------------------------------------------------------------
// Leaf helpers
// ---------------------------------------------------------------------------

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Token keys of a group; `$`-prefixed keys are DTCG metadata.
fn token_keys(node: &Map<String, Value>) -> impl Iterator<Item = &str> {
    node.keys()
        .map(String::as_str)
        .filter(|k| !k.starts_with('$'))
}

fn group<'a>(node: &'a Map<String, Value>, key: &str, parent: &str) -> Result<&'a Map<String, Value>> {
    let path = join(parent, key);
    match node.get(key) {
        None | Some(Value::Null) => Err(TokenError::missing(path)),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(TokenError::invalid(path, "expected a token group")),
    }
}

fn leaf<'a>(node: &'a Map<String, Value>, key: &str, parent: &str) -> Result<&'a Value> {
    let path = join(parent, key);
    match node.get(key).and_then(Value::as_object).and_then(|o| o.get("value")) {
        None | Some(Value::Null) => Err(TokenError::missing(path)),
        Some(v) => Ok(v),
    }
}

fn optional_leaf<'a>(
    node: &'a Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<Option<&'a Value>> {
    if node.contains_key(key) {
        leaf(node, key, parent).map(Some)
    } else {
        Ok(None)
    }
}

fn hex(raw: &Value, path: &str) -> Result<HexColor> {
    raw.as_str()
        .and_then(HexColor::parse)
        .ok_or_else(|| TokenError::invalid(path, format!("{raw} is not a #RRGGBB or #RRGGBBAA color")))
}

/// Lengths are plain numbers or strings with an optional `px` suffix.
fn number(raw: &Value, path: &str) -> Result<f64> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches("px").trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| TokenError::invalid(path, format!("{raw} is not a number")))
}

fn weight(raw: &Value, path: &str) -> Result<u16> {
    let v = number(raw, path)?;
    if v.fract() != 0.0 || !(1.0..=1000.0).contains(&v) {
        return Err(TokenError::invalid(path, format!("{v} is not a font weight")));
    }
    Ok(v as u16)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
