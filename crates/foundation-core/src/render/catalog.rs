//! Asset-catalog colorsets, one per color slot.

use super::pascal_case;
use crate::tokens::{ColorRole, HexColor, TokenSource};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// `Contents.json` placed at the catalog folder root.
pub fn catalog_root_contents() -> String {
    pretty(&json!({
        "info": { "author": "xcode", "version": 1 },
        "properties": { "provides-namespace": false }
    }))
}

/// `BackgroundPrimary`, `IconStatusError`.
pub fn colorset_name(role: ColorRole, slot: &str) -> String {
    format!("{}{}", pascal_case(role.as_str()), pascal_case(slot))
}

pub fn render_colorsets(tokens: &TokenSource) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for (role, pair) in tokens.colors.iter() {
        for (slot, light) in &pair.light {
            let Some(dark) = pair.dark.get(slot) else {
                continue;
            };
            out.insert(colorset_name(role, slot), render_colorset(light, dark));
        }
    }
    out
}

pub fn render_colorset(light: &HexColor, dark: &HexColor) -> String {
    pretty(&json!({
        "colors": [
            { "color": color_json(light), "idiom": "universal" },
            {
                "appearances": [{ "appearance": "luminosity", "value": "dark" }],
                "color": color_json(dark),
                "idiom": "universal"
            }
        ],
        "info": { "author": "xcode", "version": 1 }
    }))
}

fn color_json(color: &HexColor) -> Value {
    let [r, g, b, a] = color.rgba().to_unit();
    json!({
        "color-space": "srgb",
        "components": {
            "alpha": round3(a),
            "blue": round3(b),
            "green": round3(g),
            "red": round3(r)
        }
    })
}

/// Three decimals keep every 8-bit channel recoverable.
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn pretty(v: &Value) -> String {
    // Serializing a `Value` cannot fail.
    let mut s = serde_json::to_string_pretty(v).unwrap_or_default();
    s.push('\n');
    s
}
