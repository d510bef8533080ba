//! Cross-platform value comparisons.
//!
//! Each function returns human-readable error strings and never stops at the
//! first mismatch. Numeric comparisons use [`EPSILON`].

use super::catalog::CatalogColor;
use super::css::{css_font_family, parse_px};
use super::mapping::{ColorMapping, TypographyMapping};
use super::swift::NativeTypeStyle;
use crate::tokens::{normalize_hex, weight_value};
use std::collections::BTreeMap;

pub const EPSILON: f64 = 0.01;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub fn compare_colors(
    mappings: &[ColorMapping],
    css: &BTreeMap<String, String>,
    catalog: &BTreeMap<String, CatalogColor>,
) -> Vec<String> {
    let mut errors = Vec::new();
    for m in mappings {
        let native = catalog.get(&m.colorset);
        if native.is_none() {
            errors.push(format!(
                "{}: colorset '{}' not found in native catalog",
                m.name, m.colorset
            ));
        }
        let sides = [
            ("light", &m.css_light, native.and_then(|c| c.light.as_deref())),
            ("dark", &m.css_dark, native.and_then(|c| c.dark.as_deref())),
        ];
        for (scheme, property, native_hex) in sides {
            let Some(css_raw) = css.get(property) else {
                errors.push(format!("{}: CSS token {property} not found", m.name));
                continue;
            };
            let Some(css_hex) = normalize_hex(css_raw) else {
                errors.push(format!(
                    "{}: CSS token {property} is not a hex color ({css_raw})",
                    m.name
                ));
                continue;
            };
            // A missing colorset was reported above; a missing or unreadable
            // variant is a structural error reported by the colorset check.
            let Some(native_hex) = native_hex.and_then(normalize_hex) else {
                continue;
            };
            if css_hex != native_hex {
                errors.push(format!(
                    "{} ({scheme}): CSS {property} = {css_hex}, native {} = {native_hex}",
                    m.name, m.colorset
                ));
            }
        }
    }
    errors
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Symmetric difference of the two scales. Each missing value is reported
/// once, on the side that lacks it.
pub fn compare_spacing_sets(css: &[f64], native: &[f64]) -> Vec<String> {
    let mut errors = Vec::new();
    for v in distinct(css) {
        if !native.iter().any(|n| approx_eq(*n, v)) {
            errors.push(format!(
                "spacing {} is in CSS but missing from the native scale",
                fmt_num(v)
            ));
        }
    }
    for v in distinct(native) {
        if !css.iter().any(|c| approx_eq(*c, v)) {
            errors.push(format!(
                "spacing {} is in the native scale but missing from CSS",
                fmt_num(v)
            ));
        }
    }
    errors
}

fn distinct(values: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::with_capacity(values.len());
    for v in values {
        if !out.iter().any(|o| approx_eq(*o, *v)) {
            out.push(*v);
        }
    }
    out
}

fn fmt_num(v: f64) -> String {
    crate::render::format_number(v)
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

pub fn compare_typography_groups(
    mappings: &[TypographyMapping],
    css: &BTreeMap<String, String>,
    native: &BTreeMap<String, NativeTypeStyle>,
) -> Vec<String> {
    let mut errors = Vec::new();
    for m in mappings {
        let Some(group) = native.get(&m.native_group) else {
            errors.push(format!(
                "{}: native typography group '{}' not found",
                m.name, m.native_group
            ));
            continue;
        };
        compare_type_group(m, css, group, &mut errors);
    }
    errors
}

fn compare_type_group(
    m: &TypographyMapping,
    css: &BTreeMap<String, String>,
    group: &NativeTypeStyle,
    errors: &mut Vec<String>,
) {
    let css_value = |suffix: &str, errors: &mut Vec<String>| -> Option<f64> {
        let property = format!("{}-{suffix}", m.css_prefix);
        match css.get(&property) {
            None => {
                errors.push(format!("{}: CSS token {property} not found", m.name));
                None
            }
            Some(raw) => {
                let parsed = parse_px(raw);
                if parsed.is_none() {
                    errors.push(format!(
                        "{}: CSS token {property} is not numeric ({raw})",
                        m.name
                    ));
                }
                parsed
            }
        }
    };

    let numeric = |field: &str, suffix: &str, native: Option<f64>, errors: &mut Vec<String>| {
        let css = css_value(suffix, errors);
        let Some(native) = native else {
            errors.push(format!(
                "{}: native {}.{field} not found",
                m.name, m.native_group
            ));
            return;
        };
        if let Some(css) = css {
            if !approx_eq(css, native) {
                errors.push(format!(
                    "{} {field}: CSS {} vs native {}",
                    m.name,
                    fmt_num(css),
                    fmt_num(native)
                ));
            }
        }
    };

    numeric("size", "size", group.size, errors);
    numeric("lineHeight", "line", group.line_height, errors);
    numeric("tracking", "tracking", group.tracking, errors);

    let mut weights = vec![("weight", "weight", group.weight.as_deref())];
    if m.emphasis {
        weights.push((
            "emphasisWeight",
            "weight-emphasis",
            group.emphasis_weight.as_deref(),
        ));
    }
    for (field, suffix, name) in weights {
        let Some(name) = name else {
            // Still report the CSS side if it is missing too.
            css_value(suffix, errors);
            errors.push(format!(
                "{}: native {}.{field} not found",
                m.name, m.native_group
            ));
            continue;
        };
        let Some(native) = weight_value(name) else {
            errors.push(format!(
                "{}: unrecognized native weight '.{name}' for {field}",
                m.name
            ));
            continue;
        };
        numeric(field, suffix, Some(f64::from(native)), errors);
    }
}

// ---------------------------------------------------------------------------
// Font family
// ---------------------------------------------------------------------------

pub fn compare_font_family(css: &BTreeMap<String, String>, native: Option<&str>) -> Vec<String> {
    let css_family = css_font_family(css);
    match (css_family.as_deref(), native) {
        (Some(c), Some(n)) if c == n => Vec::new(),
        (Some(c), Some(n)) => vec![format!("font family: CSS \"{c}\" vs native \"{n}\"")],
        (None, _) => vec!["font family: CSS token --foundation-font-family not found".to_string()],
        (_, None) => vec!["font family: native fontFamily not found".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
