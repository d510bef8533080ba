//! Platform artifact renderers.
//!
//! Every renderer is a pure function of the [`TokenSource`]: no timestamps, no
//! random identifiers, and ordered iteration throughout.

pub mod catalog;
pub mod css;
pub mod swift;

use crate::error::Result;
use crate::tokens::TokenSource;
use std::collections::BTreeMap;

/// Everything one generation run writes, besides the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub css: String,
    pub swift: String,
    /// Colorset name -> `Contents.json` text.
    pub colorsets: BTreeMap<String, String>,
}

pub fn render_all(tokens: &TokenSource) -> Result<Artifacts> {
    tokens.check()?;
    Ok(Artifacts {
        css: css::render_stylesheet(tokens),
        swift: swift::render_swift_constants(tokens)?,
        colorsets: catalog::render_colorsets(tokens),
    })
}

// ---------------------------------------------------------------------------
// Naming and number helpers shared by the renderers
// ---------------------------------------------------------------------------

/// `statusError` -> `status-error`, `body_small` -> `body-small`.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '_' || c == ' ' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// `statusError` -> `StatusError`, `body-small` -> `BodySmall`.
pub fn pascal_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|s| !s.is_empty())
        .map(|seg| {
            let mut chars = seg.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `control-height` -> `controlHeight`.
pub fn camel_case(name: &str) -> String {
    let pascal = pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Shortest decimal form: `16`, `-0.25`, `1.5`. Never `-0`.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STARTER_TOKENS;

    #[test]
    fn kebab_case_conversions() {
        assert_eq!(kebab_case("statusError"), "status-error");
        assert_eq!(kebab_case("bodySmall"), "body-small");
        assert_eq!(kebab_case("heading1"), "heading1");
        assert_eq!(kebab_case("control_height"), "control-height");
        assert_eq!(kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn pascal_and_camel_case() {
        assert_eq!(pascal_case("statusError"), "StatusError");
        assert_eq!(pascal_case("body-small"), "BodySmall");
        assert_eq!(pascal_case("heading1"), "Heading1");
        assert_eq!(camel_case("control-height"), "controlHeight");
        assert_eq!(camel_case("md"), "md");
    }

    #[test]
    fn format_number_is_shortest() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn render_all_is_deterministic() {
        let a = TokenSource::from_dtcg_str(STARTER_TOKENS).unwrap();
        let b = TokenSource::from_dtcg_str(STARTER_TOKENS).unwrap();
        assert_eq!(render_all(&a).unwrap(), render_all(&b).unwrap());
    }
}
