//! Custom-property extraction from a rendered stylesheet.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Everything from this marker on reassigns variables for accessibility
/// modes and is not part of the baseline.
const OVERRIDES_MARKER: &str = "@media (prefers-contrast: high)";
const SPACING_PREFIX: &str = "--foundation-space-";
pub const FONT_FAMILY_PROPERTY: &str = "--foundation-font-family";

static DECL_RE: OnceLock<Regex> = OnceLock::new();

fn decl_re() -> &'static Regex {
    DECL_RE.get_or_init(|| {
        Regex::new(r"(--foundation-[A-Za-z0-9_-]+)\s*:\s*([^;{}]+);").unwrap()
    })
}

/// Baseline `--foundation-*` declarations, name -> trimmed raw value.
///
/// `var(...)` aliases are skipped and the first declaration of a name wins.
pub fn extract_css_tokens(css: &str) -> BTreeMap<String, String> {
    let baseline = match css.find(OVERRIDES_MARKER) {
        Some(idx) => &css[..idx],
        None => css,
    };
    let mut out = BTreeMap::new();
    for cap in decl_re().captures_iter(baseline) {
        let value = cap[2].trim();
        if value.starts_with("var(") {
            continue;
        }
        out.entry(cap[1].to_string())
            .or_insert_with(|| value.to_string());
    }
    out
}

/// `16px` -> 16.0, `600` -> 600.0, `-0.25px` -> -0.25.
pub fn parse_px(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Spacing values read from `--foundation-space-*` declarations.
pub fn css_spacing_scale(tokens: &BTreeMap<String, String>) -> Vec<f64> {
    tokens
        .iter()
        .filter(|(name, _)| name.starts_with(SPACING_PREFIX))
        .filter_map(|(_, value)| parse_px(value))
        .collect()
}

/// First family named by `--foundation-font-family`, quotes removed.
pub fn css_font_family(tokens: &BTreeMap<String, String>) -> Option<String> {
    let raw = tokens.get(FONT_FAMILY_PROPERTY)?;
    let first = raw.split(',').next()?.trim();
    let unquoted = first.trim_matches(|c| c == '"' || c == '\'');
    (!unquoted.is_empty()).then(|| unquoted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
:root {
  --foundation-bg-light-1: #FFFFFF;
  --foundation-bg-dark-1: #212121;
  --foundation-text-alias: var(--foundation-bg-light-1);
  --foundation-space-16: 16px;
  --foundation-space-8: 8px;
  --foundation-font-family: "SF Pro", -apple-system, sans-serif;
  --foundation-bg-light-1: #000000;
  --other-var: 1px;
}

@media (prefers-contrast: high) {
  :root {
    --foundation-text-light-secondary: #123456;
  }
}
"#;

    #[test]
    fn extracts_baseline_declarations() {
        let tokens = extract_css_tokens(SAMPLE);
        assert_eq!(tokens["--foundation-bg-light-1"], "#FFFFFF");
        assert_eq!(tokens["--foundation-bg-dark-1"], "#212121");
        assert!(!tokens.contains_key("--other-var"));
    }

    #[test]
    fn skips_var_aliases() {
        let tokens = extract_css_tokens(SAMPLE);
        assert!(!tokens.contains_key("--foundation-text-alias"));
    }

    #[test]
    fn excludes_high_contrast_overrides() {
        let tokens = extract_css_tokens(SAMPLE);
        assert!(!tokens.contains_key("--foundation-text-light-secondary"));
    }

    #[test]
    fn no_marker_reads_everything() {
        let tokens = extract_css_tokens(":root { --foundation-radius-md: 8px; }");
        assert_eq!(tokens["--foundation-radius-md"], "8px");
    }

    #[test]
    fn spacing_and_font_family() {
        let tokens = extract_css_tokens(SAMPLE);
        let mut scale = css_spacing_scale(&tokens);
        scale.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(scale, vec![8.0, 16.0]);
        assert_eq!(css_font_family(&tokens).as_deref(), Some("SF Pro"));
    }

    #[test]
    fn parse_px_forms() {
        assert_eq!(parse_px("16px"), Some(16.0));
        assert_eq!(parse_px(" -0.25px "), Some(-0.25));
        assert_eq!(parse_px("600"), Some(600.0));
        assert_eq!(parse_px("1rem"), None);
    }
}
