//! Pattern-based reading of the Swift constants source.
//!
//! Only the shapes the generator emits need to be understood, but the scanner
//! tolerates hand edits: optional type annotations, `let`/`var`, arbitrary
//! whitespace, and comments outside the matched declarations.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeConstants {
    pub font_family: Option<String>,
    pub spacing: Option<Vec<f64>>,
    /// Group name (`Heading1`) -> parsed fields.
    pub typography: BTreeMap<String, NativeTypeStyle>,
}

/// Fields of one type-style group. Weights stay as their Swift names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeTypeStyle {
    pub size: Option<f64>,
    pub line_height: Option<f64>,
    pub weight: Option<String>,
    pub emphasis_weight: Option<String>,
    pub tracking: Option<f64>,
}

static FONT_FAMILY_RE: OnceLock<Regex> = OnceLock::new();
static SPACING_RE: OnceLock<Regex> = OnceLock::new();
static TYPOGRAPHY_RE: OnceLock<Regex> = OnceLock::new();
static GROUP_RE: OnceLock<Regex> = OnceLock::new();
static FIELD_RE: OnceLock<Regex> = OnceLock::new();

fn font_family_re() -> &'static Regex {
    FONT_FAMILY_RE.get_or_init(|| {
        Regex::new(r#"(?:let|var)\s+fontFamily\s*(?::\s*String\s*)?=\s*"([^"]*)""#).unwrap()
    })
}

fn spacing_re() -> &'static Regex {
    SPACING_RE.get_or_init(|| {
        Regex::new(r"(?:let|var)\s+scale\s*(?::\s*\[\s*\w+\s*\]\s*)?=\s*\[([^\]]*)\]").unwrap()
    })
}

fn typography_re() -> &'static Regex {
    TYPOGRAPHY_RE.get_or_init(|| Regex::new(r"enum\s+Typography\s*\{").unwrap())
}

fn group_re() -> &'static Regex {
    GROUP_RE.get_or_init(|| Regex::new(r"enum\s+(\w+)\s*\{").unwrap())
}

fn field_re() -> &'static Regex {
    FIELD_RE.get_or_init(|| {
        Regex::new(r"(?:let|var)\s+(\w+)\s*(?::\s*[\w.]+\s*)?=\s*([\w.+-]+)").unwrap()
    })
}

/// Declared name -> raw right-hand side, first declaration wins.
fn fields(body: &str) -> BTreeMap<&str, &str> {
    let mut out = BTreeMap::new();
    for cap in field_re().captures_iter(body) {
        if let (Some(name), Some(value)) = (cap.get(1), cap.get(2)) {
            out.entry(name.as_str()).or_insert(value.as_str());
        }
    }
    out
}

fn number_field(fields: &BTreeMap<&str, &str>, field: &str) -> Option<f64> {
    fields
        .get(field)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// `.semibold` or `Font.Weight.semibold` -> `semibold`.
fn weight_field(fields: &BTreeMap<&str, &str>, field: &str) -> Option<String> {
    let raw = *fields.get(field)?;
    let name = raw.strip_prefix("Font.Weight").unwrap_or(raw).strip_prefix('.')?;
    (!name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
        .then(|| name.to_string())
}

pub fn parse_native_constants(source: &str) -> NativeConstants {
    let font_family = font_family_re()
        .captures(source)
        .map(|c| c[1].to_string());

    let spacing = spacing_re().captures(source).map(|c| {
        c[1].split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse::<f64>().ok())
            .collect()
    });

    let typography = typography_re()
        .find(source)
        .and_then(|m| block_body(source, m.end() - 1))
        .map(parse_type_groups)
        .unwrap_or_default();

    NativeConstants {
        font_family,
        spacing,
        typography,
    }
}

fn parse_type_groups(body: &str) -> BTreeMap<String, NativeTypeStyle> {
    let mut out = BTreeMap::new();
    let mut offset = 0;
    while let Some(cap) = group_re().captures(&body[offset..]) {
        let Some(header) = cap.get(0) else { break };
        let open = offset + header.end() - 1;
        let Some(group_body) = block_body(body, open) else {
            break;
        };
        let fields = fields(group_body);
        let style = NativeTypeStyle {
            size: number_field(&fields, "size"),
            line_height: number_field(&fields, "lineHeight"),
            weight: weight_field(&fields, "weight"),
            emphasis_weight: weight_field(&fields, "emphasisWeight"),
            tracking: number_field(&fields, "tracking"),
        };
        out.entry(cap[1].to_string()).or_insert(style);
        // Resume after the group's closing brace.
        offset = open + group_body.len() + 2;
    }
    out
}

/// Text between the `{` at `open` and its matching `}`.
fn block_body(text: &str, open: usize) -> Option<&str> {
    if text.as_bytes().get(open) != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open + 1..i]);
                }
            }
            _ => {}
        }
    }
    None
}
