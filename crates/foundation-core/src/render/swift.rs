//! Swift constants mirror of the non-color tokens.
//!
//! Colors ship through the asset catalog (see [`super::catalog`]); this file
//! carries the font family, spacing scale, type styles, radii and sizes.

use super::{camel_case, format_number, pascal_case};
use crate::error::{Result, TokenError};
use crate::tokens::{weight_name, TokenSource, TypeStyle};
use std::collections::BTreeMap;

pub const ROOT_ENUM: &str = "FoundationTokens";

const HEADER: &str = "// Generated by foundation from tokens/foundation.json. Do not edit directly.\n";
const INDENT: &str = "    ";

pub fn render_swift_constants(tokens: &TokenSource) -> Result<String> {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\nimport SwiftUI\n\n");
    out.push_str(&format!("public enum {ROOT_ENUM} {{\n"));

    line(
        &mut out,
        1,
        &format!(
            "public static let fontFamily = \"{}\"",
            tokens.typography.font_family
        ),
    );

    out.push('\n');
    line(&mut out, 1, "public enum Spacing {");
    let scale = tokens
        .spacing
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(", ");
    line(
        &mut out,
        2,
        &format!("public static let scale: [CGFloat] = [{scale}]"),
    );
    line(&mut out, 1, "}");

    out.push('\n');
    line(&mut out, 1, "public enum Typography {");
    for (i, (name, style)) in tokens.typography.styles.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_type_style(&mut out, name, style)?;
    }
    line(&mut out, 1, "}");

    render_lengths(&mut out, "Radius", &tokens.radius);
    render_lengths(&mut out, "Size", &tokens.size);

    out.push_str("}\n");
    Ok(out)
}

fn render_type_style(out: &mut String, name: &str, style: &TypeStyle) -> Result<()> {
    line(out, 2, &format!("public enum {} {{", pascal_case(name)));
    line(
        out,
        3,
        &format!("public static let size: CGFloat = {}", format_number(style.size)),
    );
    line(
        out,
        3,
        &format!(
            "public static let lineHeight: CGFloat = {}",
            format_number(style.line_height)
        ),
    );
    let weights = [
        ("weight", Some(style.weight)),
        ("emphasisWeight", style.emphasis_weight),
        ("regularWeight", style.regular_weight),
    ];
    for (field, weight) in weights {
        let Some(w) = weight else { continue };
        let swift_name = weight_name(w).ok_or_else(|| {
            TokenError::invalid(
                format!("typography.{name}.{field}"),
                format!("{w} has no Font.Weight equivalent"),
            )
        })?;
        line(
            out,
            3,
            &format!("public static let {field}: Font.Weight = .{swift_name}"),
        );
    }
    line(
        out,
        3,
        &format!(
            "public static let tracking: CGFloat = {}",
            format_number(style.tracking)
        ),
    );
    line(out, 2, "}");
    Ok(())
}

fn render_lengths(out: &mut String, enum_name: &str, values: &BTreeMap<String, f64>) {
    out.push('\n');
    line(out, 1, &format!("public enum {enum_name} {{"));
    for (key, v) in values {
        line(
            out,
            2,
            &format!(
                "public static let {}: CGFloat = {}",
                swift_identifier(key),
                format_number(*v)
            ),
        );
    }
    line(out, 1, "}");
}

/// Token keys like `2xl` are not valid Swift identifiers on their own.
fn swift_identifier(key: &str) -> String {
    let ident = camel_case(key);
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{ident}")
    } else {
        ident
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(text);
    out.push('\n');
}
