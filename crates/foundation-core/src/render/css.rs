//! CSS custom-property stylesheet.
//!
//! Layout of the rendered document:
//!
//! 1. `:root` with one `--foundation-*` declaration per token leaf
//! 2. `@media (prefers-contrast: high)` re-pointing secondary text and icon
//!    slots at their primary slot
//! 3. `@media (prefers-reduced-motion: reduce)`
//! 4. `.foundation-focus-ring` and `.foundation-sr-only` utilities
//!
//! Consumers that want base values should stop reading at the high-contrast
//! block, since it reassigns variables.

use super::{format_number, kebab_case};
use crate::tokens::{ColorRole, Scheme, ShadowLayer, TokenSource, TypeStyle};

pub const PREFIX: &str = "--foundation-";
pub const HIGH_CONTRAST_MEDIA: &str = "@media (prefers-contrast: high)";
pub const REDUCED_MOTION_MEDIA: &str = "@media (prefers-reduced-motion: reduce)";

const HEADER: &str = "/* Generated by foundation from tokens/foundation.json. Do not edit directly. */\n";
const FONT_FALLBACK: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", sans-serif";

const REDUCED_MOTION_BODY: &str = "  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
    scroll-behavior: auto !important;
  }
";

const UTILITIES: &str = ".foundation-focus-ring:focus-visible {
  outline: 2px solid currentColor;
  outline-offset: 2px;
}

.foundation-sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}
";

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

pub fn role_prefix(role: ColorRole) -> &'static str {
    match role {
        ColorRole::Background => "bg",
        other => other.as_str(),
    }
}

/// Background surfaces are numbered by elevation; other slots keep their name.
pub fn slot_suffix(role: ColorRole, slot: &str) -> String {
    match (role, slot) {
        (ColorRole::Background, "primary") => "1".to_string(),
        (ColorRole::Background, "secondary") => "2".to_string(),
        (ColorRole::Background, "tertiary") => "3".to_string(),
        _ => kebab_case(slot),
    }
}

/// `--foundation-bg-light-1`, `--foundation-icon-dark-status-error`.
pub fn color_property(role: ColorRole, scheme: Scheme, slot: &str) -> String {
    format!(
        "{PREFIX}{}-{scheme}-{}",
        role_prefix(role),
        slot_suffix(role, slot)
    )
}

pub fn spacing_property(value: f64) -> String {
    format!("{PREFIX}space-{}", format_number(value).replace('.', "_"))
}

pub fn typography_property(style: &str, field: &str) -> String {
    format!("{PREFIX}{}-{field}", kebab_case(style))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render_stylesheet(tokens: &TokenSource) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    out.push_str(":root {\n");
    render_colors(&mut out, tokens);
    render_spacing(&mut out, &tokens.spacing);
    render_typography(&mut out, tokens);
    section(&mut out, "Radius");
    for (key, v) in &tokens.radius {
        decl(&mut out, &format!("{PREFIX}radius-{key}"), &px(*v));
    }
    section(&mut out, "Size");
    for (key, v) in &tokens.size {
        decl(&mut out, &format!("{PREFIX}size-{}", kebab_case(key)), &px(*v));
    }
    section(&mut out, "Shadow");
    for (key, layers) in &tokens.shadow {
        decl(&mut out, &format!("{PREFIX}shadow-{key}"), &shadow_value(layers));
    }
    out.push_str("}\n\n");

    out.push_str(HIGH_CONTRAST_MEDIA);
    out.push_str(" {\n  :root {\n");
    render_high_contrast(&mut out, tokens);
    out.push_str("  }\n}\n\n");

    out.push_str(REDUCED_MOTION_MEDIA);
    out.push_str(" {\n");
    out.push_str(REDUCED_MOTION_BODY);
    out.push_str("}\n\n");

    out.push_str(UTILITIES);
    out
}

fn render_colors(out: &mut String, tokens: &TokenSource) {
    for (role, pair) in tokens.colors.iter() {
        section(out, &format!("Color: {role}"));
        for scheme in Scheme::all() {
            for (slot, color) in pair.scheme(*scheme) {
                decl(out, &color_property(role, *scheme, slot), color.as_str());
            }
        }
    }
}

fn render_spacing(out: &mut String, scale: &[f64]) {
    section(out, "Spacing");
    for v in scale {
        decl(out, &spacing_property(*v), &px(*v));
    }
}

fn render_typography(out: &mut String, tokens: &TokenSource) {
    section(out, "Typography");
    decl(
        out,
        &format!("{PREFIX}font-family"),
        &format!("\"{}\", {FONT_FALLBACK}", tokens.typography.font_family),
    );
    for (name, style) in &tokens.typography.styles {
        render_type_style(out, name, style);
    }
}

fn render_type_style(out: &mut String, name: &str, style: &TypeStyle) {
    decl(out, &typography_property(name, "size"), &px(style.size));
    decl(out, &typography_property(name, "line"), &px(style.line_height));
    decl(out, &typography_property(name, "weight"), &style.weight.to_string());
    if let Some(w) = style.emphasis_weight {
        decl(out, &typography_property(name, "weight-emphasis"), &w.to_string());
    }
    if let Some(w) = style.regular_weight {
        decl(out, &typography_property(name, "weight-regular"), &w.to_string());
    }
    decl(out, &typography_property(name, "tracking"), &px(style.tracking));
}

/// Non-primary text and icon slots collapse onto `primary` for high contrast.
fn render_high_contrast(out: &mut String, tokens: &TokenSource) {
    for role in [ColorRole::Text, ColorRole::Icon] {
        let Some(pair) = tokens.colors.role(role) else {
            continue;
        };
        for scheme in Scheme::all() {
            let slots = pair.scheme(*scheme);
            if !slots.contains_key("primary") {
                continue;
            }
            let target = color_property(role, *scheme, "primary");
            for slot in slots.keys().filter(|s| s.as_str() != "primary") {
                out.push_str(&format!(
                    "    {}: var({target});\n",
                    color_property(role, *scheme, slot)
                ));
            }
        }
    }
}

fn shadow_value(layers: &[ShadowLayer]) -> String {
    layers
        .iter()
        .map(|l| {
            format!(
                "{} {} {} {} {}",
                px(l.offset_x),
                px(l.offset_y),
                px(l.blur),
                px(l.spread),
                l.color
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn px(v: f64) -> String {
    format!("{}px", format_number(v))
}

fn section(out: &mut String, title: &str) {
    if !out.ends_with("{\n") {
        out.push('\n');
    }
    out.push_str(&format!("  /* {title} */\n"));
}

fn decl(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!("  {name}: {value};\n"));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
