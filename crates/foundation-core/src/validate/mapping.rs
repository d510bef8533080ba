use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ColorMapping
// ---------------------------------------------------------------------------

/// One semantic color and where each platform keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMapping {
    pub name: String,
    pub css_light: String,
    pub css_dark: String,
    pub colorset: String,
}

impl ColorMapping {
    fn new(name: &str, css_light: &str, css_dark: &str, colorset: &str) -> Self {
        Self {
            name: name.to_string(),
            css_light: css_light.to_string(),
            css_dark: css_dark.to_string(),
            colorset: colorset.to_string(),
        }
    }
}

pub fn default_color_mappings() -> Vec<ColorMapping> {
    vec![
        ColorMapping::new(
            "background.primary",
            "--foundation-bg-light-1",
            "--foundation-bg-dark-1",
            "BackgroundPrimary",
        ),
        ColorMapping::new(
            "background.secondary",
            "--foundation-bg-light-2",
            "--foundation-bg-dark-2",
            "BackgroundSecondary",
        ),
        ColorMapping::new(
            "background.tertiary",
            "--foundation-bg-light-3",
            "--foundation-bg-dark-3",
            "BackgroundTertiary",
        ),
        ColorMapping::new(
            "text.primary",
            "--foundation-text-light-primary",
            "--foundation-text-dark-primary",
            "TextPrimary",
        ),
        ColorMapping::new(
            "text.secondary",
            "--foundation-text-light-secondary",
            "--foundation-text-dark-secondary",
            "TextSecondary",
        ),
        ColorMapping::new(
            "text.tertiary",
            "--foundation-text-light-tertiary",
            "--foundation-text-dark-tertiary",
            "TextTertiary",
        ),
        ColorMapping::new(
            "text.inverted",
            "--foundation-text-light-inverted",
            "--foundation-text-dark-inverted",
            "TextInverted",
        ),
        ColorMapping::new(
            "icon.primary",
            "--foundation-icon-light-primary",
            "--foundation-icon-dark-primary",
            "IconPrimary",
        ),
        ColorMapping::new(
            "icon.secondary",
            "--foundation-icon-light-secondary",
            "--foundation-icon-dark-secondary",
            "IconSecondary",
        ),
        ColorMapping::new(
            "icon.tertiary",
            "--foundation-icon-light-tertiary",
            "--foundation-icon-dark-tertiary",
            "IconTertiary",
        ),
        ColorMapping::new(
            "icon.statusError",
            "--foundation-icon-light-status-error",
            "--foundation-icon-dark-status-error",
            "IconStatusError",
        ),
        ColorMapping::new(
            "border.light",
            "--foundation-border-light-light",
            "--foundation-border-dark-light",
            "BorderLight",
        ),
        ColorMapping::new(
            "border.default",
            "--foundation-border-light-default",
            "--foundation-border-dark-default",
            "BorderDefault",
        ),
        ColorMapping::new(
            "border.heavy",
            "--foundation-border-light-heavy",
            "--foundation-border-dark-heavy",
            "BorderHeavy",
        ),
        ColorMapping::new(
            "accent.blue",
            "--foundation-accent-light-blue",
            "--foundation-accent-dark-blue",
            "AccentBlue",
        ),
        ColorMapping::new(
            "accent.red",
            "--foundation-accent-light-red",
            "--foundation-accent-dark-red",
            "AccentRed",
        ),
        ColorMapping::new(
            "accent.orange",
            "--foundation-accent-light-orange",
            "--foundation-accent-dark-orange",
            "AccentOrange",
        ),
        ColorMapping::new(
            "accent.green",
            "--foundation-accent-light-green",
            "--foundation-accent-dark-green",
            "AccentGreen",
        ),
        ColorMapping::new(
            "accent.purple",
            "--foundation-accent-light-purple",
            "--foundation-accent-dark-purple",
            "AccentPurple",
        ),
        ColorMapping::new(
            "interactive.primary",
            "--foundation-interactive-light-primary",
            "--foundation-interactive-dark-primary",
            "InteractivePrimary",
        ),
        ColorMapping::new(
            "interactive.hover",
            "--foundation-interactive-light-hover",
            "--foundation-interactive-dark-hover",
            "InteractiveHover",
        ),
        ColorMapping::new(
            "interactive.disabled",
            "--foundation-interactive-light-disabled",
            "--foundation-interactive-dark-disabled",
            "InteractiveDisabled",
        ),
    ]
}

// ---------------------------------------------------------------------------
// TypographyMapping
// ---------------------------------------------------------------------------

/// One type style: its CSS token prefix and its Swift group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyMapping {
    pub name: String,
    pub css_prefix: String,
    pub native_group: String,
    /// Whether an emphasis weight is expected on both sides.
    #[serde(default)]
    pub emphasis: bool,
}

impl TypographyMapping {
    fn new(name: &str, css_prefix: &str, native_group: &str, emphasis: bool) -> Self {
        Self {
            name: name.to_string(),
            css_prefix: css_prefix.to_string(),
            native_group: native_group.to_string(),
            emphasis,
        }
    }
}

pub fn default_typography_mappings() -> Vec<TypographyMapping> {
    vec![
        TypographyMapping::new("heading1", "--foundation-heading1", "Heading1", false),
        TypographyMapping::new("heading2", "--foundation-heading2", "Heading2", false),
        TypographyMapping::new("heading3", "--foundation-heading3", "Heading3", false),
        TypographyMapping::new("body", "--foundation-body", "Body", true),
        TypographyMapping::new("bodySmall", "--foundation-body-small", "BodySmall", true),
        TypographyMapping::new("caption", "--foundation-caption", "Caption", true),
    ]
}
