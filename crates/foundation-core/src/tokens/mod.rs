//! Typed design-token model.
//!
//! A [`TokenSource`] is built once (usually from a DTCG JSON document, see
//! [`dtcg`]) and then passed by reference to every renderer. All maps are
//! ordered so that rendering is a pure function of the source.

pub mod color;
pub mod dtcg;

pub use color::{normalize_hex, HexColor, Rgba};

use crate::error::{Result, TokenError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// ColorRole / Scheme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Background,
    Text,
    Icon,
    Border,
    Accent,
    Interactive,
}

impl ColorRole {
    pub fn all() -> &'static [ColorRole] {
        &[
            ColorRole::Background,
            ColorRole::Text,
            ColorRole::Icon,
            ColorRole::Border,
            ColorRole::Accent,
            ColorRole::Interactive,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Text => "text",
            ColorRole::Icon => "icon",
            ColorRole::Border => "border",
            ColorRole::Accent => "accent",
            ColorRole::Interactive => "interactive",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Light,
    Dark,
}

impl Scheme {
    pub fn all() -> &'static [Scheme] {
        &[Scheme::Light, Scheme::Dark]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Light => "light",
            Scheme::Dark => "dark",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Light and dark slot tables for one role. Both sides carry the same slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemePair {
    pub light: BTreeMap<String, HexColor>,
    pub dark: BTreeMap<String, HexColor>,
}

impl SchemePair {
    pub fn scheme(&self, scheme: Scheme) -> &BTreeMap<String, HexColor> {
        match scheme {
            Scheme::Light => &self.light,
            Scheme::Dark => &self.dark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens(BTreeMap<ColorRole, SchemePair>);

impl ColorTokens {
    pub fn insert(&mut self, role: ColorRole, pair: SchemePair) {
        self.0.insert(role, pair);
    }

    pub fn role(&self, role: ColorRole) -> Option<&SchemePair> {
        self.0.get(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &SchemePair)> {
        self.0.iter().map(|(r, p)| (*r, p))
    }

    /// Number of named slots, counted on the light scheme.
    pub fn slot_count(&self) -> usize {
        self.0.values().map(|p| p.light.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub size: f64,
    pub line_height: f64,
    pub weight: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_weight: Option<u16>,
    pub tracking: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub styles: BTreeMap<String, TypeStyle>,
}

/// SwiftUI `Font.Weight` names and their CSS numeric equivalents.
pub const FONT_WEIGHTS: &[(&str, u16)] = &[
    ("ultraLight", 100),
    ("thin", 200),
    ("light", 300),
    ("regular", 400),
    ("medium", 500),
    ("semibold", 600),
    ("bold", 700),
    ("heavy", 800),
    ("black", 900),
];

pub fn weight_value(name: &str) -> Option<u16> {
    FONT_WEIGHTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
}

pub fn weight_name(value: u16) -> Option<&'static str> {
    FONT_WEIGHTS
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(n, _)| *n)
}

// ---------------------------------------------------------------------------
// Shadow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowLayer {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
}

// ---------------------------------------------------------------------------
// TokenSource
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSource {
    pub colors: ColorTokens,
    pub spacing: Vec<f64>,
    pub typography: Typography,
    pub radius: BTreeMap<String, f64>,
    pub shadow: BTreeMap<String, Vec<ShadowLayer>>,
    pub size: BTreeMap<String, f64>,
}

impl TokenSource {
    /// Check the invariants every renderer relies on.
    ///
    /// Sources loaded through [`dtcg`] already satisfy these; sources built in
    /// code are checked again before rendering.
    pub fn check(&self) -> Result<()> {
        for role in ColorRole::all() {
            let pair = self
                .colors
                .role(*role)
                .ok_or_else(|| TokenError::missing(format!("color.{role}")))?;
            check_mirrored(*role, pair)?;
        }

        check_spacing(&self.spacing)?;

        if self.typography.font_family.trim().is_empty() {
            return Err(TokenError::missing("typography.fontFamily"));
        }
        if self.typography.font_family.contains('"') {
            return Err(TokenError::invalid(
                "typography.fontFamily",
                "must not contain double quotes",
            ));
        }
        for (name, style) in &self.typography.styles {
            let weights = [
                ("weight", Some(style.weight)),
                ("emphasisWeight", style.emphasis_weight),
                ("regularWeight", style.regular_weight),
            ];
            for (field, weight) in weights {
                if let Some(w) = weight {
                    if weight_name(w).is_none() {
                        return Err(TokenError::invalid(
                            format!("typography.{name}.{field}"),
                            format!("{w} is not one of 100, 200, ..., 900"),
                        ));
                    }
                }
            }
        }

        for (name, layers) in &self.shadow {
            if layers.is_empty() {
                return Err(TokenError::missing(format!("shadow.{name}")));
            }
        }
        Ok(())
    }
}

fn check_mirrored(role: ColorRole, pair: &SchemePair) -> Result<()> {
    for slot in pair.light.keys() {
        if !pair.dark.contains_key(slot) {
            return Err(TokenError::missing(format!("color.{role}.dark.{slot}")));
        }
    }
    for slot in pair.dark.keys() {
        if !pair.light.contains_key(slot) {
            return Err(TokenError::missing(format!("color.{role}.light.{slot}")));
        }
    }
    Ok(())
}

fn check_spacing(scale: &[f64]) -> Result<()> {
    if scale.is_empty() {
        return Err(TokenError::missing("spacing"));
    }
    if let Some(v) = scale.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(TokenError::invalid(
            "spacing",
            format!("{v} is not a non-negative length"),
        ));
    }
    for pair in scale.windows(2) {
        if pair[1] >= pair[0] {
            return Err(TokenError::invalid(
                "spacing",
                format!(
                    "scale must be strictly descending without duplicates ({} then {})",
                    pair[0], pair[1]
                ),
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
