use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// 8-bit sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Build from normalized 0..1 components, as stored in asset catalogs.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
            a: unit_to_byte(a),
        }
    }

    pub fn to_unit(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a].map(|c| f64::from(c) / 255.0)
    }

    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ---------------------------------------------------------------------------
// HexColor
// ---------------------------------------------------------------------------

/// A validated `#RRGGBB` or `#RRGGBBAA` color, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    pub fn from_rgba(c: Rgba) -> Self {
        if c.is_opaque() {
            Self(format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b))
        } else {
            Self(format!("#{:02X}{:02X}{:02X}{:02X}", c.r, c.g, c.b, c.a))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgba(&self) -> Rgba {
        let byte = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        Rgba {
            r: byte(1),
            g: byte(3),
            b: byte(5),
            a: if self.0.len() == 9 { byte(7) } else { u8::MAX },
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        HexColor::parse(&s).ok_or_else(|| format!("'{s}' is not a #RRGGBB or #RRGGBBAA color"))
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.0
    }
}

/// Normalize any CSS hex color for comparison: uppercase, short forms
/// expanded, a fully opaque alpha channel dropped.
pub fn normalize_hex(s: &str) -> Option<String> {
    let digits = s.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return None,
    };
    let upper = expanded.to_ascii_uppercase();
    match upper.strip_suffix("FF") {
        Some(rgb) if upper.len() == 8 => Some(format!("#{rgb}")),
        _ => Some(format!("#{upper}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_uppercases() {
        assert_eq!(HexColor::parse("#0d0d0d").unwrap().as_str(), "#0D0D0D");
        assert_eq!(HexColor::parse("#0000001a").unwrap().as_str(), "#0000001A");
    }

    #[test]
    fn parse_rejects_bad_input() {
        for s in ["FFFFFF", "#FFF", "#GGGGGG", "#FFFFFFF", "", "#"] {
            assert!(HexColor::parse(s).is_none(), "expected invalid: {s}");
        }
    }

    #[test]
    fn rgba_components() {
        let c = HexColor::parse("#21212180").unwrap().rgba();
        assert_eq!(c, Rgba { r: 0x21, g: 0x21, b: 0x21, a: 0x80 });
        assert!(HexColor::parse("#212121").unwrap().rgba().is_opaque());
    }

    #[test]
    fn from_rgba_drops_opaque_alpha() {
        let opaque = Rgba { r: 255, g: 0, b: 16, a: 255 };
        assert_eq!(HexColor::from_rgba(opaque).as_str(), "#FF0010");
        let translucent = Rgba { a: 26, ..opaque };
        assert_eq!(HexColor::from_rgba(translucent).as_str(), "#FF00101A");
    }

    #[test]
    fn normalize_hex_forms() {
        assert_eq!(normalize_hex("#fff").as_deref(), Some("#FFFFFF"));
        assert_eq!(normalize_hex("#ffff").as_deref(), Some("#FFFFFF"));
        assert_eq!(normalize_hex("#212121FF").as_deref(), Some("#212121"));
        assert_eq!(normalize_hex(" #0000001a ").as_deref(), Some("#0000001A"));
        assert_eq!(normalize_hex("rgb(0, 0, 0)"), None);
        assert_eq!(normalize_hex("#12345"), None);
    }

    proptest! {
        #[test]
        fn unit_components_round_trip(r: u8, g: u8, b: u8, a: u8) {
            let c = Rgba { r, g, b, a };
            let [ur, ug, ub, ua] = c.to_unit();
            // Catalogs store three decimals.
            let q = |v: f64| (v * 1000.0).round() / 1000.0;
            prop_assert_eq!(Rgba::from_unit(q(ur), q(ug), q(ub), q(ua)), c);
        }

        #[test]
        fn hex_round_trip(s in "#[0-9a-fA-F]{6}([0-9a-fA-F]{2})?") {
            let hex = HexColor::parse(&s).unwrap();
            let back = HexColor::from_rgba(hex.rgba());
            prop_assert_eq!(normalize_hex(back.as_str()), normalize_hex(&s));
        }
    }
}
