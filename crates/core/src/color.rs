//! 8-bit RGB color with hex-string parsing and serialization.
//!
//! The compositor works entirely in 0–255 integer channel space, so colors
//! are stored as `u8` triples. Serialization uses the `"#rrggbb"` hex form
//! for human-readable layer and range documents.

use crate::error::StackError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An 8-bit-per-channel RGB color.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray color with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `StackError::InvalidColor` if the input is not a valid
    /// 6-digit hex color. Malformed colors fail fast here rather than
    /// propagating garbage bit patterns into the raster.
    pub fn from_hex(hex: &str) -> Result<Self, StackError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(StackError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| StackError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| StackError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| StackError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Self { r, g, b })
    }

    /// Formats the color as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb8::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_with_hash_prefix() {
        let c = Rgb8::from_hex("#4169e1").unwrap();
        assert_eq!(c, Rgb8::new(0x41, 0x69, 0xe1));
    }

    #[test]
    fn from_hex_parses_without_prefix() {
        let c = Rgb8::from_hex("00008b").unwrap();
        assert_eq!(c, Rgb8::new(0, 0, 0x8b));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            Rgb8::from_hex("#A0522D").unwrap(),
            Rgb8::from_hex("#a0522d").unwrap()
        );
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            Rgb8::from_hex("#fff"),
            Err(StackError::InvalidColor(_))
        ));
        assert!(Rgb8::from_hex("#ff00aabb").is_err());
        assert!(Rgb8::from_hex("").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(matches!(
            Rgb8::from_hex("#zzzzzz"),
            Err(StackError::InvalidColor(_))
        ));
    }

    #[test]
    fn to_hex_round_trips() {
        let c = Rgb8::new(0xf0, 0xe6, 0x8c);
        assert_eq!(c.to_hex(), "#f0e68c");
        assert_eq!(Rgb8::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn gray_sets_all_channels() {
        let c = Rgb8::gray(128);
        assert_eq!((c.r, c.g, c.b), (128, 128, 128));
    }

    #[test]
    fn serde_uses_hex_string_form() {
        let c = Rgb8::new(0x22, 0x8b, 0x22);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#228b22\"");
        let restored: Rgb8 = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, c);
    }

    #[test]
    fn serde_rejects_malformed_hex() {
        let result: Result<Rgb8, _> = serde_json::from_str("\"#nothex\"");
        assert!(result.is_err());
    }
}
