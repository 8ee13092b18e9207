//! 24-bit sRGB colors stored as `0xRRGGBB`.
//!
//! Options files and the outline pass both speak in hex, so [`Color`]
//! serializes as a `"#rrggbb"` string.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

/// A packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self(0xff_ffff);
    /// Pure black.
    pub const BLACK: Self = Self(0x00_0000);
    /// Editor accent used for selection outlines.
    pub const ACCENT: Self = Self(0xff_a033);

    /// Build from 8-bit channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Channels as `[r, g, b]` bytes.
    #[must_use]
    pub const fn to_rgb(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    /// Channels normalized to `[0, 1]`.
    #[must_use]
    pub fn to_rgb_f32(self) -> [f32; 3] {
        self.to_rgb().map(|c| f32::from(c) / 255.0)
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

/// Error returned when a string is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb` or bare `rrggbb`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ParseColorError(s.to_owned()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ParseColorError(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl JsonSchema for Color {
    fn schema_name() -> Cow<'static, str> {
        "Color".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^#[0-9a-fA-F]{6}$",
            "format": "color"
        })
    }
}
