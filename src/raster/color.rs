//! Cell colors: opaque RGB values plus the transparent "no paint" sentinel

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::io::error::{EditorError, Result};

/// Text form of the transparent sentinel
const TRANSPARENT_NAME: &str = "transparent";

/// Color of a single grid cell
///
/// `Transparent` never compares equal to any opaque color, so erased cells
/// form their own flood-fill regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// No paint
    Transparent,
    /// Opaque color
    Rgb {
        /// Red channel
        r: u8,
        /// Green channel
        g: u8,
        /// Blue channel
        b: u8,
    },
}

impl Color {
    /// The transparent sentinel
    pub const TRANSPARENT: Self = Self::Transparent;
    /// `#ffffff`
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// `#000000`
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Check for the transparent sentinel
    pub const fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// RGBA channels, with alpha 0 for transparent cells
    pub const fn to_rgba(self) -> [u8; 4] {
        match self {
            Self::Transparent => [0, 0, 0, 0],
            Self::Rgb { r, g, b } => [r, g, b, 0xff],
        }
    }
}

fn parse_hex_digits(text: &str, digits: &str) -> Result<[u8; 3]> {
    let invalid = |reason| EditorError::InvalidColor {
        value: text.to_string(),
        reason,
    };

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("expected hexadecimal digits"));
    }

    let channel = |range: std::ops::Range<usize>, scale: u8| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map(|v| v * scale)
            .ok_or_else(|| invalid("expected hexadecimal digits"))
    };

    match digits.len() {
        // #rgb shorthand doubles each nibble
        3 => Ok([channel(0..1, 17)?, channel(1..2, 17)?, channel(2..3, 17)?]),
        6 => Ok([channel(0..2, 1)?, channel(2..4, 1)?, channel(4..6, 1)?]),
        _ => Err(invalid("expected 3 or 6 hex digits after '#'")),
    }
}

impl FromStr for Color {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(TRANSPARENT_NAME) {
            return Ok(Self::Transparent);
        }

        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| EditorError::InvalidColor {
                value: s.to_string(),
                reason: "expected '#rrggbb', '#rgb' or 'transparent'",
            })?;

        let [r, g, b] = parse_hex_digits(s, digits)?;
        Ok(Self::rgb(r, g, b))
    }
}

impl TryFrom<String> for Color {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str(TRANSPARENT_NAME),
            Self::Rgb { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}
