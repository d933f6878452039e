//! Hex colors from the resume themes.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color `{0}` must be #RRGGBB")]
    Format(String),
    #[error("color `{0}` contains a non-hex digit")]
    Digit(String),
}

pub const INK: HexColor = HexColor::new(0x0B, 0x0F, 0x1A);
pub const WHITE: HexColor = HexColor::new(0xFF, 0xFF, 0xFF);

impl HexColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(raw: &str) -> Result<Self, ColorParseError> {
        let hex = raw
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| ColorParseError::Format(raw.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::Digit(raw.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Perceived luminance in `[0, 1]`.
    #[must_use]
    pub fn luminance(self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)) / 255.0
    }

    /// Readable text color on top of `self`.
    #[must_use]
    pub fn text_on(self) -> HexColor {
        if self.luminance() > 0.62 { INK } else { WHITE }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(HexColor::parse("#4D8FFF"), Ok(HexColor::new(0x4D, 0x8F, 0xFF)));
        assert_eq!(HexColor::parse("#4d8fff").unwrap().to_string(), "#4D8FFF");
    }

    #[test]
    fn rejects_malformed() {
        assert!(matches!(HexColor::parse("4D8FFF"), Err(ColorParseError::Format(_))));
        assert!(matches!(HexColor::parse("#FFF"), Err(ColorParseError::Format(_))));
        assert!(matches!(HexColor::parse("#GG0000"), Err(ColorParseError::Digit(_))));
    }

    #[test]
    fn text_contrast_flips_on_light_backgrounds() {
        assert_eq!(HexColor::parse("#E8F7EE").unwrap().text_on(), INK);
        assert_eq!(HexColor::parse("#071A3A").unwrap().text_on(), WHITE);
    }
}
