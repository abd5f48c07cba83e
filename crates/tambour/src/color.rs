//! Validation of user supplied color text.
//!
//! Color is free text straight from the user, so it is treated as hostile:
//! it must match a small character whitelist and parse as an SVG color.
//! Only the normalized `#rrggbb` form ever reaches an output document.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Longest color text we bother parsing (`rgb(100%, 100%, 100%)` fits easily).
const MAX_COLOR_LEN: usize = 64;

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Substituted when an export must succeed despite an invalid color.
    pub const FALLBACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: 255 }
    }

    /// Parse color text: hex (`#f00`, `#ff0000`), `rgb(...)`, or a named color.
    ///
    /// Anything containing characters outside `[A-Za-z0-9#(),.% ]` is
    /// rejected before it gets near the parser.
    pub fn parse(text: &str) -> Result<Color, ColorError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ColorError::Empty);
        }

        let allowed = |c: char| c.is_ascii_alphanumeric() || "#(),.% ".contains(c);
        if text.len() > MAX_COLOR_LEN || !text.chars().all(allowed) {
            return Err(ColorError::InvalidColorFormat(text.to_string()));
        }

        let parsed = svgtypes::Color::from_str(text)
            .map_err(|_| ColorError::InvalidColorFormat(text.to_string()))?;

        Ok(Color {
            red: parsed.red,
            green: parsed.green,
            blue: parsed.blue,
            alpha: parsed.alpha,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Opacity in `0.0..1.0` for translucent colors, `None` when opaque.
    pub fn opacity(&self) -> Option<f64> {
        (self.alpha < 255).then(|| self.alpha as f64 / 255.0)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(Color::parse("#ff0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("#F00").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("  #1a2B3c ").unwrap().to_hex(), "#1a2b3c");
    }

    #[test]
    fn named_and_functional_forms() {
        assert_eq!(Color::parse("red").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("navy").unwrap().to_hex(), "#000080");
        assert_eq!(Color::parse("rgb(0, 128, 255)").unwrap(), Color::rgb(0, 128, 255));
    }

    #[test]
    fn markup_is_rejected() {
        let hostile = "red;</style><script>alert(1)</script>";
        assert_eq!(
            Color::parse(hostile),
            Err(ColorError::InvalidColorFormat(hostile.to_string()))
        );
        assert!(Color::parse("#ff0000\" onload=\"x").is_err());
        assert!(Color::parse("url(#grad)").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(Color::parse(""), Err(ColorError::Empty));
        assert_eq!(Color::parse("   "), Err(ColorError::Empty));
        assert!(Color::parse("#ggg").is_err());
        assert!(Color::parse("notacolor").is_err());
        assert!(Color::parse("red red").is_err());
        assert!(Color::parse(&"a".repeat(100)).is_err());
    }

    #[test]
    fn opacity_only_for_translucent() {
        assert_eq!(Color::rgb(1, 2, 3).opacity(), None);
        let half = Color { alpha: 0, ..Color::rgb(1, 2, 3) };
        assert_eq!(half.opacity(), Some(0.0));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::FALLBACK.to_string(), "#000000");
        assert_eq!("lime".parse::<Color>().unwrap().to_string(), "#00ff00");
    }
}
