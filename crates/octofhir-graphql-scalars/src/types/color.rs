//! RGBA color with hexadecimal web-color notation.
//!
//! Accepted notations: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! (case-insensitive). See <https://en.wikipedia.org/wiki/Web_colors>.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^#([A-Fa-f0-9]{3,4}){1,2}$").expect("Invalid hex color regex")
});

/// An sRGB color with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// Error returned when a string is not a hex color code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid hex color code value : '{0}'.")]
pub struct ParseColorError(pub String);

impl Color {
    /// Fully opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.alpha == u8::MAX
    }

    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn parse_hex(input: &str) -> Result<Self, ParseColorError> {
        if !HEX_REGEX.is_match(input) {
            return Err(ParseColorError(input.to_string()));
        }
        let digits = &input[1..];
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ParseColorError(input.to_string()))?;
        // Short forms repeat each nibble: 0xF -> 0xFF.
        let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 0x11;
        let byte = |shift: u32| ((value >> shift) & 0xFF) as u8;

        let color = match digits.len() {
            3 => Self::rgb(nibble(8), nibble(4), nibble(0)),
            4 => Self::rgba(nibble(12), nibble(8), nibble(4), nibble(0)),
            6 => Self::rgb(byte(16), byte(8), byte(0)),
            8 => Self::rgba(byte(24), byte(16), byte(8), byte(0)),
            _ => return Err(ParseColorError(input.to_string())),
        };
        Ok(color)
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when the color is not fully opaque.
    #[must_use]
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_notations() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(
            Color::parse_hex("#1234").unwrap(),
            Color::rgba(0x11, 0x22, 0x33, 0x44)
        );
        assert_eq!(
            Color::parse_hex("#0A0b0C").unwrap(),
            Color::rgb(0x0a, 0x0b, 0x0c)
        );
        assert_eq!(
            Color::parse_hex("#ff000080").unwrap(),
            Color::rgba(255, 0, 0, 0x80)
        );
    }

    #[test]
    fn test_short_form_equals_long_form() {
        assert_eq!(
            Color::parse_hex("#fff").unwrap(),
            Color::parse_hex("#ffffff").unwrap()
        );
        assert_eq!(
            Color::parse_hex("#ABC").unwrap(),
            Color::parse_hex("#aabbcc").unwrap()
        );
    }

    #[test]
    fn test_parse_invalid() {
        let invalid = vec![
            "#ziz", "fff", "#ff", "#fffff", "#fffffff", "#fffffffff", "", "#", "# fff",
        ];
        for s in invalid {
            assert!(Color::parse_hex(s).is_err(), "Expected invalid color: {s}");
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(255, 0, 16).to_hex(), "#ff0010");
        assert_eq!(Color::rgba(255, 0, 16, 255).to_hex(), "#ff0010");
        assert_eq!(Color::rgba(255, 0, 16, 0).to_hex(), "#ff001000");
    }
}
