use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated `#RRGGBB` color.
///
/// Validation happens once, when the value is built, so everything that
/// consumes a `HexColor` (conversion, application) is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses six hex digits with an optional leading `#`, in either case.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        if digits.len() != 6 {
            return Err(ColorError::InvalidLength {
                input: input.to_string(),
            });
        }

        if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit {
                input: input.to_string(),
                digit,
            });
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidDigit {
            input: input.to_string(),
            digit: '?',
        })?;
        let [_, r, g, b] = value.to_be_bytes();

        Ok(Self { r, g, b })
    }

    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Weighted brightness on a 0-255 scale: `(R*299 + G*587 + B*114) / 1000`.
    pub fn perceived_brightness(&self) -> f32 {
        (self.r as f32 * 299. + self.g as f32 * 587. + self.b as f32 * 114.) / 1000.
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got \"{input}\"")]
    InvalidLength { input: String },
    #[error("invalid hex digit '{digit}' in \"{input}\"")]
    InvalidDigit { input: String, digit: char },
}
