use serde::{Deserialize, Serialize};

use super::deserializers::de_optional_pixels;
use crate::{ColorToken, HexColor};

/// Font used when a theme doesn't name one.
pub const DEFAULT_FONT: &str = "Inter";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub colors: ThemeColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Corner radius in pixels.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_optional_pixels"
    )]
    pub radius: Option<f32>,
}

impl Theme {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    pub fn color(&self, token: ColorToken) -> &HexColor {
        token.resolve(&self.colors)
    }

    /// The declared font, ignoring blank values.
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref().filter(|font| !font.trim().is_empty())
    }

    pub fn effective_font(&self) -> &str {
        self.font().unwrap_or(DEFAULT_FONT)
    }

    pub fn effective_radius(&self) -> f32 {
        self.radius.unwrap_or(0.)
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

/// One `#RRGGBB` value per [`ColorToken`]. Every field is required.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: HexColor,
    pub foreground: HexColor,
    pub card: HexColor,
    pub card_foreground: HexColor,
    pub popover: HexColor,
    pub popover_foreground: HexColor,
    pub primary: HexColor,
    pub primary_foreground: HexColor,
    pub secondary: HexColor,
    pub secondary_foreground: HexColor,
    pub muted: HexColor,
    pub muted_foreground: HexColor,
    pub accent: HexColor,
    pub accent_foreground: HexColor,
    pub destructive: HexColor,
    pub destructive_foreground: HexColor,
    pub border: HexColor,
    pub input: HexColor,
    pub ring: HexColor,
}

impl ThemeColors {
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, &HexColor)> {
        ColorToken::ALL
            .into_iter()
            .map(move |token| (token, token.resolve(self)))
    }
}
