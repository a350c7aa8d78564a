//! Theme value types and color conversion.
//!
//! A [`Theme`] is a named bundle of nineteen semantic color tokens plus an
//! optional font and corner radius. Colors are validated on construction and
//! can be projected to HSL for style variables.

mod schema;
pub use schema::*;

mod deserializers;

mod color;
pub use color::*;

mod hsl;
pub use hsl::*;

mod token;
pub use token::*;

#[cfg(test)]
pub(crate) mod tests {
    use crate::Theme;

    pub const SAMPLE_THEME_JSON: &str = r##"{
        "id": "dark",
        "name": "Dark",
        "colors": {
            "background": "#1A1A1A",
            "foreground": "#FFFFFF",
            "card": "#333333",
            "cardForeground": "#FFFFFF",
            "popover": "#333333",
            "popoverForeground": "#FFFFFF",
            "primary": "#6200EE",
            "primaryForeground": "#FFFFFF",
            "secondary": "#333333",
            "secondaryForeground": "#FFFFFF",
            "muted": "#444444",
            "mutedForeground": "#AAAAAA",
            "accent": "#6200EE",
            "accentForeground": "#FFFFFF",
            "destructive": "#FF0000",
            "destructiveForeground": "#FFFFFF",
            "border": "#444444",
            "input": "#444444",
            "ring": "#6200EE"
        },
        "font": "Inter",
        "radius": 8
    }"##;

    pub fn sample_theme() -> Theme {
        Theme::from_json(SAMPLE_THEME_JSON).unwrap()
    }
}
