use std::fmt;

use indexmap::IndexMap;

use crate::{ColorError, ColorToken, HexColor, Theme};

/// Hue in whole degrees (`0..360`), saturation and lightness in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Formats as `"H S% L%"`, the shape expected by style variables.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

impl HexColor {
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.rgb();
        let [r, g, b] = [r, g, b].map(|channel| channel as f64 / 255.);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.;

        let (h, s) = if max == min {
            (0., 0.)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2. - max - min)
            } else {
                d / (max + min)
            };

            let h = if max == r {
                (g - b) / d + if g < b { 6. } else { 0. }
            } else if max == g {
                (b - r) / d + 2.
            } else {
                (r - g) / d + 4.
            };

            (h / 6., s)
        };

        // A hue just under a full turn rounds up to 360, which is 0.
        let h = (h * 360.).round() as u16 % 360;

        Hsl {
            h,
            s: (s * 100.).round() as u8,
            l: (l * 100.).round() as u8,
        }
    }
}

/// Converts a `#RRGGBB` (or `RRGGBB`) string to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    HexColor::parse(hex).map(|color| color.to_hsl())
}

/// Maps every color token key of `theme` to its `"H S% L%"` string, in token order.
pub fn theme_to_hsl_map(theme: &Theme) -> IndexMap<&'static str, String> {
    ColorToken::ALL
        .iter()
        .map(|token| (token.key(), theme.color(*token).to_hsl().to_string()))
        .collect()
}
