#![allow(missing_docs)] // Derive macros generate undocumented methods.

use tesserae_theme_macros::ThemeToken;

use crate::{HexColor, ThemeColors};

/// Semantic color slots every theme must fill.
#[derive(ThemeToken, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[source(ThemeColors)]
#[field(HexColor)]
pub enum ColorToken {
    #[theme(background)]
    Background,
    #[theme(foreground)]
    Foreground,
    #[theme(card)]
    Card,
    #[theme(card_foreground)]
    CardForeground,
    #[theme(popover)]
    Popover,
    #[theme(popover_foreground)]
    PopoverForeground,
    #[theme(primary)]
    Primary,
    #[theme(primary_foreground)]
    PrimaryForeground,
    #[theme(secondary)]
    Secondary,
    #[theme(secondary_foreground)]
    SecondaryForeground,
    #[theme(muted)]
    Muted,
    #[theme(muted_foreground)]
    MutedForeground,
    #[theme(accent)]
    Accent,
    #[theme(accent_foreground)]
    AccentForeground,
    #[theme(destructive)]
    Destructive,
    #[theme(destructive_foreground)]
    DestructiveForeground,
    #[theme(border)]
    Border,
    #[theme(input)]
    Input,
    #[theme(ring)]
    Ring,
}

impl ColorToken {
    /// Style variable name, e.g. `--card-foreground`.
    pub fn css_variable(&self) -> String {
        format!("--{}", camel_to_kebab(self.key()))
    }

    /// Human readable label, e.g. `Card Foreground`.
    pub fn label(&self) -> String {
        let mut label = String::with_capacity(self.key().len() + 2);

        for (i, c) in self.key().chars().enumerate() {
            if i == 0 {
                label.extend(c.to_uppercase());
            } else {
                if c.is_uppercase() {
                    label.push(' ');
                }
                label.push(c);
            }
        }

        label
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.key() == key)
    }
}

pub fn camel_to_kebab(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len() + 4);

    for c in name.chars() {
        if c.is_uppercase() {
            kebab.push('-');
            kebab.extend(c.to_lowercase());
        } else {
            kebab.push(c);
        }
    }

    kebab
}
