#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::theme::Theme;

/// Backgrounds darker than this perceived brightness count as dark.
pub const DARK_BRIGHTNESS_THRESHOLD: f32 = 128.;

/// Light or dark, judged from a theme's background.
///
/// Each mode maps to the canonical built-in theme used when toggling.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn theme_id(&self) -> &'static str)]
#[func(pub fn toggled(&self) -> ThemeMode)]
pub enum ThemeMode {
    /// Bright background, canonically the `light` theme.
    #[assoc(theme_id = "light")]
    #[assoc(toggled = ThemeMode::Dark)]
    Light,
    /// Dim background, canonically the `dark` theme.
    #[assoc(theme_id = "dark")]
    #[assoc(toggled = ThemeMode::Light)]
    Dark,
}

impl ThemeMode {
    pub fn of(theme: &Theme) -> Self {
        if theme.colors.background.perceived_brightness() < DARK_BRIGHTNESS_THRESHOLD {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

/// Which part of the theme collection a gallery query covers.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn includes_builtin(&self) -> bool)]
#[func(pub fn includes_custom(&self) -> bool)]
pub enum ThemeFilter {
    /// Built-in and custom themes.
    #[assoc(includes_builtin = true)]
    #[assoc(includes_custom = true)]
    All,
    /// Only the catalog.
    #[assoc(includes_builtin = true)]
    #[assoc(includes_custom = false)]
    Builtin,
    /// Only themes the user created.
    #[assoc(includes_builtin = false)]
    #[assoc(includes_custom = true)]
    Custom,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::find_builtin;

    #[test]
    fn test_mode_of_builtin_themes() {
        assert_eq!(ThemeMode::of(find_builtin("dark").unwrap()), ThemeMode::Dark);
        assert_eq!(ThemeMode::of(find_builtin("light").unwrap()), ThemeMode::Light);
        assert_eq!(ThemeMode::of(find_builtin("nord").unwrap()), ThemeMode::Dark);
    }

    #[test]
    fn test_toggled_mode_points_at_canonical_theme() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().theme_id(), "light");
        assert_eq!(ThemeMode::Light.toggled().theme_id(), "dark");
    }

    #[test]
    fn test_filter_scopes() {
        assert!(ThemeFilter::All.includes_builtin() && ThemeFilter::All.includes_custom());
        assert!(!ThemeFilter::Builtin.includes_custom());
        assert!(!ThemeFilter::Custom.includes_builtin());
    }
}
