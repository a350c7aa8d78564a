use crate::{
    surface::{StyleSurface, apply_theme},
    theme::Theme,
};

/// Extension trait for projecting a theme onto any surface.
pub trait ThemeSurfaceExt {
    /// Writes the theme's tokens, radius and font to this surface.
    fn apply_theme<T: AsRef<Theme>>(&mut self, theme: T);
}

impl<S: StyleSurface + ?Sized> ThemeSurfaceExt for S {
    fn apply_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        apply_theme(theme.as_ref(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        surface::StyleSheet,
        theme::{builtin_themes, find_builtin},
    };

    #[test]
    fn test_apply_through_extension() {
        let theme = find_builtin("monokai").unwrap();

        let mut direct = StyleSheet::new();
        apply_theme(theme, &mut direct);

        let mut via_ext = StyleSheet::new();
        via_ext.apply_theme(theme);

        assert_eq!(direct, via_ext);
    }

    #[test]
    fn test_apply_through_trait_object() {
        let mut sheet = StyleSheet::new();
        {
            let surface: &mut dyn StyleSurface = &mut sheet;
            surface.apply_theme(&builtin_themes()[1]);
        }

        assert_eq!(sheet.variable("--background"), Some("0 0% 100%"));
    }
}
