use std::sync::LazyLock;

use crate::theme::Theme;

/// Id of the theme used on first start and whenever a lookup misses.
pub const DEFAULT_THEME_ID: &str = "dark";

/// Fonts offered by authoring surfaces. Themes may still name any font.
pub const FONT_OPTIONS: [&str; 15] = [
    "Inter",
    "Roboto",
    "Poppins",
    "JetBrains Mono",
    "Fira Code",
    "Segoe UI",
    "Orbitron",
    "Outrun Future",
    "System UI",
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Georgia",
    "Verdana",
    "Courier New",
];

macro_rules! generate_builtin_themes {
    ( $( $id:literal ),+ $(,)? ) => {
        static BUILTIN_THEMES: LazyLock<Vec<Theme>> = LazyLock::new(|| {
            vec![
                $( parse_builtin(include_str!(concat!("../../themes/", $id, ".json"))) ),+
            ]
        });
    };
}

// The default theme comes first.
generate_builtin_themes!(
    "dark",
    "light",
    "dracula",
    "nord",
    "github-dark",
    "synthwave",
    "monokai",
    "solarized-dark",
    "tokyo-night",
    "catppuccin-mocha",
    "neon",
);

fn parse_builtin(json: &str) -> Theme {
    Theme::from_json(json).expect("embedded built-in theme must parse")
}

/// The built-in themes, in display order. Never mutated.
pub fn builtin_themes() -> &'static [Theme] {
    &BUILTIN_THEMES
}

pub fn default_theme() -> &'static Theme {
    &BUILTIN_THEMES[0]
}

/// First built-in theme whose id equals `id`.
pub fn find_builtin(id: &str) -> Option<&'static Theme> {
    builtin_themes().iter().find(|theme| theme.id == id)
}

pub fn is_builtin_id(id: &str) -> bool {
    find_builtin(id).is_some()
}

pub fn is_builtin_name(name: &str) -> bool {
    builtin_themes().iter().any(|theme| theme.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_builtin_themes_parse() {
        assert_eq!(builtin_themes().len(), 11);
    }

    #[test]
    fn test_default_theme_is_dark() {
        let theme = default_theme();
        assert_eq!(theme.id, DEFAULT_THEME_ID);
        assert_eq!(theme.name, "Dark");
        assert_eq!(theme.colors.background.to_string(), "#1A1A1A");
    }

    #[test]
    fn test_light_and_dark_are_present() {
        assert!(is_builtin_id("light"));
        assert!(is_builtin_id("dark"));
    }

    #[test]
    fn test_ids_and_names_are_unique() {
        let ids: HashSet<_> = builtin_themes().iter().map(|t| t.id.as_str()).collect();
        let names: HashSet<_> = builtin_themes().iter().map(|t| t.name.as_str()).collect();

        assert_eq!(ids.len(), builtin_themes().len());
        assert_eq!(names.len(), builtin_themes().len());
    }

    #[test]
    fn test_find_builtin() {
        let dracula = find_builtin("dracula").unwrap();
        assert_eq!(dracula.name, "Dracula");
        assert_eq!(dracula.author.as_deref(), Some("Zeno Rocha"));
        assert_eq!(dracula.font.as_deref(), Some("Fira Code"));
        assert_eq!(dracula.radius, Some(4.));

        assert!(find_builtin("Dracula").is_none());
        assert!(find_builtin("").is_none());
    }

    #[test]
    fn test_builtin_name_lookup() {
        assert!(is_builtin_name("GitHub Dark"));
        assert!(!is_builtin_name("github dark"));
    }

    #[test]
    fn test_every_builtin_font_is_offered() {
        for theme in builtin_themes() {
            assert!(FONT_OPTIONS.contains(&theme.effective_font()), "{}", theme.id);
        }
    }
}
