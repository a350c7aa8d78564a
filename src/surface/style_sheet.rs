use std::fmt::Write;

use indexmap::IndexMap;

use crate::surface::StyleSurface;

/// In-memory surface that records variables in first-write order.
///
/// Useful on its own for previews, and as the source of a `:root` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    variables: IndexMap<String, String>,
    body_font: Option<String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn body_font(&self) -> Option<&str> {
        self.body_font.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.body_font.is_none()
    }

    /// Renders the variables as a `:root` rule, followed by a `body` rule when
    /// a font has been set.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.variables {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");

        if let Some(font) = &self.body_font {
            let _ = write!(css, "\nbody {{\n  font-family: {font};\n}}\n");
        }

        css
    }
}

impl StyleSurface for StyleSheet {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn set_body_font(&mut self, value: &str) {
        self.body_font = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let mut sheet = StyleSheet::new();
        sheet.set_variable("--a", "1");
        sheet.set_variable("--b", "2");
        sheet.set_variable("--a", "3");

        let vars: Vec<_> = sheet.variables().collect();
        assert_eq!(vars, vec![("--a", "3"), ("--b", "2")]);
    }

    #[test]
    fn test_to_css() {
        let mut sheet = StyleSheet::new();
        assert!(sheet.is_empty());

        sheet.set_variable("--background", "0 0% 10%");
        sheet.set_variable("--radius", "8px");

        assert_eq!(
            sheet.to_css(),
            ":root {\n  --background: 0 0% 10%;\n  --radius: 8px;\n}\n"
        );

        sheet.set_body_font("var(--font-family), sans-serif");
        assert!(
            sheet
                .to_css()
                .ends_with("body {\n  font-family: var(--font-family), sans-serif;\n}\n")
        );
    }
}
