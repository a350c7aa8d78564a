use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::theme::{Theme, default_theme};

/// Reads the saved current theme, replacing an invalid one with the default.
pub fn de_current_theme<'de, D>(deserializer: D) -> Result<Theme, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(Theme::deserialize(value).unwrap_or_else(|err| {
        warn!(error = %err, "saved current theme is invalid; using default");
        default_theme().clone()
    }))
}

/// Reads saved custom themes one entry at a time, dropping entries that don't
/// parse.
pub fn de_custom_themes<'de, D>(deserializer: D) -> Result<Vec<Theme>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;

    let themes = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match Theme::deserialize(value) {
            Ok(theme) => Some(theme),
            Err(err) => {
                warn!(index, error = %err, "dropping invalid saved custom theme");
                None
            }
        })
        .collect();

    Ok(themes)
}

pub fn default_current_theme() -> Theme {
    default_theme().clone()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::persistence::PersistedThemeState;

    fn theme_json(id: &str, name: &str) -> serde_json::Value {
        let mut value = serde_json::to_value(crate::theme::find_builtin("nord").unwrap()).unwrap();
        value["id"] = id.into();
        value["name"] = name.into();
        value
    }

    #[test]
    fn test_invalid_custom_themes_are_dropped() {
        let mut bad_radius = theme_json("custom-2", "Bad radius");
        bad_radius["radius"] = json!(-1);
        let mut bad_color = theme_json("custom-3", "Bad color");
        bad_color["colors"]["ring"] = json!("#12");

        let state: PersistedThemeState = serde_json::from_value(json!({
            "currentTheme": theme_json("custom-1", "Good"),
            "customThemes": [theme_json("custom-1", "Good"), bad_radius, 42, bad_color],
        }))
        .unwrap();

        let names: Vec<_> = state.custom_themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Good"]);
        assert_eq!(state.current_theme.name, "Good");
    }

    #[test]
    fn test_invalid_current_theme_keeps_custom_themes() {
        let mut current = theme_json("custom-1", "Good");
        current["colors"]["background"] = json!("navy");

        let state: PersistedThemeState = serde_json::from_value(json!({
            "currentTheme": current,
            "customThemes": [theme_json("custom-1", "Good")],
        }))
        .unwrap();

        assert_eq!(state.current_theme.id, "dark");
        assert_eq!(state.custom_themes.len(), 1);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let state: PersistedThemeState = serde_json::from_value(json!({})).unwrap();
        assert_eq!(state, PersistedThemeState::default());
    }

    #[test]
    fn test_wrong_shape_is_still_an_error() {
        assert!(serde_json::from_value::<PersistedThemeState>(json!([])).is_err());
        assert!(
            serde_json::from_value::<PersistedThemeState>(json!({ "customThemes": {} })).is_err()
        );
    }
}
