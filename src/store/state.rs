use std::{collections::HashSet, fmt};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::{
    ThemeStoreConfig,
    persistence::{PersistedThemeState, ThemeStorage},
    store::ids::IdGenerator,
    surface::StyleSurface,
    theme::{
        Theme, ThemeFilter, ThemeMode, ThemeSurfaceExt, builtin_themes, default_theme,
        find_builtin, is_builtin_id, is_builtin_name,
    },
};

/// Base name for custom themes created without one.
pub const DEFAULT_CUSTOM_THEME_NAME: &str = "Custom Theme";

/// Holds the active theme and the user's custom themes.
///
/// Every mutation goes through [`select`](Self::select),
/// [`create`](Self::create), [`update`](Self::update) or
/// [`delete`](Self::delete). Each one leaves `current_theme` pointing at a
/// theme that exists, re-applies it to the surface when it changes, and saves
/// the new state. Save failures are logged and otherwise ignored.
pub struct ThemeStore<S, P> {
    config: ThemeStoreConfig,
    surface: S,
    storage: P,
    current_theme: Theme,
    custom_themes: Vec<Theme>,
    ids: IdGenerator,
}

impl<S, P> fmt::Debug for ThemeStore<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("config", &self.config)
            .field("current_theme", &self.current_theme.id)
            .field("custom_themes", &self.custom_themes.len())
            .finish_non_exhaustive()
    }
}

impl<S: StyleSurface, P: ThemeStorage> ThemeStore<S, P> {
    /// Starts from the default theme with no custom themes, without reading
    /// storage. The default theme is applied once.
    pub fn new(config: ThemeStoreConfig, surface: S, storage: P) -> Self {
        Self::from_state(config, surface, storage, PersistedThemeState::default())
    }

    /// Restores the last saved state, or the defaults when nothing was saved
    /// or the saved state can't be read, then applies the current theme once.
    pub fn rehydrate(config: ThemeStoreConfig, surface: S, storage: P) -> Self {
        let state = match storage.load(&config.storage_key) {
            Ok(Some(state)) => {
                info!(
                    key = %config.storage_key,
                    theme_id = %state.current_theme.id,
                    custom_themes = state.custom_themes.len(),
                    "rehydrated theme store"
                );
                state
            }
            Ok(None) => {
                debug!(key = %config.storage_key, "no saved theme state; using defaults");
                PersistedThemeState::default()
            }
            Err(err) => {
                error!(
                    key = %config.storage_key,
                    error = ?err,
                    "error rehydrating theme store; using defaults"
                );
                PersistedThemeState::default()
            }
        };

        Self::from_state(config, surface, storage, state)
    }

    fn from_state(
        config: ThemeStoreConfig,
        mut surface: S,
        storage: P,
        state: PersistedThemeState,
    ) -> Self {
        let custom_themes = retain_unique_ids(state.custom_themes);

        let resolvable = is_builtin_id(&state.current_theme.id)
            || custom_themes
                .iter()
                .any(|theme| theme.id == state.current_theme.id);

        let current_theme = if resolvable {
            state.current_theme
        } else {
            warn!(
                theme_id = %state.current_theme.id,
                "saved theme no longer exists; using default"
            );
            default_theme().clone()
        };

        surface.apply_theme(&current_theme);

        Self {
            config,
            surface,
            storage,
            current_theme,
            custom_themes,
            ids: IdGenerator::default(),
        }
    }

    /// Activates the theme with `theme_id`, looking in the catalog first, then
    /// in the custom themes. Unknown ids activate the default theme.
    pub fn select(&mut self, theme_id: &str) -> &Theme {
        let theme = match self.find(theme_id) {
            Some(theme) => theme.clone(),
            None => {
                debug!(theme_id, "unknown theme id; falling back to default");
                default_theme().clone()
            }
        };

        debug!(theme_id = %theme.id, "selected theme");
        self.activate(theme);
        self.persist();

        &self.current_theme
    }

    /// Adds `draft` to the custom themes and returns the stored version.
    ///
    /// An empty or already used id is replaced with a generated one. A name
    /// that collides with any existing theme gets the first free numeric
    /// suffix (`"Name 1"`, `"Name 2"`, ...). The active theme is unchanged.
    pub fn create(&mut self, mut draft: Theme) -> Theme {
        if draft.id.is_empty() || self.id_taken(&draft.id) {
            if !draft.id.is_empty() {
                warn!(theme_id = %draft.id, "theme id already in use; assigning a new one");
            }

            let custom_themes = &self.custom_themes;
            draft.id = self.ids.next(|id| {
                is_builtin_id(id) || custom_themes.iter().any(|theme| theme.id == id)
            });
        }

        let base_name = if draft.name.trim().is_empty() {
            DEFAULT_CUSTOM_THEME_NAME.to_string()
        } else {
            std::mem::take(&mut draft.name)
        };
        draft.name = self.unique_name(&base_name);

        debug!(theme_id = %draft.id, name = %draft.name, "created custom theme");
        self.custom_themes.push(draft.clone());
        self.persist();

        draft
    }

    /// Replaces the custom theme with the same id, keeping its position.
    ///
    /// Names are not re-checked for uniqueness here. If the theme is active,
    /// the new version is applied immediately.
    pub fn update(&mut self, theme: Theme) -> Result<(), ThemeStoreError> {
        let Some(slot) = self
            .custom_themes
            .iter_mut()
            .find(|existing| existing.id == theme.id)
        else {
            return Err(ThemeStoreError::UnknownCustomTheme(theme.id));
        };

        *slot = theme.clone();
        debug!(theme_id = %theme.id, name = %theme.name, "updated custom theme");

        if self.current_theme.id == theme.id {
            self.activate(theme);
        }

        self.persist();

        Ok(())
    }

    /// Removes the custom theme with `theme_id`, returning whether one existed.
    ///
    /// Deleting the active theme activates the default theme.
    pub fn delete(&mut self, theme_id: &str) -> bool {
        let before = self.custom_themes.len();
        self.custom_themes.retain(|theme| theme.id != theme_id);

        if self.custom_themes.len() == before {
            debug!(theme_id, "no custom theme to delete");
            return false;
        }

        debug!(theme_id, "deleted custom theme");

        if self.current_theme.id == theme_id {
            self.activate(default_theme().clone());
        }

        self.persist();

        true
    }

    /// Switches between the canonical light and dark themes based on the
    /// active theme's background. Returns the mode switched to.
    pub fn toggle_mode(&mut self) -> ThemeMode {
        let mode = ThemeMode::of(&self.current_theme).toggled();
        self.select(mode.theme_id());
        mode
    }

    fn activate(&mut self, theme: Theme) {
        self.surface.apply_theme(&theme);
        self.current_theme = theme;
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.config.storage_key, &self.snapshot()) {
            warn!(key = %self.config.storage_key, error = ?err, "failed to save theme state");
        }
    }

    fn id_taken(&self, id: &str) -> bool {
        is_builtin_id(id) || self.is_custom(id)
    }

    fn name_taken(&self, name: &str) -> bool {
        is_builtin_name(name) || self.custom_themes.iter().any(|theme| theme.name == name)
    }

    fn unique_name(&self, base_name: &str) -> String {
        if !self.name_taken(base_name) {
            return base_name.to_string();
        }

        let mut suffix = 1;
        loop {
            let candidate = format!("{base_name} {suffix}");
            if !self.name_taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

impl<S, P> ThemeStore<S, P> {
    pub fn current_theme(&self) -> &Theme {
        &self.current_theme
    }

    pub fn custom_themes(&self) -> &[Theme] {
        &self.custom_themes
    }

    /// Built-in themes followed by custom themes.
    pub fn all_themes(&self) -> impl Iterator<Item = &Theme> {
        builtin_themes().iter().chain(self.custom_themes.iter())
    }

    /// Looks up a theme by id, catalog first.
    pub fn find(&self, theme_id: &str) -> Option<&Theme> {
        find_builtin(theme_id).or_else(|| {
            self.custom_themes
                .iter()
                .find(|theme| theme.id == theme_id)
        })
    }

    pub fn is_custom(&self, theme_id: &str) -> bool {
        self.custom_themes.iter().any(|theme| theme.id == theme_id)
    }

    /// Themes in [`all_themes`](Self::all_themes) order, restricted by
    /// `filter`, whose name or author contains `query` (case-insensitive).
    pub fn gallery(&self, filter: ThemeFilter, query: &str) -> Vec<&Theme> {
        let query = query.to_lowercase();
        let matches = |theme: &&Theme| {
            theme.name.to_lowercase().contains(&query)
                || theme
                    .author
                    .as_deref()
                    .is_some_and(|author| author.to_lowercase().contains(&query))
        };

        let mut themes = Vec::new();
        if filter.includes_builtin() {
            themes.extend(builtin_themes().iter().filter(matches));
        }
        if filter.includes_custom() {
            themes.extend(self.custom_themes.iter().filter(matches));
        }

        themes
    }

    pub fn snapshot(&self) -> PersistedThemeState {
        PersistedThemeState {
            current_theme: self.current_theme.clone(),
            custom_themes: self.custom_themes.clone(),
        }
    }

    pub fn config(&self) -> &ThemeStoreConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn storage(&self) -> &P {
        &self.storage
    }
}

/// Drops saved custom themes whose id is empty, shadows a built-in theme, or
/// repeats an earlier custom theme.
fn retain_unique_ids(themes: Vec<Theme>) -> Vec<Theme> {
    let mut seen = HashSet::new();

    themes
        .into_iter()
        .filter(|theme| {
            let unique =
                !theme.id.is_empty() && !is_builtin_id(&theme.id) && seen.insert(theme.id.clone());
            if !unique {
                warn!(theme_id = %theme.id, "dropping saved custom theme with a conflicting id");
            }
            unique
        })
        .collect()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeStoreError {
    #[error("no custom theme with id \"{0}\" exists")]
    UnknownCustomTheme(String),
}
