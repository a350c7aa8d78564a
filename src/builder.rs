//! Draft editing for custom themes.

use thiserror::Error;

use crate::{
    persistence::ThemeStorage,
    store::{ThemeStore, ThemeStoreError},
    surface::StyleSurface,
    theme::{ColorToken, HexColor, Theme, ThemeSurfaceExt},
};

/// Name given to a fresh draft.
pub const DEFAULT_DRAFT_NAME: &str = "My Custom Theme";

/// Largest radius the builder lets a draft use, in pixels.
pub const MAX_AUTHORING_RADIUS: f32 = 20.;

/// A theme being authored.
///
/// A new draft starts as a copy of the active theme with an empty id. Saving
/// it creates a custom theme; after that the builder edits that theme and
/// further saves update it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeBuilder {
    draft: Theme,
}

impl ThemeBuilder {
    pub fn from_current<S, P>(store: &ThemeStore<S, P>) -> Self {
        let mut draft = store.current_theme().clone();
        draft.id = String::new();
        draft.name = DEFAULT_DRAFT_NAME.to_string();
        draft.author = None;

        Self { draft }
    }

    /// Edits an existing theme.
    pub fn edit(theme: &Theme) -> Self {
        Self {
            draft: theme.clone(),
        }
    }

    pub fn draft(&self) -> &Theme {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.draft.name = name.into();
        self
    }

    pub fn set_author(&mut self, author: Option<String>) -> &mut Self {
        self.draft.author = author.filter(|author| !author.trim().is_empty());
        self
    }

    pub fn set_color(&mut self, token: ColorToken, color: HexColor) -> &mut Self {
        *token.resolve_mut(&mut self.draft.colors) = color;
        self
    }

    pub fn set_font(&mut self, font: impl Into<String>) -> &mut Self {
        self.draft.font = Some(font.into());
        self
    }

    /// Clamped to `0..=MAX_AUTHORING_RADIUS`.
    pub fn set_radius(&mut self, radius: f32) -> &mut Self {
        let radius = if radius.is_finite() {
            radius.clamp(0., MAX_AUTHORING_RADIUS)
        } else {
            0.
        };
        self.draft.radius = Some(radius);
        self
    }

    /// Whether the draft is an existing custom theme.
    pub fn is_editing<S, P>(&self, store: &ThemeStore<S, P>) -> bool {
        !self.draft.id.is_empty() && store.is_custom(&self.draft.id)
    }

    /// Creates or updates the draft in `store` and returns what was stored.
    pub fn save<S: StyleSurface, P: ThemeStorage>(
        &mut self,
        store: &mut ThemeStore<S, P>,
    ) -> Result<Theme, BuilderError> {
        if self.draft.name.trim().is_empty() {
            return Err(BuilderError::EmptyName);
        }

        if self.is_editing(store) {
            store.update(self.draft.clone())?;
        } else {
            self.draft = store.create(self.draft.clone());
        }

        Ok(self.draft.clone())
    }

    /// Throws the draft away and starts again from the active theme.
    pub fn reset<S, P>(&mut self, store: &ThemeStore<S, P>) {
        *self = Self::from_current(store);
    }

    /// Applies the draft to `surface` without touching the store.
    pub fn preview<T: StyleSurface + ?Sized>(&self, surface: &mut T) {
        surface.apply_theme(&self.draft);
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("a theme needs a name")]
    EmptyName,
    #[error(transparent)]
    Store(#[from] ThemeStoreError),
}
