use crate::{
    surface::StyleSurface,
    theme::Theme,
};

pub const RADIUS_VARIABLE: &str = "--radius";
pub const FONT_VARIABLE: &str = "--font-family";
/// Body font, resolved through [`FONT_VARIABLE`].
pub const BODY_FONT: &str = "var(--font-family), sans-serif";

/// Writes every color token, the radius and the font of `theme` to `surface`.
///
/// Missing radius and font are written as their defaults, so nothing from a
/// previously applied theme survives. Applying the same theme twice leaves the
/// surface in the same state.
pub fn apply_theme<S: StyleSurface + ?Sized>(theme: &Theme, surface: &mut S) {
    for (token, color) in theme.colors.iter() {
        surface.set_variable(&token.css_variable(), &color.to_hsl().to_string());
    }

    surface.set_variable(RADIUS_VARIABLE, &format!("{}px", theme.effective_radius()));

    surface.set_variable(FONT_VARIABLE, theme.effective_font());
    surface.set_body_font(BODY_FONT);

    tracing::trace!(theme_id = %theme.id, "applied theme to surface");
}
