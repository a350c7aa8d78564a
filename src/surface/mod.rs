//! The display surface a theme is projected onto.
//!
//! The engine only ever writes to a surface: named style variables plus the
//! document's base font. Writes have no success or failure contract.

mod applier;
pub use applier::*;

mod style_sheet;
pub use style_sheet::*;

/// Sink for style variables and the base font.
pub trait StyleSurface {
    /// Sets the variable `name` (e.g. `--background`) to `value`.
    fn set_variable(&mut self, name: &str, value: &str);

    /// Sets the font of the document body.
    fn set_body_font(&mut self, value: &str);
}

impl<S: StyleSurface + ?Sized> StyleSurface for &mut S {
    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value)
    }

    fn set_body_font(&mut self, value: &str) {
        (**self).set_body_font(value)
    }
}

impl<S: StyleSurface + ?Sized> StyleSurface for Box<S> {
    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value)
    }

    fn set_body_font(&mut self, value: &str) {
        (**self).set_body_font(value)
    }
}
