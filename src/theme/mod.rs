//! Theme system: value types, the built-in catalog, and surface helpers.
//!
//! Themes carry nineteen semantic color tokens plus an optional font and
//! corner radius. The catalog is fixed at compile time; user themes live in
//! the [`ThemeStore`](crate::store::ThemeStore).

pub use tesserae_theme::*;

mod catalog;
pub use catalog::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
