//! The theme store: active theme, custom themes, and their lifecycle.

mod ids;
pub use ids::CUSTOM_ID_PREFIX;
mod state;
pub use state::*;
