//! Built-in themes

mod currensee;

pub use currensee::{base, currensee_bundle, DARK_THEME, LIGHT_THEME};
