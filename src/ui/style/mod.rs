//! Visual styling utilities.
//!
//! Themes are the only styling knob today; they are looked up by name from
//! the built-in set.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
