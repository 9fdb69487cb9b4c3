//! Interactive terminal UI for browsing recommendations.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, input
//! handling and the widgets/style definitions they draw with.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod notice;
mod outcome;
pub mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::UiConfig;
pub use outcome::SessionOutcome;
pub use state::{App, Focus};
