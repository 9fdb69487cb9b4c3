//! Core crate exports for building and running the `cinerec` terminal client.
//!
//! The root module re-exports the service client, the search orchestrator,
//! and the UI builder so that embedders can drive a session without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod recommend;
pub mod search;
pub mod ui;

pub use recommend::{
	DEFAULT_BASE_URL, HttpRecommender, RecommendError, RecommendRequest, RecommendResponse,
	RecommendationService, ResultItem,
};
pub use search::{
	Lifecycle, Notice, ResultCountPreference, SearchOrchestrator, SearchState, StalePolicy,
};
pub use ui::style::{Theme, default_theme};
pub use ui::{SearchUi, SessionOutcome, UiConfig};
