//! Search lifecycle: the state container and the orchestrator that mutates it.

mod notice;
mod orchestrator;
mod preference;
mod state;

pub use notice::Notice;
pub use orchestrator::{DEFAULT_ERROR_NOTICE, SearchOrchestrator, StalePolicy};
pub use preference::{ResultCountPreference, UnsupportedResultCount};
pub use state::{Lifecycle, SearchState};
