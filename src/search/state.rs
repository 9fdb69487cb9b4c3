use super::ResultCountPreference;
use crate::recommend::ResultItem;

/// Where the current search lifecycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
	#[default]
	Idle,
	Loading,
	Populated,
	/// The last request failed; previously shown results are kept.
	Failed,
}

/// Session state owned by the [`SearchOrchestrator`](super::SearchOrchestrator).
///
/// Rendering code only ever sees `&SearchState`; every mutation goes through
/// the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
	pub(super) query: String,
	pub(super) preference: ResultCountPreference,
	pub(super) lifecycle: Lifecycle,
	pub(super) results: Vec<ResultItem>,
	pub(super) selected: Option<ResultItem>,
	pub(super) revision: u64,
}

impl SearchState {
	/// Last submitted (trimmed) query.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn preference(&self) -> ResultCountPreference {
		self.preference
	}

	#[must_use]
	pub fn lifecycle(&self) -> Lifecycle {
		self.lifecycle
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.lifecycle == Lifecycle::Loading
	}

	/// Results in the order the service returned them.
	#[must_use]
	pub fn results(&self) -> &[ResultItem] {
		&self.results
	}

	#[must_use]
	pub fn selected(&self) -> Option<&ResultItem> {
		self.selected.as_ref()
	}

	/// Incremented every time the result set is replaced.
	#[must_use]
	pub fn revision(&self) -> u64 {
		self.revision
	}
}
