use serde::Serialize;

use crate::recommend::ResultItem;

/// What the session ended with.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionOutcome {
	/// True when the user accepted an item from the detail overlay.
	pub accepted: bool,
	/// The last query that was submitted.
	pub query: String,
	pub selection: Option<ResultItem>,
}

impl SessionOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	#[must_use]
	pub fn accepted(query: impl Into<String>, item: ResultItem) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(item),
		}
	}
}
