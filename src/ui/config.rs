use crate::search::DEFAULT_ERROR_NOTICE;

/// Text used by the UI around the search input and result grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	/// Title rendered above the input.
	pub title: String,
	/// Placeholder shown while the input is empty.
	pub input_hint: String,
	/// Message shown when there are no results to display.
	pub empty_prompt: String,
	/// Banner text raised when a request fails.
	pub error_notice: String,
	/// Quick-pick queries offered beneath the input.
	pub suggestions: Vec<String>,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Movie Recommender".to_string(),
			input_hint: "Find movies by title, franchise, actor, director or natural language"
				.to_string(),
			empty_prompt: "Search for movies".to_string(),
			error_notice: DEFAULT_ERROR_NOTICE.to_string(),
			suggestions: Vec::new(),
		}
	}
}
