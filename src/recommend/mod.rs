//! Contract between the interface and the remote recommendation service.
//!
//! The orchestrator only ever talks to a [`RecommendationService`]; the
//! [`HttpRecommender`] is the production implementation that speaks the JSON
//! protocol over HTTP.

mod client;
mod error;
mod item;

use serde::{Deserialize, Serialize};

pub use client::{DEFAULT_BASE_URL, HttpRecommender, decode_response};
pub use error::RecommendError;
pub use item::{
	MISSING_VALUE, PLACEHOLDER_POSTER, PLOT_WORD_LIMIT, ResultItem, TRUNCATION_MARKER,
	resolve_poster, truncate_words,
};

/// Body of a `POST /recommend` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendRequest {
	pub query: String,
	pub top_n: u32,
}

/// Successful response from the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendResponse {
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	results: Option<Vec<ResultItem>>,
}

impl RecommendResponse {
	#[must_use]
	pub fn new(results: Vec<ResultItem>) -> Self {
		Self {
			query: None,
			results: Some(results),
		}
	}

	/// Ordered results; an absent or null `results` field yields an empty list.
	#[must_use]
	pub fn into_results(self) -> Vec<ResultItem> {
		self.results.unwrap_or_default()
	}
}

/// Anything able to answer a recommendation request.
///
/// Implementations are called from a worker thread and may block.
pub trait RecommendationService: Send + Sync {
	fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse, RecommendError>;
}
