use thiserror::Error;

/// Failures that can occur while asking the service for recommendations.
///
/// Every variant is recoverable: the orchestrator logs it, raises a single
/// notice and keeps the previous result set.
#[derive(Debug, Error)]
pub enum RecommendError {
	/// The request never reached the service or no response came back.
	#[error("failed to reach recommendation service at {url}: {reason}")]
	Transport { url: String, reason: String },
	/// The service answered with a non-success status.
	#[error("recommendation service returned HTTP {status}: {detail}")]
	Status { status: u16, detail: String },
	/// The response body did not have the expected shape.
	#[error("recommendation service sent a malformed response: {0}")]
	Malformed(#[from] serde_json::Error),
	/// The client could not be prepared or the request could not be dispatched.
	#[error("recommendation client unavailable: {0}")]
	Client(String),
}

impl RecommendError {
	pub(crate) fn transport(url: &str, err: impl std::fmt::Display) -> Self {
		Self::Transport {
			url: url.to_string(),
			reason: err.to_string(),
		}
	}
}
