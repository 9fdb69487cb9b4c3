/// A user-facing notification raised by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	/// Short text shown to the user.
	pub message: String,
	/// Diagnostic detail, written to the log rather than the banner.
	pub detail: String,
}

impl Notice {
	#[must_use]
	pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			detail: detail.into(),
		}
	}
}
