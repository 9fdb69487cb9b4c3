use serde::Deserialize;

use crate::cli::CliArgs;

/// Request shaping and response handling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) top_n: Option<u32>,
	pub(super) stale_responses: Option<String>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(top_n) = cli.top_n {
			self.top_n = Some(top_n);
		}
		if let Some(policy) = cli.stale_responses {
			self.stale_responses = Some(policy.as_str().to_string());
		}
	}
}
