use serde::Deserialize;

use crate::cli::CliArgs;

/// Where the recommendation service lives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ServiceSection {
	pub(super) base_url: Option<String>,
}

impl ServiceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_base.clone() {
			self.base_url = Some(url);
		}
	}
}
