use cinerec::UiConfig;
use serde::Deserialize;

use super::super::util::sanitize_suggestions;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) input_hint: Option<String>,
	pub(super) empty_prompt: Option<String>,
	pub(super) error_notice: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) suggestions: Option<Vec<String>>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(prompt) = cli.empty_prompt.clone() {
			self.empty_prompt = Some(prompt);
		}
		if let Some(notice) = cli.error_notice.clone() {
			self.error_notice = Some(notice);
		}
		if let Some(suggestions) = &cli.suggestions {
			self.suggestions = Some(suggestions.clone());
		}
	}

	/// Fill unset values from [`UiConfig::default`]. Blank strings count as unset.
	pub(super) fn finalize(self) -> UiResolution {
		let defaults = UiConfig::default();
		let pick = |value: Option<String>, fallback: String| {
			value
				.map(|text| text.trim().to_string())
				.filter(|text| !text.is_empty())
				.unwrap_or(fallback)
		};

		let ui = UiConfig {
			title: pick(self.title, defaults.title),
			input_hint: pick(self.input_hint, defaults.input_hint),
			empty_prompt: pick(self.empty_prompt, defaults.empty_prompt),
			error_notice: pick(self.error_notice, defaults.error_notice),
			suggestions: sanitize_suggestions(self.suggestions.unwrap_or_default()),
		};

		UiResolution {
			ui,
			initial_query: self
				.initial_query
				.map(|query| query.trim().to_string())
				.unwrap_or_default(),
			theme: self
				.theme
				.map(|theme| theme.trim().to_string())
				.filter(|theme| !theme.is_empty()),
		}
	}
}
