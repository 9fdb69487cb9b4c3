use anyhow::{Error, Result};
use cinerec::{DEFAULT_BASE_URL, ResultCountPreference, StalePolicy};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::util::normalize_base_url;

mod search;
mod service;
mod ui;

use search::SearchSection;
use service::ServiceSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	service: ServiceSection,
	search: SearchSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.service.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.api_base.is_some(),
				self.service.base_url.is_some(),
				"CINEREC__SERVICE__BASE_URL",
				"--api-base",
				"service.base_url",
			),
			top_n: detect_source(
				cli.top_n.is_some(),
				self.search.top_n.is_some(),
				"CINEREC__SEARCH__TOP_N",
				"--top-n",
				"search.top_n",
			),
			stale_responses: detect_source(
				cli.stale_responses.is_some(),
				self.search.stale_responses.is_some(),
				"CINEREC__SEARCH__STALE_RESPONSES",
				"--stale-responses",
				"search.stale_responses",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"CINEREC__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let base_url = self
			.service
			.base_url
			.as_deref()
			.map(normalize_base_url)
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		let top_n = self
			.search
			.top_n
			.unwrap_or_else(|| ResultCountPreference::default().count());
		let stale_responses = self
			.search
			.stale_responses
			.unwrap_or_else(|| StalePolicy::default().as_str().to_string());
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			base_url,
			top_n,
			stale_responses,
			initial_query: ui.initial_query,
			theme: ui.theme,
			ui: ui.ui,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
