use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) base_url: Option<SettingSource>,
	pub(crate) top_n: Option<SettingSource>,
	pub(crate) stale_responses: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_base_url(&self) -> SettingSource {
		self.base_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("service.base_url"))
	}

	pub(crate) fn source_for_top_n(&self) -> SettingSource {
		self.top_n
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.top_n"))
	}

	pub(crate) fn source_for_stale_responses(&self) -> SettingSource {
		self.stale_responses
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.stale_responses"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}
