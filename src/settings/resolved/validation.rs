use std::str::FromStr;

use cinerec::ui::style::{by_name, names};
use cinerec::{ResultCountPreference, StalePolicy};
use reqwest::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	validate_base_url(&config.base_url, sources)?;

	if let Err(err) = ResultCountPreference::try_from(config.top_n) {
		return Err(ConfigError::invalid(
			"search.top_n",
			config.top_n.to_string(),
			sources.source_for_top_n(),
			err.to_string(),
		));
	}

	if let Err(reason) = StalePolicy::from_str(&config.stale_responses) {
		return Err(ConfigError::invalid(
			"search.stale_responses",
			config.stale_responses.clone(),
			sources.source_for_stale_responses(),
			reason,
		));
	}

	if let Some(theme) = &config.theme
		&& by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("expected one of: {}", names().join(", ")),
		));
	}

	Ok(())
}

fn validate_base_url(value: &str, sources: &ConfigSources) -> Result<(), ConfigError> {
	let invalid = |reason: String| {
		ConfigError::invalid(
			"service.base_url",
			value,
			sources.source_for_base_url(),
			reason,
		)
	};

	let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid(format!(
			"scheme must be http or https, not `{}`",
			url.scheme()
		)));
	}
	if url.host_str().is_none_or(str::is_empty) {
		return Err(invalid("a host is required".to_string()));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use cinerec::UiConfig;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			base_url: "http://localhost:8000".into(),
			top_n: 12,
			stale_responses: "discard".into(),
			initial_query: String::new(),
			theme: None,
			ui: UiConfig::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_unsupported_result_counts() {
		let config = ResolvedConfig {
			top_n: 7,
			..config()
		};
		let sources = ConfigSources {
			top_n: Some(SettingSource::CliFlag("--top-n")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "search.top_n"));
		let message = err.to_string();
		assert!(message.contains("value: 7"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_non_http_urls() {
		let config = ResolvedConfig {
			base_url: "file:///tmp/recs".into(),
			..config()
		};
		let sources = ConfigSources {
			base_url: Some(SettingSource::Environment("CINEREC__SERVICE__BASE_URL")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "service.base_url"));
		let message = err.to_string();
		assert!(message.contains("environment variable"));
		assert!(message.contains("http or https"));
	}

	#[test]
	fn validation_rejects_urls_without_a_scheme() {
		let config = ResolvedConfig {
			base_url: "localhost:8000".into(),
			..config()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "service.base_url"));
	}

	#[test]
	fn validation_rejects_unknown_stale_policies_and_themes() {
		let bad_policy = ResolvedConfig {
			stale_responses: "newest".into(),
			..config()
		};
		let err = validate(&bad_policy, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "search.stale_responses"));

		let bad_theme = ResolvedConfig {
			theme: Some("neon".into()),
			..config()
		};
		let err = validate(&bad_theme, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "ui.theme"));
		assert!(err.to_string().contains("slate"));
	}
}
