use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use cinerec::{
	HttpRecommender, ResultCountPreference, SearchUi, SessionOutcome, StalePolicy, UiConfig,
};
use log::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive recommendation session.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let search_ui = SearchUiFactory::build(config)?;
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.search_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig) -> Result<SearchUi> {
		let ResolvedConfig {
			base_url,
			top_n,
			stale_responses,
			initial_query,
			theme,
			ui,
		} = config;

		let preference = ResultCountPreference::try_from(top_n)?;
		let policy = StalePolicy::from_str(&stale_responses).map_err(|reason| anyhow!(reason))?;

		let builder = Self::new(&base_url)?
			.with_ui_config(ui)
			.with_preference(preference)
			.with_stale_policy(policy)
			.with_initial_query(initial_query)
			.with_theme(theme);

		Ok(builder.finish())
	}

	fn new(base_url: &str) -> Result<Self> {
		let service = HttpRecommender::new(base_url)?;
		info!("using recommendation service at {}", service.base_url());
		let search_ui = SearchUi::new(Arc::new(service));
		Ok(Self { search_ui })
	}

	fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.search_ui = self.search_ui.with_ui_config(config);
		self
	}

	fn with_preference(mut self, preference: ResultCountPreference) -> Self {
		self.search_ui = self.search_ui.with_preference(preference);
		self
	}

	fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
		self.search_ui = self.search_ui.with_stale_policy(policy);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.search_ui = self.search_ui.with_initial_query(query);
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.search_ui = self.search_ui.with_theme_name(&theme);
		}
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}
