use std::sync::Arc;

use anyhow::Result;

use super::App;
use super::config::UiConfig;
use super::outcome::SessionOutcome;
use crate::recommend::RecommendationService;
use crate::search::{ResultCountPreference, SearchOrchestrator, StalePolicy};
use crate::ui::style::{Theme, by_name};

/// A small builder for configuring the interactive recommendation UI.
pub struct SearchUi {
	service: Arc<dyn RecommendationService>,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
	preference: ResultCountPreference,
	stale_policy: StalePolicy,
	initial_query: String,
}

impl SearchUi {
	pub fn new(service: Arc<dyn RecommendationService>) -> Self {
		Self {
			service,
			ui_config: None,
			theme: None,
			preference: ResultCountPreference::default(),
			stale_policy: StalePolicy::default(),
			initial_query: String::new(),
		}
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	/// Query submitted as soon as the UI starts. Blank means start idle.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_preference(mut self, preference: ResultCountPreference) -> Self {
		self.preference = preference;
		self
	}

	pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
		self.stale_policy = policy;
		self
	}

	/// Build the [`App`] without starting the terminal.
	pub fn into_app(self) -> App<'static> {
		let ui = self.ui_config.unwrap_or_default();
		let search = SearchOrchestrator::new(self.service)
			.with_stale_policy(self.stale_policy)
			.with_error_notice(ui.error_notice.clone())
			.with_preference(self.preference);
		let mut app = App::new(search, ui);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if !self.initial_query.trim().is_empty() {
			app.submit_text(&self.initial_query);
		}
		app
	}

	/// Run the interactive UI with the configured options.
	pub fn run(self) -> Result<SessionOutcome> {
		let mut app = self.into_app();
		app.run()
	}
}
