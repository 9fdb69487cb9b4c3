use std::time::Instant;

use log::LevelFilter;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::components::{CardHitbox, OverlayHitbox, SuggestionHitbox};
use super::config::UiConfig;
use super::input::QueryInput;
use super::notice::NoticeBoard;
use super::outcome::SessionOutcome;
use crate::search::SearchOrchestrator;
use crate::ui::style::Theme;

/// Which half of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Input,
	Grid,
}

/// Clickable regions recorded by the most recent draw.
#[derive(Debug, Default)]
pub(crate) struct Hitboxes {
	pub cards: Vec<CardHitbox>,
	pub suggestions: Vec<SuggestionHitbox>,
	pub overlay: Option<OverlayHitbox>,
}

pub struct App<'a> {
	pub(crate) search: SearchOrchestrator,
	pub(crate) input: QueryInput<'a>,
	pub(crate) focus: Focus,
	pub(crate) cursor: usize,
	pub(crate) grid_columns: usize,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) notices: NoticeBoard,
	pub(crate) show_logs: bool,
	pub(crate) log_state: TuiWidgetState,
	pub(crate) hitboxes: Hitboxes,
	seen_revision: u64,
}

impl<'a> App<'a> {
	pub fn new(search: SearchOrchestrator, ui: UiConfig) -> Self {
		let input = QueryInput::new("")
			.with_hint(ui.input_hint.clone())
			.with_suggestions(ui.suggestions.clone());
		let seen_revision = search.state().revision();
		Self {
			search,
			input,
			focus: Focus::Input,
			cursor: 0,
			grid_columns: 1,
			ui,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			notices: NoticeBoard::default(),
			show_logs: false,
			log_state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
			hitboxes: Hitboxes::default(),
			seen_revision,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	#[must_use]
	pub fn search(&self) -> &SearchOrchestrator {
		&self.search
	}

	/// Put `query` in the input and submit it.
	pub fn submit_text(&mut self, query: &str) -> bool {
		self.input.set_text(query);
		self.submit_input()
	}

	/// Submit whatever the input holds. Blank input does nothing.
	pub(crate) fn submit_input(&mut self) -> bool {
		let Some(query) = self.input.submit() else {
			return false;
		};
		let submitted = self.search.submit_query(&query).is_some();
		if submitted {
			self.focus = Focus::Input;
		}
		submitted
	}

	/// Apply finished requests and surface any failures as banners.
	pub(crate) fn pump_search(&mut self) {
		self.pump_search_at(Instant::now());
	}

	pub(crate) fn pump_search_at(&mut self, now: Instant) {
		self.search.pump_responses();

		let revision = self.search.state().revision();
		if revision != self.seen_revision {
			self.seen_revision = revision;
			self.cursor = 0;
			if self.search.state().results().is_empty() {
				self.focus = Focus::Input;
			}
		}

		while let Some(notice) = self.search.take_notice() {
			self.notices.push(notice);
		}
		self.notices.tick(now);
	}

	pub(crate) fn result_count(&self) -> usize {
		self.search.state().results().len()
	}

	/// Cards are on screen and can take focus. Placeholders hide them while loading.
	pub(crate) fn grid_available(&self) -> bool {
		!self.search.state().is_loading() && self.result_count() > 0
	}

	/// Move the grid cursor by `delta` cells, clamped to the result set.
	pub(crate) fn move_cursor(&mut self, delta: isize) {
		let len = self.result_count();
		if len == 0 {
			self.cursor = 0;
			return;
		}
		let target = self.cursor as isize + delta;
		self.cursor = target.clamp(0, len as isize - 1) as usize;
	}

	pub(crate) fn overlay_open(&self) -> bool {
		self.search.state().selected().is_some()
	}

	pub(crate) fn cancelled(&self) -> SessionOutcome {
		SessionOutcome::cancelled(self.search.state().query())
	}

	pub(crate) fn accepted(&self) -> Option<SessionOutcome> {
		let item = self.search.state().selected()?.clone();
		Some(SessionOutcome::accepted(self.search.state().query(), item))
	}
}
