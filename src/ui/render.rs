use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::{Block, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::App;
use super::components::{
	CollectionView, PromptContext, ResultCollection, ResultDetailOverlay, render_notice,
	render_prompt, render_suggestions,
};
use super::state::Focus;

const PROMPT_HEIGHT: u16 = 3;
const LOG_PANE_HEIGHT: u16 = 10;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let log_height = if self.show_logs { LOG_PANE_HEIGHT } else { 0 };
		let [prompt_area, chips_area, status_area, results_area, log_area] = Layout::vertical([
			Constraint::Length(PROMPT_HEIGHT),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(log_height),
		])
		.areas(area);

		let state = self.search.state();
		let loading = state.is_loading();
		let preference = state.preference();
		render_prompt(
			frame,
			prompt_area,
			PromptContext {
				title: &self.ui.title,
				input: &mut self.input,
				preference,
				loading,
				focused: self.focus == Focus::Input,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);

		let suggestions = self.input.suggestions().to_vec();
		self.hitboxes.suggestions = render_suggestions(frame, chips_area, &suggestions, &self.theme);

		if let Some(notice) = self.notices.current() {
			render_notice(frame, status_area, notice, self.notices.pending(), &self.theme);
		}

		let state = self.search.state();
		let collection = ResultCollection {
			view: CollectionView::from_state(state.is_loading(), state.results()),
			cursor: (self.focus == Focus::Grid).then_some(self.cursor),
			empty_prompt: &self.ui.empty_prompt,
			theme: &self.theme,
			throbber_state: &self.throbber_state,
		};
		let layout = collection.render(frame, results_area);
		if layout.columns > 0 {
			self.grid_columns = layout.columns;
		}
		self.hitboxes.cards = layout.cards;

		if self.show_logs {
			self.render_logs(frame, log_area);
		}

		let full = frame.area();
		self.hitboxes.overlay = self.search.state().selected().map(|item| {
			ResultDetailOverlay {
				item,
				theme: &self.theme,
			}
			.render(frame, full)
		});
	}

	fn render_logs(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}
		let widget = TuiLoggerWidget::default()
			.block(
				Block::bordered()
					.title(" Runtime log (F2) ")
					.border_style(self.theme.empty_style()),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.state(&self.log_state);
		frame.render_widget(widget, area);
	}
}
