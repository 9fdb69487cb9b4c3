use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::fit_width;
use crate::search::{Notice, ResultCountPreference};
use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

/// Argument bundle for the input row.
pub struct PromptContext<'a, 'b> {
	pub title: &'a str,
	pub input: &'a mut QueryInput<'b>,
	pub preference: ResultCountPreference,
	pub loading: bool,
	pub focused: bool,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Render the bordered query box with the result count badge at the right.
pub fn render_prompt(frame: &mut Frame, area: Rect, ctx: PromptContext<'_, '_>) {
	let PromptContext {
		title,
		input,
		preference,
		loading,
		focused,
		throbber_state,
		theme,
	} = ctx;

	let border = if focused {
		theme.prompt_style()
	} else {
		theme.empty_style()
	};
	let block = Block::bordered()
		.border_style(border)
		.title(Line::from(Span::styled(format!(" {title} "), theme.header_style())));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let badge = badge_line(preference, loading, throbber_state, theme);
	let badge_width = badge.width() as u16;
	let [input_area, badge_area] =
		Layout::horizontal([Constraint::Min(1), Constraint::Length(badge_width)]).areas(inner);

	input.render(frame, input_area, theme, focused);
	frame.render_widget(Paragraph::new(badge), badge_area);
}

fn badge_line(
	preference: ResultCountPreference,
	loading: bool,
	throbber_state: &ThrobberState,
	theme: &Theme,
) -> Line<'static> {
	let muted = theme.empty_style();
	let mut line = Line::default();
	if loading {
		let spinner = Throbber::default()
			.style(muted)
			.throbber_style(muted)
			.to_symbol_span(throbber_state);
		line.spans.push(spinner);
	}
	line.spans.push(Span::raw(" "));
	line.spans.push(Span::styled(
		format!(" {} results ", preference.count()),
		theme.chip_style(),
	));
	line.spans.push(Span::styled(" ^N", muted));
	line
}

/// Screen area of quick-pick chip `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionHitbox {
	pub area: Rect,
	pub index: usize,
}

/// Render quick-pick chips on one row. Chips that do not fit are skipped.
pub fn render_suggestions(
	frame: &mut Frame,
	area: Rect,
	suggestions: &[String],
	theme: &Theme,
) -> Vec<SuggestionHitbox> {
	let mut hitboxes = Vec::new();
	if area.height == 0 {
		return hitboxes;
	}

	let mut x = area.x;
	for (index, suggestion) in suggestions.iter().enumerate() {
		let label = match index {
			0..=8 => format!(" {} {} ", index + 1, suggestion),
			_ => format!(" {suggestion} "),
		};
		let width = label.width() as u16;
		if x + width > area.right() {
			break;
		}
		let chip = Rect {
			x,
			y: area.y,
			width,
			height: 1,
		};
		frame.render_widget(Paragraph::new(label).style(theme.chip_style()), chip);
		hitboxes.push(SuggestionHitbox { area: chip, index });
		x += width + 1;
	}
	hitboxes
}

/// Render the failure banner across `area`, noting how many more are queued.
pub fn render_notice(
	frame: &mut Frame,
	area: Rect,
	notice: &Notice,
	queued: usize,
	theme: &Theme,
) {
	let mut text = format!(" ! {}", notice.message);
	if queued > 0 {
		text.push_str(&format!(" (+{queued} more)"));
	}
	let text = fit_width(&text, usize::from(area.width));
	frame.render_widget(Paragraph::new(text).style(theme.error_style()), area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
		let buffer = terminal.backend().buffer();
		(0..buffer.area.width)
			.map(|x| buffer[(x, y)].symbol().to_string())
			.collect()
	}

	#[test]
	fn prompt_shows_title_query_and_result_count() {
		let theme = Theme::default();
		let throbber_state = ThrobberState::default();
		let mut input = QueryInput::new("space opera");
		let mut terminal = Terminal::new(TestBackend::new(60, 3)).expect("terminal");
		terminal
			.draw(|frame| {
				let ctx = PromptContext {
					title: "Movie Recommender",
					input: &mut input,
					preference: ResultCountPreference::TwentyFour,
					loading: false,
					focused: true,
					throbber_state: &throbber_state,
					theme: &theme,
				};
				render_prompt(frame, frame.area(), ctx);
			})
			.expect("draw");

		assert!(row(&terminal, 0).contains("Movie Recommender"));
		let middle = row(&terminal, 1);
		assert!(middle.contains("space opera"));
		assert!(middle.contains("24 results"));
	}

	#[test]
	fn suggestions_are_numbered_and_clipped_to_the_row() {
		let theme = Theme::default();
		let suggestions = vec![
			"Nolan movies".to_string(),
			"Space westerns".to_string(),
			"A suggestion far too long to fit anywhere".to_string(),
		];
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).expect("terminal");
		let mut hitboxes = Vec::new();
		terminal
			.draw(|frame| {
				hitboxes = render_suggestions(frame, frame.area(), &suggestions, &theme);
			})
			.expect("draw");

		assert_eq!(hitboxes.len(), 2);
		assert_eq!(hitboxes[0].area.x, 0);
		assert_eq!(hitboxes[1].index, 1);
		let line = row(&terminal, 0);
		assert!(line.contains("1 Nolan movies"));
		assert!(line.contains("2 Space westerns"));
	}

	#[test]
	fn notice_banner_shows_the_message() {
		let theme = Theme::default();
		let notice = Notice::new("Recommendation error - check backend", "status 500");
		let mut terminal = Terminal::new(TestBackend::new(50, 1)).expect("terminal");
		terminal
			.draw(|frame| render_notice(frame, frame.area(), &notice, 0, &theme))
			.expect("draw");
		let line = row(&terminal, 0);
		assert!(line.contains("Recommendation error - check backend"));
		assert!(!line.contains("more"));

		terminal
			.draw(|frame| render_notice(frame, frame.area(), &notice, 2, &theme))
			.expect("draw");
		assert!(row(&terminal, 0).contains("(+2 more)"));
	}
}
