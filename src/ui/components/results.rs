use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::fit_width;
use crate::recommend::{MISSING_VALUE, ResultItem, resolve_poster};
use crate::ui::style::Theme;

/// Number of skeleton cells drawn while a request is in flight.
///
/// All of them are drawn whatever the area, shrinking each cell to fit.
pub const PLACEHOLDER_CELLS: usize = 6;
pub const CARD_WIDTH: u16 = 32;
pub const CARD_HEIGHT: u16 = 6;

const PLACEHOLDER_COLUMNS: usize = 3;
const PLACEHOLDER_FILL: &str = "░";
const LOADING_LABEL: &str = " Fetching recommendations";

/// Which of the three mutually exclusive states the collection shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollectionView<'a> {
	Placeholders(usize),
	Empty,
	Cards(&'a [ResultItem]),
}

impl<'a> CollectionView<'a> {
	/// Loading wins over any (possibly stale) results.
	#[must_use]
	pub fn from_state(loading: bool, items: &'a [ResultItem]) -> Self {
		if loading {
			Self::Placeholders(PLACEHOLDER_CELLS)
		} else if items.is_empty() {
			Self::Empty
		} else {
			Self::Cards(items)
		}
	}
}

/// Screen area covered by the card for result `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardHitbox {
	pub area: Rect,
	pub index: usize,
}

/// What the last render produced, used for mouse hit-testing and cursor
/// movement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionLayout {
	pub cards: Vec<CardHitbox>,
	pub columns: usize,
}

/// Number of card columns that fit in `width`.
#[must_use]
pub fn grid_columns(width: u16) -> usize {
	usize::from((width / CARD_WIDTH).max(1))
}

pub struct ResultCollection<'a> {
	pub view: CollectionView<'a>,
	pub cursor: Option<usize>,
	pub empty_prompt: &'a str,
	pub theme: &'a Theme,
	pub throbber_state: &'a ThrobberState,
}

impl ResultCollection<'_> {
	pub fn render(self, frame: &mut Frame, area: Rect) -> CollectionLayout {
		if area.width == 0 || area.height == 0 {
			return CollectionLayout::default();
		}

		match self.view {
			CollectionView::Placeholders(count) => {
				render_placeholders(frame, area, count, self.theme, self.throbber_state);
				CollectionLayout::default()
			}
			CollectionView::Empty => {
				render_empty(frame, area, self.empty_prompt, self.theme);
				CollectionLayout::default()
			}
			CollectionView::Cards(items) => render_cards(frame, area, items, self.cursor, self.theme),
		}
	}
}

fn cell_rect(area: Rect, column: usize, row: usize, cell_width: u16) -> Option<Rect> {
	let x = area.x + cell_width * column as u16;
	let y = area.y + CARD_HEIGHT * row as u16;
	if y >= area.bottom() {
		return None;
	}
	Some(Rect {
		x,
		y,
		width: cell_width,
		height: CARD_HEIGHT.min(area.bottom() - y),
	})
}

fn render_placeholders(
	frame: &mut Frame,
	area: Rect,
	count: usize,
	theme: &Theme,
	throbber_state: &ThrobberState,
) {
	if count == 0 {
		return;
	}
	let mut columns = PLACEHOLDER_COLUMNS.min(grid_columns(area.width)).min(count);
	if count.div_ceil(columns) > usize::from(area.height) {
		columns = count;
	}
	let rows = count.div_ceil(columns) as u16;
	let cell_width = (area.width / columns as u16).max(1);
	let cell_height = (area.height / rows).max(1);
	let muted = theme.empty_style();

	for cell in 0..count {
		let rect = Rect {
			x: area.x + cell_width * (cell % columns) as u16,
			y: area.y + cell_height * (cell / columns) as u16,
			width: cell_width,
			height: cell_height,
		}
		.intersection(area);
		if rect.is_empty() {
			continue;
		}
		let block = Block::bordered().border_style(muted);
		let inner = block.inner(rect);
		frame.render_widget(block, rect);

		let fill = PLACEHOLDER_FILL.repeat(usize::from(inner.width));
		let mut lines: Vec<Line> = (0..inner.height)
			.map(|_| Line::styled(fill.clone(), muted))
			.collect();
		if cell == 0
			&& let Some(first) = lines.first_mut()
		{
			let spinner = Throbber::default()
				.style(muted)
				.throbber_style(muted)
				.to_symbol_span(throbber_state);
			*first = Line::from(vec![spinner, Span::styled(LOADING_LABEL, muted)]);
		}
		frame.render_widget(Paragraph::new(lines), inner);
	}
}

fn render_empty(frame: &mut Frame, area: Rect, prompt: &str, theme: &Theme) {
	let offset = area.height / 3;
	let message_area = Rect {
		y: area.y + offset,
		height: area.height - offset,
		..area
	};
	let message = Paragraph::new(prompt.to_string())
		.alignment(Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(message, message_area);
}

fn render_cards(
	frame: &mut Frame,
	area: Rect,
	items: &[ResultItem],
	cursor: Option<usize>,
	theme: &Theme,
) -> CollectionLayout {
	let columns = grid_columns(area.width);
	let cell_width = area.width / columns as u16;
	let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
	let cursor_row = cursor.map_or(0, |index| index / columns);
	let first_row = cursor_row.saturating_sub(visible_rows - 1);

	let mut layout = CollectionLayout {
		cards: Vec::new(),
		columns,
	};
	let start = first_row * columns;
	for (index, item) in items
		.iter()
		.enumerate()
		.skip(start)
		.take(visible_rows * columns)
	{
		let offset = index - start;
		let Some(rect) = cell_rect(area, offset % columns, offset / columns, cell_width) else {
			break;
		};
		render_card(frame, rect, item, cursor == Some(index), theme);
		layout.cards.push(CardHitbox { area: rect, index });
	}
	layout
}

fn render_card(frame: &mut Frame, area: Rect, item: &ResultItem, focused: bool, theme: &Theme) {
	let border = if focused {
		theme.card_focus_style()
	} else {
		theme.empty_style()
	};
	let block = Block::bordered().border_style(border);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let width = usize::from(inner.width);
	let title_style = if focused {
		theme.highlight_style()
	} else {
		Style::new().add_modifier(Modifier::BOLD)
	};
	let director = item.director.as_deref().unwrap_or("");
	let lines = vec![
		Line::styled(fit_width(&item.title, width), title_style),
		Line::styled(fit_width(director, width), theme.empty_style()),
		genre_year_line(item, width, theme),
		Line::styled(
			fit_width(&format!("▣ {}", resolve_poster(item)), width),
			theme.empty_style(),
		),
	];
	frame.render_widget(Paragraph::new(lines), inner);
}

fn genre_year_line(item: &ResultItem, width: usize, theme: &Theme) -> Line<'static> {
	let year = item.year.as_deref().unwrap_or("").to_string();
	let genre_budget = width.saturating_sub(year.width() + 1);
	let genre = fit_width(
		&format!(" {} ", item.primary_genre().unwrap_or(MISSING_VALUE)),
		genre_budget,
	);
	let gap = width.saturating_sub(genre.width() + year.width());
	Line::from(vec![
		Span::styled(genre, theme.chip_style()),
		Span::raw(" ".repeat(gap)),
		Span::styled(year, theme.empty_style()),
	])
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;

	use super::*;

	fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line);
		}
		lines.join("\n")
	}

	fn draw(view: CollectionView<'_>, cursor: Option<usize>) -> (String, CollectionLayout) {
		draw_sized(view, cursor, 96, 24)
	}

	fn draw_sized(
		view: CollectionView<'_>,
		cursor: Option<usize>,
		width: u16,
		height: u16,
	) -> (String, CollectionLayout) {
		let theme = Theme::default();
		let throbber_state = ThrobberState::default();
		let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
		let mut layout = CollectionLayout::default();
		terminal
			.draw(|frame| {
				let collection = ResultCollection {
					view,
					cursor,
					empty_prompt: "Search for movies",
					theme: &theme,
					throbber_state: &throbber_state,
				};
				layout = collection.render(frame, frame.area());
			})
			.expect("draw");
		(buffer_to_string(terminal.backend().buffer()), layout)
	}

	fn items(titles: &[&str]) -> Vec<ResultItem> {
		titles.iter().map(|title| ResultItem::new(*title)).collect()
	}

	#[test]
	fn loading_shows_placeholders_even_with_stale_results() {
		let stale = items(&["Heat"]);
		let view = CollectionView::from_state(true, &stale);
		assert_eq!(view, CollectionView::Placeholders(PLACEHOLDER_CELLS));

		let (screen, layout) = draw(view, None);
		assert!(!screen.contains("Heat"));
		assert!(screen.contains("Fetching recommendations"));
		assert!(layout.cards.is_empty());
		let top_left_corners = screen.matches('┌').count();
		assert_eq!(top_left_corners, PLACEHOLDER_CELLS);
	}

	#[test]
	fn every_placeholder_renders_in_cramped_areas() {
		for (width, height) in [(78, 9), (30, 19), (78, 15), (96, 4)] {
			let view = CollectionView::Placeholders(PLACEHOLDER_CELLS);
			let (screen, _) = draw_sized(view, None, width, height);
			assert_eq!(
				screen.matches('┌').count(),
				PLACEHOLDER_CELLS,
				"placeholder count at {width}x{height}"
			);
		}
	}

	#[test]
	fn empty_results_show_the_prompt() {
		let view = CollectionView::from_state(false, &[]);
		assert_eq!(view, CollectionView::Empty);

		let (screen, _) = draw(view, None);
		assert!(screen.contains("Search for movies"));
		assert!(!screen.contains('░'));
	}

	#[test]
	fn cards_follow_result_order() {
		let results = items(&["Zodiac", "Alien", "Memento", "Brazil"]);
		let (screen, layout) = draw(CollectionView::from_state(false, &results), Some(0));

		let positions: Vec<usize> = ["Zodiac", "Alien", "Memento", "Brazil"]
			.iter()
			.map(|title| screen.find(title).expect("title rendered"))
			.collect();
		let mut sorted = positions.clone();
		sorted.sort_unstable();
		assert_eq!(positions, sorted);

		let indices: Vec<usize> = layout.cards.iter().map(|card| card.index).collect();
		assert_eq!(indices, vec![0, 1, 2, 3]);
		assert_eq!(layout.columns, 3);
	}

	#[test]
	fn card_shows_primary_genre_year_and_poster_fallback() {
		let results = vec![ResultItem {
			director: Some("Michael Mann".into()),
			genre: Some("Crime, Drama".into()),
			year: Some("1995".into()),
			..ResultItem::new("Heat")
		}];
		let (screen, _) = draw(CollectionView::Cards(&results), None);
		assert!(screen.contains("Michael Mann"));
		assert!(screen.contains(" Crime "));
		assert!(!screen.contains("Drama"));
		assert!(screen.contains("1995"));
		assert!(screen.contains("builtin:placeholder"));
	}

	#[test]
	fn grid_scrolls_to_keep_the_cursor_visible() {
		let titles: Vec<String> = (0..30).map(|n| format!("Movie {n:02}")).collect();
		let results: Vec<ResultItem> = titles.iter().map(ResultItem::new).collect();
		let (screen, layout) = draw(CollectionView::Cards(&results), Some(29));
		assert!(screen.contains("Movie 29"));
		assert!(!screen.contains("Movie 00"));
		assert!(layout.cards.iter().any(|card| card.index == 29));
	}
}
