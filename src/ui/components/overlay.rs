use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::recommend::{MISSING_VALUE, ResultItem, resolve_poster};
use crate::ui::style::Theme;

pub const CLOSE_LABEL: &str = "[ Close ]";

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

/// Areas of the drawn overlay, used to route mouse clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayHitbox {
	pub panel: Rect,
	pub close_button: Rect,
}

/// Modal detail view for the selected result.
pub struct ResultDetailOverlay<'a> {
	pub item: &'a ResultItem,
	pub theme: &'a Theme,
}

impl ResultDetailOverlay<'_> {
	pub fn render(self, frame: &mut Frame, area: Rect) -> OverlayHitbox {
		// Dim whatever is behind the panel.
		frame.render_widget(
			Block::new().style(Style::new().add_modifier(Modifier::DIM)),
			area,
		);

		let panel = panel_area(area);
		frame.render_widget(Clear, panel);
		let block = Block::bordered()
			.border_style(self.theme.highlight_style())
			.title(Line::from(Span::styled(
				format!(" {} ", self.item.title),
				self.theme.highlight_style(),
			)));
		let inner = block.inner(panel);
		frame.render_widget(block, panel);

		let label_width = CLOSE_LABEL.width() as u16;
		let close_button = Rect {
			x: panel.right().saturating_sub(label_width + 2).max(panel.x),
			y: panel.y,
			width: label_width.min(panel.width),
			height: 1,
		};
		frame.render_widget(
			Paragraph::new(CLOSE_LABEL).style(self.theme.chip_style()),
			close_button,
		);

		frame.render_widget(
			Paragraph::new(detail_text(self.item)).wrap(Wrap { trim: true }),
			inner,
		);

		OverlayHitbox {
			panel,
			close_button,
		}
	}
}

/// Centered panel covering most of `area`.
fn panel_area(area: Rect) -> Rect {
	let width = (area.width * 4 / 5).max(MIN_WIDTH).min(area.width);
	let height = (area.height * 4 / 5).max(MIN_HEIGHT).min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

/// Every field of `item`, with missing values shown as a dash.
#[must_use]
pub fn detail_text(item: &ResultItem) -> Text<'static> {
	let field = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING_VALUE.to_string());
	let label = |name: &'static str| Span::styled(name, Style::new().add_modifier(Modifier::BOLD));

	let subtitle = [item.year.as_deref(), item.genre.as_deref()]
		.into_iter()
		.flatten()
		.collect::<Vec<_>>()
		.join(" • ");
	let plot = item.plot_excerpt();

	Text::from(vec![
		Line::from(Span::styled(
			item.title.clone(),
			Style::new().add_modifier(Modifier::BOLD),
		)),
		Line::from(if subtitle.is_empty() {
			MISSING_VALUE.to_string()
		} else {
			subtitle
		}),
		Line::default(),
		Line::from(vec![label("Director: "), Span::raw(field(&item.director))]),
		Line::from(vec![label("Cast: "), Span::raw(field(&item.cast))]),
		Line::default(),
		Line::from(vec![label("Plot: "), Span::raw(plot)]),
		Line::default(),
		Line::from(vec![label("Poster: "), Span::raw(resolve_poster(item).to_string())]),
		Line::from(vec![label("Score: "), Span::raw(item.score_label())]),
	])
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn text_to_string(text: &Text<'_>) -> String {
		text.lines
			.iter()
			.map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
			.collect::<Vec<_>>()
			.join("\n")
	}

	#[test]
	fn detail_text_formats_score_to_three_decimals() {
		let item = ResultItem {
			score: Some(0.8234),
			..ResultItem::new("Heat")
		};
		assert!(text_to_string(&detail_text(&item)).contains("Score: 0.823"));

		let unscored = ResultItem::new("Heat");
		assert!(text_to_string(&detail_text(&unscored)).contains("Score: 0.000"));
	}

	#[test]
	fn detail_text_dashes_missing_fields() {
		let rendered = text_to_string(&detail_text(&ResultItem::new("Heat")));
		assert!(rendered.contains("Director: —"));
		assert!(rendered.contains("Cast: —"));
		assert!(rendered.contains("Plot: —"));
		assert!(rendered.contains("Poster: builtin:placeholder-poster"));
	}

	#[test]
	fn detail_text_joins_year_and_genre() {
		let item = ResultItem {
			year: Some("1995".into()),
			genre: Some("Crime, Drama".into()),
			..ResultItem::new("Heat")
		};
		assert!(text_to_string(&detail_text(&item)).contains("1995 • Crime, Drama"));
	}

	#[test]
	fn overlay_is_centered_with_a_close_button_on_its_border() {
		let theme = Theme::default();
		let item = ResultItem::new("Heat");
		let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
		let mut hitbox = None;
		terminal
			.draw(|frame| {
				let overlay = ResultDetailOverlay {
					item: &item,
					theme: &theme,
				};
				hitbox = Some(overlay.render(frame, frame.area()));
			})
			.expect("draw");

		let hitbox = hitbox.expect("overlay rendered");
		assert_eq!(hitbox.panel, Rect::new(10, 3, 80, 24));
		assert_eq!(hitbox.close_button.y, hitbox.panel.y);
		assert!(hitbox.close_button.right() <= hitbox.panel.right());

		let buffer = terminal.backend().buffer();
		let top_row: String = (0..buffer.area.width)
			.map(|x| buffer[(x, hitbox.panel.y)].symbol().to_string())
			.collect();
		assert!(top_row.contains(CLOSE_LABEL));
		assert!(top_row.contains(" Heat "));
	}
}
