//! Widgets that render read-only snapshots of the search state.

pub mod overlay;
pub mod prompt;
pub mod results;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub use overlay::{CLOSE_LABEL, OverlayHitbox, ResultDetailOverlay, detail_text};
pub use prompt::{
	PromptContext, SuggestionHitbox, render_notice, render_prompt, render_suggestions,
};
pub use results::{
	CARD_HEIGHT, CARD_WIDTH, CardHitbox, CollectionLayout, CollectionView, PLACEHOLDER_CELLS,
	ResultCollection, grid_columns,
};

const ELLIPSIS: char = '…';

/// Clip `text` to at most `width` display columns, marking the cut with an
/// ellipsis.
#[must_use]
pub fn fit_width(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let budget = width - 1;
	let mut used = 0;
	let mut clipped = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > budget {
			break;
		}
		used += ch_width;
		clipped.push(ch);
	}
	clipped.push(ELLIPSIS);
	clipped
}
