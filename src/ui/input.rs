//! Single-line query editor with quick-pick suggestions.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::ui::style::Theme;

/// Local text buffer for the query. Nothing here talks to the network; a
/// submit only hands back the trimmed text for the orchestrator.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	hint: String,
	suggestions: Vec<String>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			hint: String::new(),
			suggestions: Vec::new(),
		};
		input.set_text(&initial.into());
		input
	}

	#[must_use]
	pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
		self.hint = hint.into();
		self.textarea.set_placeholder_text(self.hint.clone());
		self
	}

	#[must_use]
	pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
		self.suggestions = suggestions;
		self
	}

	/// Current buffer contents, untrimmed.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the buffer and park the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		let mut textarea = TextArea::new(vec![text.replace(['\r', '\n'], " ")]);
		textarea.set_cursor_line_style(Style::default());
		if !self.hint.is_empty() {
			textarea.set_placeholder_text(self.hint.clone());
		}
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	/// Feed an editing key to the buffer. Line breaks are never inserted.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let inserts_newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if inserts_newline {
			return false;
		}
		self.textarea.input(key)
	}

	/// The trimmed buffer, or `None` when it is blank.
	#[must_use]
	pub fn submit(&self) -> Option<String> {
		let trimmed = self.text().trim();
		if trimmed.is_empty() {
			None
		} else {
			Some(trimmed.to_string())
		}
	}

	/// Load suggestion `index` into the buffer and return it for submission.
	pub fn activate_suggestion(&mut self, index: usize) -> Option<String> {
		let suggestion = self.suggestions.get(index)?.clone();
		self.set_text(&suggestion);
		self.submit()
	}

	#[must_use]
	pub fn suggestions(&self) -> &[String] {
		&self.suggestions
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
		let cursor = if focused {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
		self.textarea.set_placeholder_style(theme.empty_style());
		frame.render_widget(&self.textarea, area);
	}
}
