use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tui_logger::TuiWidgetEvent;

use super::App;
use super::outcome::SessionOutcome;
use super::state::Focus;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);

		if ctrl && key.code == KeyCode::Char('c') {
			return Ok(Some(self.cancelled()));
		}
		self.notices.dismiss();

		if self.overlay_open() {
			match key.code {
				KeyCode::Esc | KeyCode::Enter => self.search.dismiss_overlay(),
				KeyCode::Char('o') if ctrl => return Ok(self.accepted()),
				_ => {}
			}
			return Ok(None);
		}

		match key.code {
			KeyCode::F(2) => {
				self.show_logs = !self.show_logs;
				return Ok(None);
			}
			KeyCode::PageUp | KeyCode::PageDown if self.show_logs => {
				let event = if key.code == KeyCode::PageUp {
					TuiWidgetEvent::PrevPageKey
				} else {
					TuiWidgetEvent::NextPageKey
				};
				self.log_state.transition(event);
				return Ok(None);
			}
			KeyCode::Char('n') if ctrl => {
				let next = self.search.state().preference().next();
				self.search.set_result_count_preference(next);
				return Ok(None);
			}
			KeyCode::Char(digit @ '1'..='9') if alt => {
				self.activate_suggestion(digit as usize - '1' as usize);
				return Ok(None);
			}
			KeyCode::Tab | KeyCode::BackTab => {
				self.toggle_focus();
				return Ok(None);
			}
			_ => {}
		}

		match self.focus {
			Focus::Input => Ok(self.handle_input_key(key)),
			Focus::Grid => Ok(self.handle_grid_key(key)),
		}
	}

	fn handle_input_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.cancelled()),
			KeyCode::Enter => {
				self.submit_input();
			}
			KeyCode::Down if self.grid_available() => self.focus = Focus::Grid,
			_ => {
				self.input.input(key);
			}
		}
		None
	}

	fn handle_grid_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		let columns = self.grid_columns.max(1) as isize;
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.cancelled()),
			KeyCode::Enter if self.grid_available() => {
				self.search.select_index(self.cursor);
			}
			KeyCode::Left => self.move_cursor(-1),
			KeyCode::Right => self.move_cursor(1),
			KeyCode::Down => self.move_cursor(columns),
			KeyCode::Up if self.cursor < self.grid_columns.max(1) => self.focus = Focus::Input,
			KeyCode::Up => self.move_cursor(-columns),
			KeyCode::Char(_) | KeyCode::Backspace
				if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				self.focus = Focus::Input;
				self.input.input(key);
			}
			_ => {}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		let position = Position::new(mouse.column, mouse.row);

		if self.overlay_open() {
			if let Some(overlay) = self.hitboxes.overlay
				&& (overlay.close_button.contains(position) || !overlay.panel.contains(position))
			{
				self.search.dismiss_overlay();
			}
			return;
		}

		if let Some(chip) = self
			.hitboxes
			.suggestions
			.iter()
			.find(|chip| chip.area.contains(position))
		{
			let index = chip.index;
			self.activate_suggestion(index);
			return;
		}

		if !self.grid_available() {
			return;
		}
		if let Some(card) = self
			.hitboxes
			.cards
			.iter()
			.find(|card| card.area.contains(position))
		{
			let index = card.index;
			self.cursor = index;
			self.focus = Focus::Grid;
			self.search.select_index(index);
		}
	}

	fn activate_suggestion(&mut self, index: usize) {
		if let Some(query) = self.input.activate_suggestion(index) {
			self.focus = Focus::Input;
			self.search.submit_query(&query);
		}
	}

	fn toggle_focus(&mut self) {
		self.focus = match self.focus {
			Focus::Input if self.grid_available() => Focus::Grid,
			Focus::Input | Focus::Grid => Focus::Input,
		};
	}
}
