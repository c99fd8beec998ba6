//! Single-line query field built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		Self::with_placeholder(initial, String::new())
	}

	#[must_use]
	pub fn with_placeholder(initial: impl Into<String>, placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		if !placeholder.is_empty() {
			textarea.set_placeholder_text(placeholder.clone());
		}
		textarea.move_cursor(CursorMove::End);
		Self {
			textarea,
			placeholder,
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the field. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let before = self.text().to_string();
		self.textarea.input(key);
		if self.textarea.lines().len() > 1 {
			// Keep the field on one line whatever editing shortcut was used.
			let joined = self.textarea.lines().join(" ");
			self.replace(joined);
		}
		self.text() != before
	}

	pub fn replace(&mut self, text: impl Into<String>) {
		*self = Self::with_placeholder(text, std::mem::take(&mut self.placeholder));
	}

	pub fn clear(&mut self) {
		self.replace(String::new());
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_after_the_initial_text() {
		let mut input = SearchInput::new("guerra");
		assert!(input.input(key(KeyCode::Char(' '))));
		assert!(input.input(key(KeyCode::Char('f'))));
		assert_eq!(input.text(), "guerra f");
	}

	#[test]
	fn cursor_movement_does_not_report_a_change() {
		let mut input = SearchInput::new("abc");
		assert!(!input.input(key(KeyCode::Left)));
		assert_eq!(input.text(), "abc");
	}

	#[test]
	fn newlines_are_folded_into_spaces() {
		let mut input = SearchInput::new("sistema");
		input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL));
		input.input(key(KeyCode::Char('x')));
		assert!(!input.text().contains('\n'));
		assert!(input.text().starts_with("sistema"));
	}

	#[test]
	fn clear_keeps_the_placeholder() {
		let mut input = SearchInput::with_placeholder("abc", "Type a topic");
		input.clear();
		assert_eq!(input.text(), "");
		assert_eq!(input.placeholder, "Type a topic");
	}
}
