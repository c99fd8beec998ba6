use anyhow::Result;
use log::warn;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::outcome::SessionOutcome;
use crate::view::Status;

/// Where an "open" action should take the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenTarget {
	Source,
	Download,
}

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome())),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome())),
			KeyCode::F(2) => self.show_logs = !self.show_logs,
			_ if self.show_logs && self.log_pane.handle_key(key) => {}
			// Submitting and clearing wait for the running search.
			KeyCode::Enter if !self.is_searching() => self.submit_query(),
			KeyCode::Char('l') if ctrl => {
				if !self.is_searching() {
					self.clear();
				}
			}
			KeyCode::PageUp if self.has_results() => self.previous_page(),
			KeyCode::PageDown if self.has_results() => self.next_page(),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::Char('o') if ctrl => self.open_selected(OpenTarget::Source),
			KeyCode::Char('d') if ctrl => self.open_selected(OpenTarget::Download),
			KeyCode::Char('s') if ctrl => self.save_selected(),
			_ => {
				// The field is read-only while a search is running.
				if !self.is_searching() && self.search_input.input(key) {
					self.view.set_query(self.search_input.text().to_string());
				}
			}
		}
		Ok(None)
	}

	pub(crate) fn outcome(&self) -> SessionOutcome {
		let state = self.view.state();
		SessionOutcome {
			term: state.current_term.clone(),
			page: state.page,
			selection: self.selected_result().cloned(),
		}
	}

	fn has_results(&self) -> bool {
		!self.results().is_empty()
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			let len = self.results().len();
			if selected + 1 < len {
				self.table_state.select(Some(selected + 1));
			}
		}
	}

	fn open_selected(&mut self, target: OpenTarget) {
		let (Some(result), Some(card)) = (self.selected_result(), self.selected_card()) else {
			return;
		};
		// The card only carries display copies; the launcher gets the link as sent.
		let (url, shown) = match target {
			OpenTarget::Source => (result.source_link.clone(), card.source_link),
			OpenTarget::Download => (card.download_url.clone(), card.download_url),
		};
		if url.trim().is_empty() {
			self.notice = Some(Status::error("This result has no link."));
			return;
		}
		self.notice = Some(match (self.launcher)(&url) {
			Ok(()) => Status::neutral(format!("Opened {shown}")),
			Err(err) => {
				warn!("could not open {shown}: {err}");
				Status::error(format!("Could not open {shown}: {err}"))
			}
		});
	}

	fn save_selected(&mut self) {
		let Some(image) = self.selected_result().map(|result| result.image_url.clone()) else {
			return;
		};
		self.notice = Some(Status::neutral(format!(
			"Saving to {}...",
			self.download_dir.display()
		)));
		let dest = self.download_dir.clone();
		self.search.save(image, dest);
	}
}
