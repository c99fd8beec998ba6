use std::sync::mpsc::TryRecvError;

use log::info;

use super::App;
use super::state::BackendEvent;
use crate::view::{Completion, PendingSearch, Status};

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

impl<'a> App<'a> {
	/// Submit the query field as a first-page search.
	pub(crate) fn submit_query(&mut self) {
		self.view.set_query(self.search_input.text().to_string());
		let pending = self.view.submit_query();
		self.dispatch(pending);
	}

	pub(crate) fn previous_page(&mut self) {
		let pending = self.view.previous_page();
		self.dispatch(pending);
	}

	pub(crate) fn next_page(&mut self) {
		let pending = self.view.next_page();
		self.dispatch(pending);
	}

	/// Reset the view and the query field.
	pub(crate) fn clear(&mut self) {
		self.view.clear();
		self.search_input.clear();
		self.notice = None;
		self.results_id = None;
		self.unavailable_images.clear();
		self.table_state.select(None);
	}

	fn dispatch(&mut self, pending: Option<PendingSearch>) {
		self.notice = None;
		if let Some(pending) = pending {
			self.search.issue_search(pending);
		}
	}

	/// Drain any backend events waiting on the receiver channel.
	pub(crate) fn pump_backend_events(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(event) => self.handle_backend_event(event),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_backend_event(&mut self, event: BackendEvent) {
		match event {
			BackendEvent::SearchCompleted { id, outcome } => {
				if self.view.complete(id, outcome) == Completion::Applied {
					self.show_results(id);
				}
			}
			BackendEvent::ImageProbed {
				search_id,
				index,
				available,
			} => {
				if !available && self.results_id == Some(search_id) {
					self.unavailable_images.insert(index);
				}
			}
			BackendEvent::Saved { outcome } => {
				self.notice = Some(match outcome {
					Ok(path) => {
						info!("saved {}", path.display());
						Status::ok(format!("Saved to {}", path.display()))
					}
					Err(err) => Status::error(err.status_message()),
				});
			}
		}
	}

	fn show_results(&mut self, id: u64) {
		self.results_id = Some(id);
		self.unavailable_images.clear();
		self.table_state.select(None);
		self.ensure_selection();

		let images: Vec<String> = self
			.results()
			.iter()
			.map(|result| result.image_url.clone())
			.collect();
		if !images.is_empty() {
			self.search.probe_images(id, images);
		}
	}
}
