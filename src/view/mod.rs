//! The search view as an explicit state machine.
//!
//! [`SearchView`] owns a single [`SearchState`] and changes it only through
//! the transitions below. Transitions that need the network hand back a
//! [`PendingSearch`]; whoever runs the request reports the outcome through
//! [`SearchView::complete`]. Nothing in this module performs I/O.

mod item;
mod sanitize;
mod state;

use log::debug;

pub use item::{ResultCard, Thumbnail};
pub use sanitize::display_safe;
pub use state::{SearchState, Status, StatusKind};

use crate::api::{ApiError, SearchRequest, SearchResult};

pub const EMPTY_TERM_MESSAGE: &str = "Please enter a term to search.";
pub const SEARCHING_MESSAGE: &str =
	"Querying the API and downloading images to the server (this may take a few seconds)...";

/// A request the view wants issued, tagged so its answer can be matched up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
	pub id: u64,
	pub request: SearchRequest,
}

/// What happened to a reported completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
	Applied,
	/// The answer belongs to a search that has since been superseded.
	Stale,
}

#[derive(Debug, Default)]
pub struct SearchView {
	state: SearchState,
	next_id: u64,
	latest: Option<u64>,
}

impl SearchView {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	/// Id of the search whose answer is currently awaited.
	#[must_use]
	pub fn awaiting(&self) -> Option<u64> {
		self.latest.filter(|_| self.state.is_searching)
	}

	/// Mirror the query field.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.state.query = query.into();
	}

	/// Start a search for `term` on `page`.
	///
	/// An empty term is rejected on the first page. On later pages it falls
	/// back to the last accepted term.
	pub fn submit(&mut self, term: &str, page: u32) -> Option<PendingSearch> {
		let page = page.max(1);
		let trimmed = term.trim();
		if trimmed.is_empty() && page == 1 {
			self.state.status = Status::error(EMPTY_TERM_MESSAGE);
			return None;
		}

		let term = if trimmed.is_empty() {
			self.state.current_term.clone()
		} else {
			trimmed.to_string()
		};

		self.next_id = self.next_id.wrapping_add(1);
		let id = self.next_id;
		self.latest = Some(id);

		self.state.current_term = term.clone();
		self.state.page = page;
		self.state.is_searching = true;
		self.state.status = Status::neutral(SEARCHING_MESSAGE);
		debug!("search #{id}: {term:?} page {page}");

		Some(PendingSearch {
			id,
			request: SearchRequest::new(term, page),
		})
	}

	/// Submit whatever is in the query field as a fresh first-page search.
	pub fn submit_query(&mut self) -> Option<PendingSearch> {
		let query = self.state.query.clone();
		self.submit(&query, 1)
	}

	/// Record the outcome of search `id`.
	pub fn complete(
		&mut self,
		id: u64,
		outcome: Result<Vec<SearchResult>, ApiError>,
	) -> Completion {
		if self.latest != Some(id) {
			debug!("dropping answer for superseded search #{id}");
			return Completion::Stale;
		}

		match outcome {
			Ok(results) => {
				self.state.results = results;
				self.state.status = Status::ok(format!(
					"Ok! Showing results for \"{}\".",
					self.state.current_term
				));
			}
			Err(err) => {
				self.state.results.clear();
				self.state.status = Status::error(err.status_message());
			}
		}
		self.state.is_searching = false;
		Completion::Applied
	}

	/// Back to a blank view. Any outstanding answer will be ignored.
	pub fn clear(&mut self) {
		self.state = SearchState::default();
		self.latest = None;
	}

	pub fn previous_page(&mut self) -> Option<PendingSearch> {
		if self.state.is_searching || self.state.page <= 1 {
			return None;
		}
		let term = self.state.current_term.clone();
		self.submit(&term, self.state.page - 1)
	}

	pub fn next_page(&mut self) -> Option<PendingSearch> {
		if self.state.is_searching {
			return None;
		}
		let term = self.state.current_term.clone();
		self.submit(&term, self.state.page.saturating_add(1))
	}
}
