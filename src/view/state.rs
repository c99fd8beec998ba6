use serde::Serialize;

use crate::api::SearchResult;

/// Colour/semantics of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
	Ok,
	Error,
	#[default]
	Neutral,
}

/// Inline message describing the last thing that happened.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Status {
	pub message: String,
	pub kind: StatusKind,
}

impl Status {
	pub fn ok(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			kind: StatusKind::Ok,
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			kind: StatusKind::Error,
		}
	}

	pub fn neutral(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			kind: StatusKind::Neutral,
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.message.is_empty()
	}
}

/// Everything the search view displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
	/// Contents of the query field.
	pub query: String,
	/// Last term accepted by a search; pagination continues from it.
	pub current_term: String,
	pub page: u32,
	pub results: Vec<SearchResult>,
	pub is_searching: bool,
	pub status: Status,
}

impl Default for SearchState {
	fn default() -> Self {
		Self {
			query: String::new(),
			current_term: String::new(),
			page: 1,
			results: Vec::new(),
			is_searching: false,
			status: Status::default(),
		}
	}
}

impl SearchState {
	/// Whether the "no results" hint applies: a term was searched, nothing
	/// came back and nothing is pending.
	#[must_use]
	pub fn shows_empty_hint(&self) -> bool {
		self.results.is_empty() && !self.is_searching && !self.current_term.is_empty()
	}
}
