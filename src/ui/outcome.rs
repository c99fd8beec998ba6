use crate::api::SearchResult;

/// What the session ended on: the last searched term, the page being viewed
/// and the highlighted result, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionOutcome {
	pub term: String,
	pub page: u32,
	pub selection: Option<SearchResult>,
}
