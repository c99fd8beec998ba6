use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::components::LogPane;
use super::config::UiConfig;
use super::input::SearchInput;
use crate::api::{Routes, SearchBackend, SearchResult};
use crate::theme::Theme;
use crate::view::{ResultCard, SearchView, Status};

mod search_runtime;

pub(crate) use search_runtime::{BackendEvent, SearchRuntime};

/// Opens a URL outside the terminal.
pub(crate) type Launcher = fn(&str) -> std::io::Result<()>;

fn system_launcher(url: &str) -> std::io::Result<()> {
	open::that(url)
}

pub struct App<'a> {
	pub(crate) view: SearchView,
	pub search_input: SearchInput<'a>,
	pub table_state: TableState,
	pub(crate) routes: Routes,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(super) search: SearchRuntime,
	/// Id of the search whose results are on screen; image probes for any
	/// other search are ignored.
	pub(crate) results_id: Option<u64>,
	pub(crate) unavailable_images: HashSet<usize>,
	/// Short-lived message from an action (open, save) shown over the
	/// search status until the next transition.
	pub(crate) notice: Option<Status>,
	pub(crate) download_dir: PathBuf,
	pub(crate) show_logs: bool,
	pub(crate) log_pane: LogPane,
	pub(crate) launcher: Launcher,
}

impl<'a> App<'a> {
	/// Create a new application talking to `backend`, with links built from
	/// `routes`.
	pub fn new(backend: Arc<dyn SearchBackend>, routes: Routes) -> Result<Self> {
		let ui = UiConfig::default();
		let search_input = SearchInput::with_placeholder(String::new(), ui.placeholder.clone());
		Ok(Self {
			view: SearchView::new(),
			search_input,
			table_state: TableState::default(),
			routes,
			ui,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			search: SearchRuntime::new(backend)?,
			results_id: None,
			unavailable_images: HashSet::new(),
			notice: None,
			download_dir: PathBuf::from("downloads"),
			show_logs: false,
			log_pane: LogPane::new(),
			launcher: system_launcher,
		})
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.search_input = SearchInput::with_placeholder(
			self.search_input.text().to_string(),
			ui.placeholder.clone(),
		);
		self.ui = ui;
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_download_dir(&mut self, dir: impl Into<PathBuf>) {
		self.download_dir = dir.into();
	}

	/// Pre-fill the query field.
	pub fn set_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		self.search_input.replace(query.clone());
		self.view.set_query(query);
	}

	#[must_use]
	pub fn results(&self) -> &[SearchResult] {
		&self.view.state().results
	}

	#[must_use]
	pub fn is_searching(&self) -> bool {
		self.view.state().is_searching
	}

	#[must_use]
	pub fn selected_result(&self) -> Option<&SearchResult> {
		self.table_state
			.selected()
			.and_then(|index| self.results().get(index))
	}

	/// Card for the highlighted result.
	pub(crate) fn selected_card(&self) -> Option<ResultCard> {
		let index = self.table_state.selected()?;
		let result = self.results().get(index)?;
		let unavailable = self.unavailable_images.contains(&index);
		ResultCard::render(result, &self.routes, unavailable).ok()
	}

	/// The line shown under the query field.
	pub(crate) fn current_status(&self) -> &Status {
		self.notice
			.as_ref()
			.unwrap_or(&self.view.state().status)
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.results().len();
		if len == 0 {
			self.table_state.select(None);
			return;
		}
		match self.table_state.selected() {
			Some(index) if index < len => {}
			_ => self.table_state.select(Some(0)),
		}
	}
}
