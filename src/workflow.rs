use std::sync::Arc;

use anyhow::{Context, Result, bail};
use log::info;
use maps4study::api::{HttpBackend, Routes, SearchBackend};
use maps4study::view::{ResultCard, SearchView, Status, StatusKind, display_safe};
use maps4study::{SearchUi, SessionOutcome, logging};
use serde::Serialize;

use crate::settings::ResolvedConfig;

/// Coordinates building and running either the interactive screen or a
/// one-shot search from resolved configuration.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	routes: Routes,
}

/// Results of a one-shot search, ready for printing.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchReport {
	pub(crate) term: String,
	pub(crate) page: u32,
	pub(crate) status: Status,
	pub(crate) items: Vec<ReportItem>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ReportItem {
	pub(crate) title: String,
	pub(crate) source: String,
	pub(crate) link: String,
	pub(crate) image: String,
	pub(crate) download_url: String,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let routes = config
			.routes()
			.with_context(|| format!("invalid backend address {}", config.base_url))?;
		Ok(Self { config, routes })
	}

	fn backend(&self) -> Result<HttpBackend> {
		HttpBackend::new(self.routes.clone(), self.config.timeout())
			.context("failed to build the HTTP client")
	}

	/// Open the terminal UI and run it until the user quits.
	pub(crate) fn run(self) -> Result<SessionOutcome> {
		logging::initialize(self.config.level_filter());
		info!("using backend {}", self.routes.base());

		let backend: Arc<dyn SearchBackend> = Arc::new(self.backend()?);
		let mut search_ui = SearchUi::new(backend, self.routes.clone())
			.with_ui_config(self.config.ui_config())
			.with_theme_name(&self.config.theme)
			.with_download_dir(self.config.download_dir.clone());
		if !self.config.initial_query.is_empty() {
			search_ui = search_ui.with_initial_query(self.config.initial_query.clone());
		}
		search_ui.run()
	}

	/// Run one search through the same view transitions the UI uses and
	/// collect the outcome.
	pub(crate) fn search_once(&self, term: &str, page: u32) -> Result<SearchReport> {
		let mut view = SearchView::new();
		let Some(pending) = view.submit(term, page) else {
			bail!("{}", display_safe(&view.state().status.message));
		};

		let backend = self.backend()?;
		let runtime = tokio::runtime::Builder::new_current_thread()
			.enable_all()
			.build()
			.context("failed to start the async runtime")?;
		let outcome = runtime.block_on(backend.search(&pending.request));
		view.complete(pending.id, outcome);

		let state = view.state();
		if state.status.kind == StatusKind::Error {
			// The message may carry the backend's error body.
			bail!("{}", display_safe(&state.status.message));
		}

		let items = state
			.results
			.iter()
			.map(|result| -> Result<ReportItem> {
				let card = ResultCard::render(result, &self.routes, false)?;
				Ok(ReportItem {
					title: card.title,
					source: card.source_label,
					link: card.source_link,
					image: card.thumbnail.url().to_string(),
					download_url: card.download_url,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(SearchReport {
			term: state.current_term.clone(),
			page: state.page,
			status: state.status.clone(),
			items,
		})
	}
}
