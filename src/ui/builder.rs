use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use super::{App, SessionOutcome, UiConfig};
use crate::api::{Routes, SearchBackend};
use crate::theme::Theme;

/// A small builder for configuring the interactive search screen before
/// handing control to the terminal.
pub struct SearchUi {
	backend: Arc<dyn SearchBackend>,
	routes: Routes,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
	initial_query: Option<String>,
	download_dir: Option<PathBuf>,
}

impl SearchUi {
	pub fn new(backend: Arc<dyn SearchBackend>, routes: Routes) -> Self {
		Self {
			backend,
			routes,
			ui_config: None,
			theme: None,
			initial_query: None,
			download_dir: None,
		}
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	/// Start with `query` in the field; it is searched as soon as the screen
	/// opens.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = crate::theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.download_dir = Some(dir.into());
		self
	}

	/// Assemble the [`App`] without starting the terminal.
	pub fn build<'a>(self) -> Result<App<'a>> {
		let mut app = App::new(self.backend, self.routes)?;
		if let Some(config) = self.ui_config {
			app.set_ui_config(config);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(dir) = self.download_dir {
			app.set_download_dir(dir);
		}
		if let Some(query) = self.initial_query {
			app.set_query(query);
		}
		Ok(app)
	}

	/// Run the interactive screen until the user quits.
	pub fn run(self) -> Result<SessionOutcome> {
		let mut app = self.build()?;
		app.run()
	}
}
