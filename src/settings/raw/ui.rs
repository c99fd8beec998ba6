use maps4study::UiConfig;
use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) title: String,
	pub(super) initial_query: String,
	pub(super) theme: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			title: non_blank(self.title).unwrap_or_else(|| UiConfig::default().title),
			initial_query: self
				.initial_query
				.map(|query| query.trim().to_string())
				.unwrap_or_default(),
			theme: non_blank(self.theme).unwrap_or_else(|| DEFAULT_THEME.to_string()),
		}
	}
}
