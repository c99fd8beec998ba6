use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn finalize(self) -> String {
		non_blank(self.level)
			.map(|level| level.to_ascii_lowercase())
			.unwrap_or_else(|| DEFAULT_LEVEL.to_string())
	}
}
