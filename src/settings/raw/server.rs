use std::path::PathBuf;

use anyhow::{Context, Result};
use maps4study::api::DEFAULT_BASE_URL;
use maps4study::app_dirs;
use serde::Deserialize;

use super::super::util::{expand_home, non_blank};
use crate::cli::CliArgs;

/// Backend connection values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ServerSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
	pub(super) download_dir: Option<PathBuf>,
}

pub(super) struct ServerResolution {
	pub(super) base_url: String,
	pub(super) timeout_secs: Option<u64>,
	pub(super) download_dir: PathBuf,
}

impl ServerSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
		if let Some(dir) = cli.download_dir.clone() {
			self.download_dir = Some(dir);
		}
	}

	pub(super) fn finalize(self) -> Result<ServerResolution> {
		let base_url = non_blank(self.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		let download_dir = match self.download_dir {
			Some(dir) => expand_home(&dir),
			None => app_dirs::default_download_dir()
				.context("no download directory configured and no default available")?,
		};

		Ok(ServerResolution {
			base_url,
			timeout_secs: self.timeout_secs,
			download_dir,
		})
	}
}
