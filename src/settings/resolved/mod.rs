use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;
use maps4study::UiConfig;
use maps4study::api::{ApiError, Routes};
use maps4study::logging::parse_level;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub base_url: String,
	pub timeout_secs: Option<u64>,
	pub download_dir: PathBuf,
	pub title: String,
	pub initial_query: String,
	pub theme: String,
	pub log_level: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}

	pub fn routes(&self) -> Result<Routes, ApiError> {
		Routes::new(&self.base_url)
	}

	#[must_use]
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_secs.map(Duration::from_secs)
	}

	#[must_use]
	pub fn level_filter(&self) -> LevelFilter {
		parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
	}

	#[must_use]
	pub fn ui_config(&self) -> UiConfig {
		UiConfig::default().with_title(self.title.clone())
	}
}
