use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod logging;
mod server;
mod ui;

use logging::LoggingSection;
use server::ServerSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	server: ServerSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.server.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.base_url.is_some(),
				self.server.base_url.is_some(),
				"MAPS4STUDY__SERVER__BASE_URL",
				"--base-url",
				"server.base_url",
			),
			timeout: detect_source(
				cli.timeout.is_some(),
				self.server.timeout_secs.is_some(),
				"MAPS4STUDY__SERVER__TIMEOUT_SECS",
				"--timeout",
				"server.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"MAPS4STUDY__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"MAPS4STUDY__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let server = self.server.finalize()?;
		let ui = self.ui.finalize();
		let log_level = self.logging.finalize();

		let config = ResolvedConfig {
			base_url: server.base_url,
			timeout_secs: server.timeout_secs,
			download_dir: server.download_dir,
			title: ui.title,
			initial_query: ui.initial_query,
			theme: ui.theme,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
