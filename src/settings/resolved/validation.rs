use maps4study::logging::parse_level;
use maps4study::theme;
use url::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	validate_base_url(&config.base_url, sources)?;

	if let Some(timeout) = config.timeout_secs
		&& timeout == 0
	{
		return Err(ConfigError::invalid(
			"server.timeout_secs",
			timeout.to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if parse_level(&config.log_level).is_none() {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			"expected one of off, error, warn, info, debug, trace",
		));
	}

	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; available: {}", theme::names().join(", ")),
		));
	}

	Ok(())
}

fn validate_base_url(value: &str, sources: &ConfigSources) -> Result<(), ConfigError> {
	let invalid = |reason: String| {
		ConfigError::invalid(
			"server.base_url",
			value,
			sources.source_for_base_url(),
			reason,
		)
	};

	let url = Url::parse(value).map_err(|err| invalid(format!("not an absolute URL ({err})")))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid(format!(
			"scheme must be http or https, not {}",
			url.scheme()
		)));
	}
	if url.host_str().is_none_or(str::is_empty) {
		return Err(invalid("missing host".to_string()));
	}
	Ok(())
}
