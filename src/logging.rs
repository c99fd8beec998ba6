//! Route `log` records into the in-UI log pane.
//!
//! `tui-logger` collects records on its own background thread and the log
//! pane reads them from there, so nothing is ever written to the terminal
//! the UI is drawing on.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the logger. Later calls are no-ops.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if tui_logger::init_logger(LevelFilter::Trace).is_ok() {
			tui_logger::set_default_level(level);
		}
	});
}

/// Parse a level name as accepted in configuration (`off`, `error`, ...).
#[must_use]
pub fn parse_level(name: &str) -> Option<LevelFilter> {
	name.trim().parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_names_are_case_insensitive() {
		assert_eq!(parse_level("INFO"), Some(LevelFilter::Info));
		assert_eq!(parse_level(" debug "), Some(LevelFilter::Debug));
		assert_eq!(parse_level("off"), Some(LevelFilter::Off));
		assert_eq!(parse_level("chatty"), None);
	}
}
