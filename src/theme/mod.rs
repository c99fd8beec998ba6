//! Colour themes for the terminal UI.

mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE};
pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Canonical names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

/// Look a theme up by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
