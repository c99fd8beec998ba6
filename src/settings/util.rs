use std::env;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
pub(super) fn expand_home(path: &Path) -> PathBuf {
	let Ok(rest) = path.strip_prefix("~") else {
		return path.to_path_buf();
	};
	match env::var_os("HOME") {
		Some(home) => PathBuf::from(home).join(rest),
		None => path.to_path_buf(),
	}
}

/// Trim a text value, treating blank strings as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
