use std::borrow::Cow;

/// Make backend-supplied text safe to draw in a terminal.
///
/// Control characters (including `ESC`, which starts terminal escape
/// sequences) are dropped, and runs of whitespace collapse to one space so
/// a title cannot break the layout across lines.
#[must_use]
pub fn display_safe(text: &str) -> Cow<'_, str> {
	let clean = text
		.chars()
		.all(|c| c == ' ' || !(c.is_control() || c.is_whitespace()));
	if clean && !text.contains("  ") {
		return Cow::Borrowed(text.trim());
	}

	let mut out = String::with_capacity(text.len());
	let mut pending_space = false;
	for c in text.chars() {
		if c.is_whitespace() {
			pending_space = !out.is_empty();
			continue;
		}
		if c.is_control() {
			continue;
		}
		if pending_space {
			out.push(' ');
			pending_space = false;
		}
		out.push(c);
	}
	Cow::Owned(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_text_is_borrowed() {
		assert!(matches!(display_safe("Sistema nervoso"), Cow::Borrowed(_)));
	}

	#[test]
	fn escape_sequences_are_removed() {
		let hostile = "\u{1b}]0;pwned\u{7}Mapa\u{1b}[2J mental";
		assert_eq!(display_safe(hostile), "]0;pwnedMapa[2J mental");
		assert!(!display_safe(hostile).contains('\u{1b}'));
	}

	#[test]
	fn whitespace_is_collapsed() {
		assert_eq!(display_safe("  Guerra\n\tfria  "), "Guerra fria");
	}
}
