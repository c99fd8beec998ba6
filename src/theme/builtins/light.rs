use ratatui::style::{Color, Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	status_ok: Style::new().fg(Color::Rgb(21, 128, 61)),
	status_error: Style::new()
		.fg(Color::Rgb(185, 28, 28))
		.add_modifier(Modifier::BOLD),
	status_neutral: Style::new().fg(Color::Rgb(71, 85, 105)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new("light", LIGHT);
