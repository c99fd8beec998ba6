use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::ui::UiConfig;
use crate::ui::input::SearchInput;

/// Argument bundle for rendering the input area
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub ui: &'a UiConfig,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Counters and busy flag drawn at the right of the query field
pub struct ProgressState<'a> {
	pub page: u32,
	pub items: usize,
	pub searching: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, the query field and the page/item counters.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		ui,
		area,
		theme,
	} = input;

	let counters = counter_line(&progress, theme);
	let counters_width = (counters.width() as u16).min(area.width / 2);
	let prompt = prompt_text(&ui.prompt);
	let prompt_width = (prompt.width() as u16).min(area.width / 3);

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(counters_width),
		])
		.split(area);

	if prompt_width > 0 {
		frame.render_widget(Paragraph::new(prompt).style(theme.prompt_style()), horizontal[0]);
	}
	search_input.render(frame, horizontal[1]);
	frame.render_widget(Paragraph::new(counters), horizontal[2]);
}

fn prompt_text(prompt: &str) -> String {
	if prompt.is_empty() {
		String::new()
	} else {
		format!("{prompt} > ")
	}
}

fn counter_line(progress: &ProgressState<'_>, theme: &Theme) -> Line<'static> {
	let muted = theme.empty_style();
	let mut line = Line::default();
	if progress.searching {
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	}
	line.spans.push(Span::styled(
		format!(" Page: {}  Items: {} ", progress.page, progress.items),
		muted,
	));
	line
}
