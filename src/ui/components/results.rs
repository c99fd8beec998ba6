//! The result table and its empty states.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::theme::Theme;
use crate::ui::UiConfig;
use crate::view::{SearchState, display_safe};

const HIGHLIGHT_SYMBOL: &str = "▶ ";

pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	state: &SearchState,
	ui: &UiConfig,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.empty_style())
		.title(Line::from(" Mind maps ").style(theme.header_style()));

	if state.results.is_empty() {
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if let Some(message) = empty_message(state, ui) {
			let vertical_offset = inner.height / 2;
			let message_area = Rect {
				y: inner.y.saturating_add(vertical_offset),
				height: inner.height.saturating_sub(vertical_offset).min(1),
				..inner
			};
			frame.render_widget(
				Paragraph::new(message)
					.alignment(Alignment::Center)
					.style(theme.empty_style()),
				message_area,
			);
		}
		return;
	}

	let header = Row::new(vec!["#", "Title", "Source"]).style(theme.header_style());
	let rows = state.results.iter().enumerate().map(|(index, result)| {
		Row::new(vec![
			Cell::from(format!("{}", index + 1)),
			Cell::from(display_safe(&result.title).into_owned()),
			Cell::from(display_safe(&result.source_label).into_owned()),
		])
	});
	let widths = [
		Constraint::Length(3),
		Constraint::Min(10),
		Constraint::Percentage(30),
	];
	let table = Table::new(rows, widths)
		.header(header)
		.block(block)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);
}

fn empty_message<'a>(state: &SearchState, ui: &'a UiConfig) -> Option<&'a str> {
	if state.shows_empty_hint() {
		Some(ui.empty_message.as_str())
	} else if state.current_term.is_empty() && !state.is_searching {
		Some("Type a topic and press Enter.")
	} else {
		None
	}
}
