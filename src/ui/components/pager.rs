use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
	pub page: u32,
	pub has_results: bool,
	pub searching: bool,
}

/// Draw paging controls when there are results, and the key hints otherwise.
pub fn render_pager(frame: &mut Frame, area: Rect, pager: PagerState, theme: &Theme) {
	if area.height == 0 {
		return;
	}
	frame.render_widget(Paragraph::new(pager_line(pager, theme)), area);
}

fn pager_line(pager: PagerState, theme: &Theme) -> Line<'static> {
	let muted = theme.empty_style();
	let active = theme.prompt_style();
	if !pager.has_results {
		return Line::styled(
			"Enter search · Ctrl+L clear · F2 logs · Esc quit",
			muted,
		);
	}

	let previous_enabled = !pager.searching && pager.page > 1;
	let next_enabled = !pager.searching;
	let style_for = |enabled: bool| if enabled { active } else { muted };
	Line::from(vec![
		Span::styled("PgUp ◀ Previous", style_for(previous_enabled)),
		Span::styled(format!("   Page {}   ", pager.page), muted),
		Span::styled("Next ▶ PgDn", style_for(next_enabled)),
		Span::styled("   ↑/↓ select · Ctrl+L clear · F2 logs · Esc quit", muted),
	])
}
