use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::ui::UiConfig;

const ROUTES_BADGE: &str = " POST /buscar · GET /baixar_imagem ";

pub fn render_header(frame: &mut Frame, area: Rect, ui: &UiConfig, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let badge_width = (ROUTES_BADGE.width() as u16).min(area.width / 2);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Min(1), Constraint::Length(badge_width)])
		.split(area);

	let title = Line::from(vec![
		Span::styled(
			ui.title.clone(),
			theme.header_style().add_modifier(Modifier::BOLD),
		),
		Span::raw("  "),
		Span::styled(ui.tagline.clone(), theme.empty_style()),
	]);
	frame.render_widget(Paragraph::new(title), horizontal[0]);
	frame.render_widget(
		Paragraph::new(ROUTES_BADGE).style(theme.badge_style()),
		horizontal[1],
	);
}
