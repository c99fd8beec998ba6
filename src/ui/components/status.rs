use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;
use crate::view::{Status, display_safe};

/// Draw the inline status message, coloured by its kind.
pub fn render_status(frame: &mut Frame, area: Rect, status: &Status, theme: &Theme) {
	if status.is_empty() || area.height == 0 {
		return;
	}
	let message = display_safe(&status.message).into_owned();
	frame.render_widget(
		Paragraph::new(message).style(theme.status_style(status.kind)),
		area,
	);
}
