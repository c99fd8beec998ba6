use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::theme::Theme;

/// State of the F2 log viewer.
pub struct LogPane {
	widget: TuiWidgetState,
}

impl LogPane {
	pub fn new() -> Self {
		let widget = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
		Self { widget }
	}

	pub fn widget(&self) -> &TuiWidgetState {
		&self.widget
	}

	/// Forward a key to the viewer. Returns `true` when it was consumed.
	pub fn handle_key(&self, key: KeyEvent) -> bool {
		if key.kind != KeyEventKind::Press {
			return false;
		}

		let event = match key.code {
			KeyCode::Char(' ') => Some(TuiWidgetEvent::SpaceKey),
			KeyCode::Char('h') | KeyCode::Char('H') => Some(TuiWidgetEvent::HideKey),
			KeyCode::Char('f') | KeyCode::Char('F') => Some(TuiWidgetEvent::FocusKey),
			KeyCode::Char('+') => Some(TuiWidgetEvent::PlusKey),
			KeyCode::Char('-') => Some(TuiWidgetEvent::MinusKey),
			KeyCode::Up => Some(TuiWidgetEvent::UpKey),
			KeyCode::Down => Some(TuiWidgetEvent::DownKey),
			KeyCode::Left => Some(TuiWidgetEvent::LeftKey),
			KeyCode::Right => Some(TuiWidgetEvent::RightKey),
			KeyCode::PageUp => Some(TuiWidgetEvent::PrevPageKey),
			KeyCode::PageDown => Some(TuiWidgetEvent::NextPageKey),
			_ => None,
		};

		if let Some(event) = event {
			self.widget.transition(event);
			return true;
		}

		false
	}
}

impl Default for LogPane {
	fn default() -> Self {
		Self::new()
	}
}

pub fn render_logs(frame: &mut Frame, area: Rect, pane: &LogPane, theme: &Theme) {
	frame.render_widget(Clear, area);
	if area.width == 0 || area.height == 0 {
		return;
	}

	let widget = TuiLoggerSmartWidget::default()
		.title_log("Runtime log")
		.title_target("Targets")
		.highlight_style(theme.highlight_style())
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.state(pane.widget());
	frame.render_widget(widget, area);
}
