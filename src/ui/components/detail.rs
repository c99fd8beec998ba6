use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::theme::Theme;
use crate::view::ResultCard;

pub fn render_detail(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	card: Option<&ResultCard>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.empty_style())
		.title(Line::from(format!(" {title} ")).style(theme.header_style()));

	let lines = match card {
		Some(card) => card_lines(card, theme),
		None => vec![Line::styled("Nothing selected.", theme.empty_style())],
	};
	frame.render_widget(
		Paragraph::new(lines)
			.block(block)
			.wrap(Wrap { trim: false }),
		area,
	);
}

fn card_lines(card: &ResultCard, theme: &Theme) -> Vec<Line<'static>> {
	let label = |text: &'static str| Span::styled(text, theme.empty_style());
	let image_line = if card.thumbnail.is_placeholder() {
		Line::from(vec![
			label("Image  "),
			Span::styled(
				format!("{} (original unavailable)", card.thumbnail.url()),
				theme.status_style(crate::view::StatusKind::Error),
			),
		])
	} else {
		Line::from(vec![label("Image  "), Span::raw(card.thumbnail.url().to_string())])
	};

	vec![
		Line::styled(
			card.title.clone(),
			theme.highlight_style().add_modifier(Modifier::BOLD),
		),
		Line::from(vec![label("Source "), Span::raw(card.source_label.clone())]),
		Line::default(),
		Line::from(vec![label("Link   "), Span::raw(card.source_link.clone())]),
		image_line,
		Line::from(vec![label("Save   "), Span::raw(card.download_url.clone())]),
		Line::default(),
		Line::styled(
			"Ctrl+O open source · Ctrl+D open download · Ctrl+S save",
			theme.empty_style(),
		),
	]
}
