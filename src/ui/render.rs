use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
};

use super::App;
use super::components::{
	InputContext, PagerState, ProgressState, render_detail, render_header, render_input,
	render_logs, render_pager, render_results, render_status,
};

/// Below this width the detail pane is dropped and the table takes the row.
const MIN_SPLIT_WIDTH: u16 = 70;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		render_header(frame, layout[0], &self.ui, &self.theme);

		let state = self.view.state();
		let input_ctx = InputContext {
			search_input: &self.search_input,
			ui: &self.ui,
			area: layout[1],
			theme: &self.theme,
		};
		let progress_state = ProgressState {
			page: state.page,
			items: state.results.len(),
			searching: state.is_searching,
			throbber_state: &self.throbber_state,
		};
		render_input(frame, input_ctx, progress_state);
		render_status(frame, layout[2], self.current_status(), &self.theme);

		let pager = PagerState {
			page: state.page,
			has_results: !state.results.is_empty(),
			searching: state.is_searching,
		};

		if self.show_logs {
			render_logs(frame, layout[3], &self.log_pane, &self.theme);
		} else {
			self.render_body(frame, layout[3]);
		}
		render_pager(frame, layout[4], pager, &self.theme);
	}

	fn render_body(&mut self, frame: &mut Frame, area: Rect) {
		let has_results = !self.results().is_empty();
		if !has_results || area.width < MIN_SPLIT_WIDTH {
			render_results(
				frame,
				area,
				&mut self.table_state,
				self.view.state(),
				&self.ui,
				&self.theme,
			);
			return;
		}

		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
			.split(area);
		let card = self.selected_card();
		render_results(
			frame,
			columns[0],
			&mut self.table_state,
			self.view.state(),
			&self.ui,
			&self.theme,
		);
		render_detail(
			frame,
			columns[1],
			&self.ui.detail_panel_title,
			card.as_ref(),
			&self.theme,
		);
	}
}
