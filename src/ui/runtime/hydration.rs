use std::thread;
use std::time::{Duration, Instant};

use crate::ui::App;

/// How long start-up waits for the initial query's answer before showing
/// the screen anyway.
const INITIAL_RESULTS_GRACE: Duration = Duration::from_millis(150);

impl<'a> App<'a> {
	/// Submit a pre-filled query so the first frame already shows it running,
	/// and give a fast backend a moment to answer before drawing.
	pub(crate) fn hydrate_initial_results(&mut self) {
		if self.search_input.text().trim().is_empty() {
			return;
		}
		self.submit_query();

		let deadline = Instant::now() + INITIAL_RESULTS_GRACE;
		while Instant::now() < deadline {
			self.pump_backend_events();
			if !self.search.is_in_flight() {
				break;
			}
			thread::sleep(Duration::from_millis(10));
		}
	}
}
