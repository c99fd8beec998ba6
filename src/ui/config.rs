/// Text used by the UI when rendering the header, prompt and empty states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub tagline: String,
	pub prompt: String,
	pub placeholder: String,
	pub empty_message: String,
	pub detail_panel_title: String,
}

impl UiConfig {
	/// Replace the header title, keeping the remaining labels.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Maps4Study".to_string(),
			tagline: "Find mind maps for any topic and save them with one key.".to_string(),
			prompt: "Topic".to_string(),
			placeholder: "Type a topic (e.g. bhaskara, cold war, nervous system)".to_string(),
			empty_message: "No results. Try another term.".to_string(),
			detail_panel_title: "Selection".to_string(),
		}
	}
}
