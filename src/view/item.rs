use super::sanitize::display_safe;
use crate::api::{ApiError, Routes, SearchResult};

/// Which picture a card points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
	Image(String),
	/// The original image failed to load.
	Placeholder(String),
}

impl Thumbnail {
	#[must_use]
	pub fn url(&self) -> &str {
		match self {
			Self::Image(url) | Self::Placeholder(url) => url,
		}
	}

	#[must_use]
	pub fn is_placeholder(&self) -> bool {
		matches!(self, Self::Placeholder(_))
	}
}

/// Display-ready form of a [`SearchResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
	pub title: String,
	pub source_label: String,
	pub source_link: String,
	pub thumbnail: Thumbnail,
	pub download_url: String,
}

impl ResultCard {
	/// Build the card for `result`. `image_unavailable` switches the
	/// thumbnail to the backend placeholder.
	pub fn render(
		result: &SearchResult,
		routes: &Routes,
		image_unavailable: bool,
	) -> Result<Self, ApiError> {
		let download_url = routes.download_url(&result.image_url)?.to_string();
		let thumbnail = if image_unavailable || result.image_url.trim().is_empty() {
			Thumbnail::Placeholder(routes.placeholder_url()?.to_string())
		} else {
			Thumbnail::Image(routes.asset_url(&result.image_url)?.to_string())
		};

		Ok(Self {
			title: display_safe(&result.title).into_owned(),
			source_label: display_safe(&result.source_label).into_owned(),
			source_link: display_safe(&result.source_link).into_owned(),
			thumbnail,
			download_url,
		})
	}
}
