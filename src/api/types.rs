use serde::{Deserialize, Serialize};

/// One image returned by the backend for a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
	#[serde(rename = "titulo")]
	pub title: String,
	#[serde(rename = "link")]
	pub source_link: String,
	#[serde(rename = "imagem")]
	pub image_url: String,
	#[serde(rename = "fonte", default)]
	pub source_label: String,
}

impl SearchResult {
	#[must_use]
	pub fn new(
		title: impl Into<String>,
		source_link: impl Into<String>,
		image_url: impl Into<String>,
		source_label: impl Into<String>,
	) -> Self {
		Self {
			title: title.into(),
			source_link: source_link.into(),
			image_url: image_url.into(),
			source_label: source_label.into(),
		}
	}
}

/// Body of `POST /buscar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
	#[serde(rename = "termo")]
	pub term: String,
	#[serde(rename = "pagina")]
	pub page: u32,
}

impl SearchRequest {
	#[must_use]
	pub fn new(term: impl Into<String>, page: u32) -> Self {
		Self {
			term: term.into(),
			page,
		}
	}
}
