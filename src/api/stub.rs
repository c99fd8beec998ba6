use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, SearchBackend, SearchRequest, SearchResult};

/// Scripted backend that records every request it receives.
#[derive(Default)]
pub(crate) struct StubBackend {
	requests: Mutex<Vec<SearchRequest>>,
	responses: Mutex<VecDeque<Result<Vec<SearchResult>, ApiError>>>,
	broken_images: Mutex<HashSet<String>>,
	downloads: Mutex<Vec<String>>,
	failing_downloads: bool,
}

impl StubBackend {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn respond_with(self, results: Vec<SearchResult>) -> Self {
		self.push(Ok(results));
		self
	}

	pub(crate) fn fail_with(self, status: u16, body: &str) -> Self {
		self.push(Err(ApiError::Http {
			action: "searching",
			status,
			body: body.to_string(),
		}));
		self
	}

	pub(crate) fn with_broken_image(self, image: &str) -> Self {
		self.broken_images
			.lock()
			.expect("stub lock")
			.insert(image.to_string());
		self
	}

	pub(crate) fn with_failing_downloads(mut self) -> Self {
		self.failing_downloads = true;
		self
	}

	fn push(&self, response: Result<Vec<SearchResult>, ApiError>) {
		self.responses
			.lock()
			.expect("stub lock")
			.push_back(response);
	}

	pub(crate) fn requests(&self) -> Vec<SearchRequest> {
		self.requests.lock().expect("stub lock").clone()
	}

	pub(crate) fn downloads(&self) -> Vec<String> {
		self.downloads.lock().expect("stub lock").clone()
	}
}

#[async_trait]
impl SearchBackend for StubBackend {
	async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, ApiError> {
		self.requests
			.lock()
			.expect("stub lock")
			.push(request.clone());
		self.responses
			.lock()
			.expect("stub lock")
			.pop_front()
			.unwrap_or_else(|| Ok(Vec::new()))
	}

	async fn probe_image(&self, image: &str) -> bool {
		!self
			.broken_images
			.lock()
			.expect("stub lock")
			.contains(image)
	}

	async fn download(&self, image: &str, dest_dir: &Path) -> Result<PathBuf, ApiError> {
		self.downloads
			.lock()
			.expect("stub lock")
			.push(image.to_string());
		if self.failing_downloads {
			return Err(ApiError::Io(std::io::Error::new(
				std::io::ErrorKind::PermissionDenied,
				"permission denied",
			)));
		}
		Ok(dest_dir.join("mapa_mental.jpg"))
	}
}

/// Sample result list used across tests.
pub(crate) fn sample_results(count: usize) -> Vec<SearchResult> {
	(0..count)
		.map(|index| {
			SearchResult::new(
				format!("Mapa mental {index}"),
				format!("http://source.example/{index}"),
				format!("/static/mapas_salvos/bhaskara/MAPA MENTAL SOBRE BHASKARA - {index}.jpg"),
				"Servidor Local",
			)
		})
		.collect()
}
