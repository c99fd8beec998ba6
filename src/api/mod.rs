//! HTTP contract with the Maps4Study backend.
//!
//! The backend exposes two routes: `POST /buscar` returns a page of results
//! for a term and `GET /baixar_imagem` proxies an image as a file download.
//! Everything the client knows about them lives here, behind the
//! [`SearchBackend`] trait so the UI can be driven by a stub in tests.

mod client;
mod download;
mod error;
mod routes;
#[cfg(test)]
pub(crate) mod stub;
mod types;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

pub use client::HttpBackend;
pub use download::filename_from_disposition;
pub use error::ApiError;
pub use routes::{DEFAULT_BASE_URL, Routes};
pub use types::{SearchRequest, SearchResult};

/// Operations the client needs from the backend.
#[async_trait]
pub trait SearchBackend: Send + Sync {
	/// Fetch one page of results.
	async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, ApiError>;

	/// Report whether an image reference currently loads.
	async fn probe_image(&self, image: &str) -> bool;

	/// Fetch an image through the download route and store it in `dest_dir`.
	async fn download(&self, image: &str, dest_dir: &Path) -> Result<PathBuf, ApiError>;
}
