use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, header};

use super::download::{choose_filename, write_download};
use super::{ApiError, Routes, SearchBackend, SearchRequest, SearchResult};

/// [`SearchBackend`] backed by a real HTTP server.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: Client,
	routes: Routes,
}

impl HttpBackend {
	/// Create a client for the given routes. Without a timeout the transport
	/// defaults apply.
	pub fn new(routes: Routes, timeout: Option<Duration>) -> Result<Self, ApiError> {
		let mut builder = Client::builder();
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}
		let client = builder.build()?;
		Ok(Self { client, routes })
	}

	#[must_use]
	pub fn routes(&self) -> &Routes {
		&self.routes
	}
}

#[async_trait]
impl SearchBackend for HttpBackend {
	async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, ApiError> {
		let url = self.routes.search_url()?;
		debug!(
			"POST {url} termo={:?} pagina={}",
			request.term, request.page
		);

		let response = self.client.post(url).json(request).send().await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			warn!("search for {:?} failed with {status}", request.term);
			return Err(ApiError::Http {
				action: "searching",
				status: status.as_u16(),
				body,
			});
		}

		let body = response.text().await?;
		let results: Vec<SearchResult> = serde_json::from_str(&body)?;
		debug!(
			"received {} results for {:?} page {}",
			results.len(),
			request.term,
			request.page
		);
		Ok(results)
	}

	async fn probe_image(&self, image: &str) -> bool {
		let url = match self.routes.asset_url(image) {
			Ok(url) => url,
			Err(err) => {
				debug!("cannot resolve image {image:?}: {err}");
				return false;
			}
		};

		match self.client.head(url.clone()).send().await {
			Ok(response) => response.status().is_success(),
			Err(err) => {
				debug!("image probe for {url} failed: {err}");
				false
			}
		}
	}

	async fn download(&self, image: &str, dest_dir: &Path) -> Result<PathBuf, ApiError> {
		let url = self.routes.download_url(image)?;
		debug!("GET {url}");

		let response = self.client.get(url).send().await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(ApiError::Http {
				action: "downloading",
				status: status.as_u16(),
				body,
			});
		}

		let disposition = response
			.headers()
			.get(header::CONTENT_DISPOSITION)
			.and_then(|value| value.to_str().ok())
			.map(str::to_owned);
		let bytes = response.bytes().await?;
		let filename = choose_filename(disposition.as_deref(), image);
		write_download(dest_dir, &filename, &bytes).await
	}
}

#[cfg(test)]
mod tests {
	use mockito::Matcher;
	use serde_json::json;
	use tempfile::tempdir;

	use super::*;

	async fn backend_for(server: &mockito::ServerGuard) -> HttpBackend {
		let routes = Routes::new(&server.url()).expect("routes");
		HttpBackend::new(routes, Some(Duration::from_secs(5))).expect("client")
	}

	#[tokio::test]
	async fn search_posts_term_and_page() {
		let mut server = mockito::Server::new_async().await;
		let mock = server
			.mock("POST", "/buscar")
			.match_body(Matcher::Json(json!({ "termo": "bhaskara", "pagina": 1 })))
			.with_status(200)
			.with_header("content-type", "application/json")
			.with_body(
				json!([{
					"titulo": "X",
					"link": "http://a",
					"imagem": "http://b/i.png",
					"fonte": "Site"
				}])
				.to_string(),
			)
			.create_async()
			.await;

		let backend = backend_for(&server).await;
		let results = backend
			.search(&SearchRequest::new("bhaskara", 1))
			.await
			.expect("search");

		mock.assert_async().await;
		assert_eq!(
			results,
			vec![SearchResult::new("X", "http://a", "http://b/i.png", "Site")]
		);
	}

	#[tokio::test]
	async fn non_success_status_carries_the_body() {
		let mut server = mockito::Server::new_async().await;
		server
			.mock("POST", "/buscar")
			.with_status(400)
			.with_body("{\"erro\": \"Campo 'termo' é obrigatório.\"}")
			.create_async()
			.await;

		let backend = backend_for(&server).await;
		let err = backend
			.search(&SearchRequest::new("", 2))
			.await
			.expect_err("bad request");

		assert!(matches!(err, ApiError::Http { status: 400, .. }));
		let message = err.status_message();
		assert!(message.starts_with("Error 400 while searching."));
		assert!(message.contains("obrigatório"));
	}

	#[tokio::test]
	async fn malformed_payload_is_a_decode_error() {
		let mut server = mockito::Server::new_async().await;
		server
			.mock("POST", "/buscar")
			.with_status(200)
			.with_body("<html>not json</html>")
			.create_async()
			.await;

		let backend = backend_for(&server).await;
		let err = backend
			.search(&SearchRequest::new("x", 1))
			.await
			.expect_err("decode");
		assert!(matches!(err, ApiError::Decode(_)));
	}

	#[tokio::test]
	async fn probe_reports_missing_images() {
		let mut server = mockito::Server::new_async().await;
		server
			.mock("HEAD", "/static/ok.jpg")
			.with_status(200)
			.create_async()
			.await;
		server
			.mock("HEAD", "/static/missing.jpg")
			.with_status(404)
			.create_async()
			.await;

		let backend = backend_for(&server).await;
		assert!(backend.probe_image("/static/ok.jpg").await);
		assert!(!backend.probe_image("/static/missing.jpg").await);
	}

	#[tokio::test]
	async fn download_saves_under_the_announced_name() {
		let mut server = mockito::Server::new_async().await;
		let mock = server
			.mock("GET", "/baixar_imagem")
			.match_query(Matcher::UrlEncoded("url".into(), "http://b/i.png".into()))
			.with_status(200)
			.with_header("content-disposition", "attachment; filename=mapa_mental.jpg")
			.with_body(b"jpeg-bytes")
			.create_async()
			.await;

		let dir = tempdir().expect("tempdir");
		let backend = backend_for(&server).await;
		let path = backend
			.download("http://b/i.png", dir.path())
			.await
			.expect("download");

		mock.assert_async().await;
		assert_eq!(path, dir.path().join("mapa_mental.jpg"));
		assert_eq!(std::fs::read(&path).expect("read"), b"jpeg-bytes");
	}

	#[tokio::test]
	async fn failed_download_reports_status() {
		let mut server = mockito::Server::new_async().await;
		server
			.mock("GET", "/baixar_imagem")
			.match_query(Matcher::Any)
			.with_status(404)
			.with_body("Arquivo local não encontrado")
			.create_async()
			.await;

		let dir = tempdir().expect("tempdir");
		let backend = backend_for(&server).await;
		let err = backend
			.download("/static/gone.jpg", dir.path())
			.await
			.expect_err("missing");
		assert_eq!(
			err.status_message(),
			"Error 404 while downloading. Arquivo local não encontrado"
		);
	}
}
