use url::Url;

use super::ApiError;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const SEARCH_ROUTE: &str = "buscar";
const DOWNLOAD_ROUTE: &str = "baixar_imagem";
const PLACEHOLDER_ASSET: &str = "placeholder.png";

/// URLs derived from the backend base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
	base: Url,
}

impl Routes {
	/// Build routes from a base URL such as `http://localhost:5000`.
	pub fn new(base: &str) -> Result<Self, ApiError> {
		Ok(Self::from_url(Url::parse(base)?))
	}

	#[must_use]
	pub fn from_url(mut base: Url) -> Self {
		// `Url::join` replaces the last segment unless the path ends in a slash.
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}
		Self { base }
	}

	#[must_use]
	pub fn base(&self) -> &Url {
		&self.base
	}

	/// `POST /buscar`.
	pub fn search_url(&self) -> Result<Url, ApiError> {
		Ok(self.base.join(SEARCH_ROUTE)?)
	}

	/// `GET /baixar_imagem?url=<percent-encoded image>`.
	///
	/// The image value is passed through untouched apart from encoding; the
	/// server tells local `/static/...` paths apart from remote URLs.
	pub fn download_url(&self, image: &str) -> Result<Url, ApiError> {
		let mut url = self.base.join(DOWNLOAD_ROUTE)?;
		let query = format!("url={}", urlencoding::encode(image));
		url.set_query(Some(&query));
		Ok(url)
	}

	/// Resolve an image reference, which may be relative to the backend.
	pub fn asset_url(&self, reference: &str) -> Result<Url, ApiError> {
		Ok(self.base.join(reference)?)
	}

	pub fn placeholder_url(&self) -> Result<Url, ApiError> {
		Ok(self.base.join(PLACEHOLDER_ASSET)?)
	}
}
