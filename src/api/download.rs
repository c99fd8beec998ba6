use std::path::{Path, PathBuf};

use log::info;

use super::ApiError;

/// Name the backend uses for proxied remote images.
const FALLBACK_FILENAME: &str = "mapa_mental.jpg";

/// Extract the file name announced in a `Content-Disposition` header.
///
/// Both the plain `filename=` and the RFC 5987 `filename*=` forms are
/// understood; the extended form wins when both are present.
#[must_use]
pub fn filename_from_disposition(header: &str) -> Option<String> {
	let mut plain = None;
	let mut extended = None;

	for part in header.split(';').map(str::trim) {
		let Some((key, value)) = part.split_once('=') else {
			continue;
		};
		match key.trim().to_ascii_lowercase().as_str() {
			"filename" => plain = Some(value.trim().trim_matches('"').to_string()),
			"filename*" => {
				let encoded = value
					.trim()
					.split_once("''")
					.map(|(_, rest)| rest)
					.unwrap_or(value);
				extended = urlencoding::decode(encoded)
					.ok()
					.map(|decoded| decoded.into_owned());
			}
			_ => {}
		}
	}

	extended
		.or(plain)
		.map(|name| sanitize_filename(&name))
		.filter(|name| !name.is_empty())
}

/// Decide on a local file name for a downloaded image.
pub(super) fn choose_filename(disposition: Option<&str>, image: &str) -> String {
	disposition
		.and_then(filename_from_disposition)
		.or_else(|| filename_from_reference(image))
		.unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}

pub(super) async fn write_download(
	dest_dir: &Path,
	filename: &str,
	bytes: &[u8],
) -> Result<PathBuf, ApiError> {
	tokio::fs::create_dir_all(dest_dir).await?;
	let path = dest_dir.join(filename);
	tokio::fs::write(&path, bytes).await?;
	info!("saved {} bytes to {}", bytes.len(), path.display());
	Ok(path)
}

fn filename_from_reference(image: &str) -> Option<String> {
	let path = image.split(['?', '#']).next().unwrap_or(image);
	let last = path.rsplit('/').next()?;
	let decoded = urlencoding::decode(last).ok()?;
	let name = sanitize_filename(&decoded);
	(!name.is_empty() && name.contains('.')).then_some(name)
}

/// Keep only the final path component and drop characters that are unsafe
/// on common filesystems.
fn sanitize_filename(name: &str) -> String {
	let last = name.rsplit(['/', '\\']).next().unwrap_or(name);
	last.chars()
		.filter(|c| !c.is_control() && !matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|'))
		.collect::<String>()
		.trim()
		.trim_start_matches('.')
		.to_string()
}
