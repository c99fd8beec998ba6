use thiserror::Error;

/// Failures surfaced by the backend client.
///
/// The `Display` output is shown verbatim in the status line, so every
/// variant renders as a complete sentence a user can act on.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("Error {status} while {action}.{}", body_suffix(.body))]
	Http {
		action: &'static str,
		status: u16,
		body: String,
	},
	#[error("{0}")]
	Transport(#[from] reqwest::Error),
	#[error("Unexpected response from the server: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("Invalid URL: {0}")]
	Url(#[from] url::ParseError),
	#[error("Could not save the image: {0}")]
	Io(#[from] std::io::Error),
}

impl ApiError {
	/// Message for the status line, falling back to a generic text when the
	/// underlying error has nothing to say.
	#[must_use]
	pub fn status_message(&self) -> String {
		let message = self.to_string();
		let trimmed = message.trim();
		if trimmed.is_empty() {
			"Search failed.".to_string()
		} else {
			trimmed.to_string()
		}
	}
}

fn body_suffix(body: &str) -> String {
	let body = body.trim();
	if body.is_empty() {
		String::new()
	} else {
		format!(" {body}")
	}
}
