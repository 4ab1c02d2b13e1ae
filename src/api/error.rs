use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures talking to `/plot` or `/solve`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
	/// No `window` global, i.e. not running in a browser.
	#[error("no browser window available")]
	NoWindow,
	/// The request body could not be encoded.
	#[error("could not encode request: {0}")]
	Encode(String),
	/// `fetch` rejected: offline, CORS, DNS and the like.
	#[error("network error: {0}")]
	Network(String),
	/// No response within the configured timeout.
	#[error("{endpoint} did not answer within {timeout_ms} ms")]
	Timeout {
		endpoint: String,
		timeout_ms: u32,
	},
	/// The server answered with a non-2xx status.
	#[error("{endpoint} returned HTTP {status}{}", fmt_body(.body))]
	Status {
		endpoint: String,
		status: u16,
		body: String,
	},
	/// The response body was not the expected JSON shape.
	#[error("unexpected response from {endpoint}: {message}")]
	Decode {
		endpoint: String,
		message: String,
	},
}

impl ApiError {
	pub(super) fn network(err: &JsValue) -> Self {
		Self::Network(describe_js(err))
	}
}

impl From<serde_json::Error> for ApiError {
	fn from(err: serde_json::Error) -> Self {
		Self::Encode(err.to_string())
	}
}

fn fmt_body(body: &str) -> String {
	const MAX: usize = 200;
	let body = body.trim();
	if body.is_empty() {
		return String::new();
	}
	let cut: String = body.chars().take(MAX).collect();
	if cut.len() < body.len() {
		format!(": {cut}…")
	} else {
		format!(": {cut}")
	}
}

/// Best-effort readable text for a thrown JS value.
pub(super) fn describe_js(value: &JsValue) -> String {
	if let Some(s) = value.as_string() {
		return s;
	}
	if let Some(err) = value.dyn_ref::<js_sys::Error>() {
		return String::from(err.message());
	}
	format!("{value:?}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_message_includes_trimmed_body() {
		let err = ApiError::Status {
			endpoint: "/solve".into(),
			status: 500,
			body: "  boom \n".into(),
		};
		assert_eq!(err.to_string(), "/solve returned HTTP 500: boom");
	}

	#[test]
	fn status_message_without_body() {
		let err = ApiError::Status {
			endpoint: "/plot".into(),
			status: 404,
			body: String::new(),
		};
		assert_eq!(err.to_string(), "/plot returned HTTP 404");
	}

	#[test]
	fn long_bodies_are_cut() {
		let err = ApiError::Status {
			endpoint: "/plot".into(),
			status: 502,
			body: "x".repeat(500),
		};
		assert!(err.to_string().ends_with('…'));
		assert!(err.to_string().len() < 300);
	}

	#[test]
	fn timeout_message_names_endpoint() {
		let err = ApiError::Timeout {
			endpoint: "/solve".into(),
			timeout_ms: 1500,
		};
		assert_eq!(err.to_string(), "/solve did not answer within 1500 ms");
	}
}
