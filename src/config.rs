//! Runtime settings for the playground.
//!
//! Defaults suit the bundled Flask backend served from the same origin. Any
//! field can be overridden from the page URL, e.g.
//! `/?api=http://localhost:5000&timeout_ms=5000&n=10&p=0.5`.

use std::time::Duration;

use crate::edges::{DEFAULT_PROBABILITY, DEFAULT_VERTICES, MIN_VERTICES};

/// Largest vertex count the random generator accepts from the form.
pub const DEFAULT_MAX_VERTICES: usize = 200;
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	/// Prefix for `/plot` and `/solve`; empty means same origin.
	pub api_base: String,
	pub request_timeout_ms: u32,
	pub max_vertices: usize,
	/// Initial contents of the vertex-count field.
	pub default_vertices: usize,
	/// Initial contents of the edge-probability field.
	pub default_probability: f64,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			api_base: String::new(),
			request_timeout_ms: DEFAULT_TIMEOUT_MS,
			max_vertices: DEFAULT_MAX_VERTICES,
			default_vertices: DEFAULT_VERTICES,
			default_probability: DEFAULT_PROBABILITY,
		}
	}
}

impl AppConfig {
	/// Builds a config from defaults plus whatever `lookup` yields for the
	/// keys `api`, `timeout_ms`, `max_vertices`, `n` and `p`.
	///
	/// Values that fail to parse are ignored with a warning.
	pub fn from_params(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let mut config = Self::default();

		if let Some(api) = lookup("api") {
			config.api_base = api.trim().trim_end_matches('/').to_owned();
		}
		if let Some(ms) = parse_param::<u32>(&lookup, "timeout_ms") {
			config.request_timeout_ms = ms.max(1);
		}
		if let Some(max) = parse_param::<usize>(&lookup, "max_vertices") {
			config.max_vertices = max.max(MIN_VERTICES);
		}
		if let Some(n) = parse_param::<usize>(&lookup, "n") {
			config.default_vertices = n.clamp(MIN_VERTICES, config.max_vertices);
		}
		if let Some(p) = parse_param::<f64>(&lookup, "p").filter(|p| !p.is_nan()) {
			config.default_probability = p.clamp(0.0, 1.0);
		}

		config
	}

	pub fn request_timeout(&self) -> Duration {
		Duration::from_millis(u64::from(self.request_timeout_ms))
	}

	/// Absolute or origin-relative URL of an endpoint such as `"plot"`.
	pub fn endpoint(&self, name: &str) -> String {
		format!("{}/{}", self.api_base.trim_end_matches('/'), name)
	}
}

fn parse_param<T: std::str::FromStr>(
	lookup: &impl Fn(&str) -> Option<String>,
	key: &str,
) -> Option<T> {
	let raw = lookup(key)?;
	match raw.trim().parse::<T>() {
		Ok(value) => Some(value),
		Err(_) => {
			log::warn!("ignoring query parameter {key}={raw:?}: not a valid value");
			None
		}
	}
}
