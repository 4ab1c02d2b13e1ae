//! JSON payloads for the `/plot` and `/solve` endpoints.

use serde::{Deserialize, Serialize};

use super::edge::EdgeSet;
use super::weights::WeightSequence;

/// Log text shown when the solver printed nothing.
pub const NO_OUTPUT: &str = "(no output)";

/// Request body shared by both endpoints: `{"edges": [[u, v], ...], "weights": [...]}`.
///
/// `weights` is omitted from the JSON entirely when `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GraphRequest {
	/// Canonical edges, serialized as `[[u, v], ...]`.
	pub edges: EdgeSet,
	/// Solver weights to colour by, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weights: Option<WeightSequence>,
}

/// Assembles a request body. No validation happens here: an [`EdgeSet`] is
/// already canonical by construction.
pub fn build_request(edges: EdgeSet, weights: Option<WeightSequence>) -> GraphRequest {
	GraphRequest { edges, weights }
}

/// Response of `/solve`. Missing keys read as empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SolveResult {
	/// One weight per requested edge.
	#[serde(default)]
	pub weights: WeightSequence,
	/// Whatever the solver printed.
	#[serde(default)]
	pub log: String,
}

impl SolveResult {
	/// The solver log, or [`NO_OUTPUT`] when it is blank.
	pub fn display_log(&self) -> &str {
		if self.log.is_empty() {
			NO_OUTPUT
		} else {
			&self.log
		}
	}
}

/// Response of `/plot`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlotResult {
	/// Image source, typically a `data:image/png;base64,...` URI.
	pub img: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::edges::parse;

	#[test]
	fn unweighted_request_omits_weights_key() {
		let request = build_request(parse("1 2\n2 1\n3 3\n4 five"), None);
		let json = serde_json::to_string(&request).expect("request must serialize");
		assert_eq!(json, r#"{"edges":[[1,2]]}"#);
	}

	#[test]
	fn weighted_request_carries_weights() {
		let request = build_request(parse("0 1\n1 2"), Some(vec![1.0, 0.5].into()));
		let json = serde_json::to_string(&request).expect("request must serialize");
		assert_eq!(json, r#"{"edges":[[0,1],[1,2]],"weights":[1.0,0.5]}"#);
	}

	#[test]
	fn solve_result_tolerates_missing_fields() {
		let result: SolveResult = serde_json::from_str("{}").expect("empty object must decode");
		assert!(result.weights.is_empty());
		assert_eq!(result.display_log(), NO_OUTPUT);

		let result: SolveResult =
			serde_json::from_str(r#"{"weights":[1,0],"log":"done"}"#).expect("must decode");
		assert_eq!(result.weights.as_slice(), &[1.0, 0.0]);
		assert_eq!(result.display_log(), "done");
	}
}
