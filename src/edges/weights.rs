use serde::{Deserialize, Serialize};

/// Per-edge solver output, index-aligned with the [`EdgeSet`](super::EdgeSet)
/// it was solved for. Empty means the graph has not been solved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightSequence(Vec<f64>);

impl WeightSequence {
	/// Wraps raw solver weights.
	pub fn new(weights: Vec<f64>) -> Self {
		Self(weights)
	}

	/// True before the graph has been solved.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of weights, which may differ from the edge count.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// The weights as sent on the wire.
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}

	/// Weights resized to `len`: missing entries read as `0.0`, extras are cut.
	pub fn aligned(&self, len: usize) -> Vec<f64> {
		let mut out: Vec<f64> = self.0.iter().copied().take(len).collect();
		out.resize(len, 0.0);
		out
	}
}

impl From<Vec<f64>> for WeightSequence {
	fn from(weights: Vec<f64>) -> Self {
		Self(weights)
	}
}

/// How an edge is drawn once a matching weight is known.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeightClass {
	/// Weight 1: the edge is fully in the matching.
	Matched,
	/// Weight 0.5: half-integral edge of a fractional matching.
	Half,
	/// Any other weight, or no weight yet.
	#[default]
	Unmatched,
}

impl WeightClass {
	/// Classifies a single solver weight.
	pub fn from_weight(w: f64) -> Self {
		if (w - 1.0).abs() < f64::EPSILON {
			Self::Matched
		} else if (w - 0.5).abs() < f64::EPSILON {
			Self::Half
		} else {
			Self::Unmatched
		}
	}

	/// Legend text.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Matched => "1",
			Self::Half => "½",
			Self::Unmatched => "0",
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(vec![], 3, vec![0.0, 0.0, 0.0])]
	#[case(vec![1.0], 2, vec![1.0, 0.0])]
	#[case(vec![1.0, 0.5, 0.0], 2, vec![1.0, 0.5])]
	fn aligned_pads_and_truncates(
		#[case] weights: Vec<f64>,
		#[case] len: usize,
		#[case] expected: Vec<f64>,
	) {
		assert_eq!(WeightSequence::new(weights).aligned(len), expected);
	}

	#[rstest]
	#[case(1.0, WeightClass::Matched)]
	#[case(0.5, WeightClass::Half)]
	#[case(0.0, WeightClass::Unmatched)]
	#[case(0.25, WeightClass::Unmatched)]
	fn classifies_weights(#[case] w: f64, #[case] expected: WeightClass) {
		assert_eq!(WeightClass::from_weight(w), expected);
	}
}
