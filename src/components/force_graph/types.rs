use crate::edges::{EdgeSet, Vertex, WeightClass, WeightSequence};

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewLink {
	pub source: Vertex,
	pub target: Vertex,
	pub class: WeightClass,
}

/// What the live preview draws: the current edge set, classified by weight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewData {
	pub vertices: Vec<Vertex>,
	pub links: Vec<PreviewLink>,
}

impl PreviewData {
	/// Missing weights read as unmatched.
	pub fn from_edges(edges: &EdgeSet, weights: &WeightSequence) -> Self {
		let links = edges
			.iter()
			.zip(weights.aligned(edges.len()))
			.map(|(edge, w)| PreviewLink {
				source: edge.u(),
				target: edge.v(),
				class: WeightClass::from_weight(w),
			})
			.collect();
		Self {
			vertices: edges.vertices(),
			links,
		}
	}
}
