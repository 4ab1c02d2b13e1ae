//! Random example graphs, G(n, p) style.

use rand::Rng;

use super::edge::{Edge, EdgeSet, Vertex};

/// Smallest graph the generator produces.
pub const MIN_VERTICES: usize = 2;
/// Vertex count used when the field is empty or unreadable.
pub const DEFAULT_VERTICES: usize = 6;
/// Edge probability used when the field is empty or unreadable.
pub const DEFAULT_PROBABILITY: f64 = 0.3;

/// Clamped generator inputs: at least two vertices, probability within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomParams {
	vertices: usize,
	probability: f64,
}

impl RandomParams {
	/// Clamps both values; a NaN probability becomes [`DEFAULT_PROBABILITY`].
	pub fn new(vertices: usize, probability: f64) -> Self {
		let probability = if probability.is_nan() {
			DEFAULT_PROBABILITY
		} else {
			probability.clamp(0.0, 1.0)
		};
		Self {
			vertices: vertices.max(MIN_VERTICES),
			probability,
		}
	}

	/// Reads the two form fields. Unparsable text falls back to the defaults;
	/// the vertex count is additionally capped at `max_vertices`.
	pub fn from_inputs(vertices: &str, probability: &str, max_vertices: usize) -> Self {
		let vertices = vertices.trim();
		let vertices = match vertices.parse::<i64>() {
			Ok(n) => usize::try_from(n).unwrap_or(0),
			// `as` truncates toward zero and saturates negatives to 0
			Err(_) => match vertices.parse::<f64>() {
				Ok(x) if x.is_finite() => x as usize,
				_ => DEFAULT_VERTICES,
			},
		};
		let probability = probability
			.trim()
			.parse::<f64>()
			.ok()
			.filter(|p| !p.is_nan())
			.unwrap_or(DEFAULT_PROBABILITY);
		Self::new(vertices.min(max_vertices.max(MIN_VERTICES)), probability)
	}

	/// Vertices are numbered `0..vertices`.
	pub fn vertices(&self) -> usize {
		self.vertices
	}

	/// Chance that any one pair is joined.
	pub fn probability(&self) -> f64 {
		self.probability
	}
}


/// Samples every pair `u < v` independently with the configured probability.
///
/// Never returns an empty set: if no pair was sampled, a random spanning tree
/// with exactly `n - 1` edges is built instead, attaching each vertex `v` to a
/// uniformly chosen earlier vertex.
pub fn random_graph<R: Rng + ?Sized>(params: RandomParams, rng: &mut R) -> EdgeSet {
	let n = params.vertices();
	let p = params.probability();

	let mut edges = EdgeSet::new();
	for u in 0..n {
		for v in (u + 1)..n {
			if rng.gen_bool(p) {
				push(&mut edges, u, v);
			}
		}
	}

	if edges.is_empty() {
		for v in 1..n {
			let u = rng.gen_range(0..v);
			push(&mut edges, u, v);
		}
	}

	edges
}

fn push(edges: &mut EdgeSet, u: usize, v: usize) {
	if let Some(edge) = Edge::new(u as Vertex, v as Vertex) {
		edges.insert(edge);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("8", "0.5", (8, 0.5))]
	#[case("", "", (DEFAULT_VERTICES, DEFAULT_PROBABILITY))]
	#[case("six", "lots", (DEFAULT_VERTICES, DEFAULT_PROBABILITY))]
	#[case("0", "2.5", (2, 1.0))]
	#[case("-4", "-0.2", (2, 0.0))]
	#[case(" 12 ", " 0.25 ", (12, 0.25))]
	#[case("5000", "NaN", (200, DEFAULT_PROBABILITY))]
	#[case("10.5", "0.3", (10, 0.3))]
	#[case("-3.5", "1", (2, 1.0))]
	#[case("inf", "0.3", (DEFAULT_VERTICES, 0.3))]
	fn inputs_are_defaulted_and_clamped(
		#[case] n: &str,
		#[case] p: &str,
		#[case] expected: (usize, f64),
	) {
		let params = RandomParams::from_inputs(n, p, 200);
		assert_eq!((params.vertices(), params.probability()), expected);
	}

	#[test]
	fn zero_probability_falls_back_to_spanning_tree() {
		let mut rng = SmallRng::seed_from_u64(7);
		let edges = random_graph(RandomParams::new(10, 0.0), &mut rng);
		assert_eq!(edges.len(), 9);
		for (edge, v) in edges.iter().zip(1..) {
			assert_eq!(edge.v(), v);
			assert!(edge.u() < v);
		}
	}

	#[test]
	fn same_seed_gives_same_graph() {
		let params = RandomParams::new(12, 0.4);
		let a = random_graph(params, &mut SmallRng::seed_from_u64(42));
		let b = random_graph(params, &mut SmallRng::seed_from_u64(42));
		assert_eq!(a, b);
	}
}
