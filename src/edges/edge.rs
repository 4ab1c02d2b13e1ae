use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Integer vertex identifier as typed by the user or produced by the generator.
pub type Vertex = i64;

/// An undirected edge between two distinct vertices, stored as `(min, max)`.
///
/// Serializes as a two-element JSON array `[u, v]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge(Vertex, Vertex);

impl Edge {
	/// Normalizes `(a, b)` so the smaller endpoint comes first.
	///
	/// Returns `None` for a self-loop.
	pub fn new(a: Vertex, b: Vertex) -> Option<Self> {
		match a.cmp(&b) {
			std::cmp::Ordering::Less => Some(Self(a, b)),
			std::cmp::Ordering::Greater => Some(Self(b, a)),
			std::cmp::Ordering::Equal => None,
		}
	}

	/// Smaller endpoint.
	pub fn u(&self) -> Vertex {
		self.0
	}

	/// Larger endpoint.
	pub fn v(&self) -> Vertex {
		self.1
	}
}

impl fmt::Display for Edge {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.0, self.1)
	}
}

/// Insertion-ordered edges, unique by normalized pair.
///
/// A set is assembled once by the parser or the generator and then only read;
/// the next user action replaces it with a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EdgeSet {
	edges: Vec<Edge>,
	#[serde(skip)]
	seen: HashSet<Edge>,
}

impl EdgeSet {
	/// An empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `edge` unless it is already present. Returns whether it was added.
	pub(super) fn insert(&mut self, edge: Edge) -> bool {
		if !self.seen.insert(edge) {
			return false;
		}
		self.edges.push(edge);
		true
	}

	/// Number of edges.
	pub fn len(&self) -> usize {
		self.edges.len()
	}

	/// True when no edge survived parsing or generation.
	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// Edges in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
		self.edges.iter()
	}

	/// Whether the normalized `edge` is present.
	pub fn contains(&self, edge: &Edge) -> bool {
		self.seen.contains(edge)
	}

	/// Distinct vertices in order of first appearance.
	pub fn vertices(&self) -> Vec<Vertex> {
		let mut seen = HashSet::new();
		self.edges
			.iter()
			.flat_map(|e| [e.u(), e.v()])
			.filter(|v| seen.insert(*v))
			.collect()
	}

	/// The edge-list text form: one `u v` pair per line.
	pub fn to_text(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for EdgeSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, edge) in self.edges.iter().enumerate() {
			if i > 0 {
				f.write_str("\n")?;
			}
			write!(f, "{edge}")?;
		}
		Ok(())
	}
}

impl FromIterator<Edge> for EdgeSet {
	fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
		let mut set = Self::new();
		for edge in iter {
			set.insert(edge);
		}
		set
	}
}

impl<'a> IntoIterator for &'a EdgeSet {
	type Item = &'a Edge;
	type IntoIter = std::slice::Iter<'a, Edge>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_orders_endpoints_and_rejects_loops() {
		assert_eq!(Edge::new(5, 1), Edge::new(1, 5));
		assert_eq!(Edge::new(5, 1).map(|e| (e.u(), e.v())), Some((1, 5)));
		assert_eq!(Edge::new(3, 3), None);
	}

	#[test]
	fn collecting_keeps_first_occurrence_only() {
		let set: EdgeSet = [(2, 1), (3, 4), (1, 2)]
			.into_iter()
			.filter_map(|(a, b)| Edge::new(a, b))
			.collect();
		assert_eq!(set.len(), 2);
		assert_eq!(set.to_text(), "1 2\n3 4");
	}

	#[test]
	fn vertices_follow_first_appearance() {
		let set: EdgeSet = [(4, 2), (2, 9), (0, 4)]
			.into_iter()
			.filter_map(|(a, b)| Edge::new(a, b))
			.collect();
		assert_eq!(set.vertices(), vec![2, 4, 9, 0]);
	}

	#[test]
	fn serializes_as_nested_arrays() {
		let set: EdgeSet = Edge::new(-1, 7).into_iter().collect();
		let json = serde_json::to_string(&set).expect("edge set must serialize");
		assert_eq!(json, "[[-1,7]]");
	}
}
