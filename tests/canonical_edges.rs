//! Behavioural properties of edge-list parsing and random generation.

use matching_playground::edges::{
	Edge, EdgeSet, RandomParams, Vertex, build_request, parse, random_graph,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rstest::rstest;

fn pairs(set: &EdgeSet) -> Vec<(Vertex, Vertex)> {
	set.iter().map(|e| (e.u(), e.v())).collect()
}

#[rstest]
#[case::symmetric_duplicate("1 2\n2 1", vec![(1, 2)])]
#[case::self_loop("3 3", vec![])]
#[case::non_integer("a b\n1 2", vec![(1, 2)])]
#[case::first_seen_order("5 1\n2 3\n1 5", vec![(1, 5), (2, 3)])]
fn parse_examples(#[case] text: &str, #[case] expected: Vec<(Vertex, Vertex)>) {
	assert_eq!(pairs(&parse(text)), expected);
}

#[test]
fn parse_then_request_end_to_end() {
	let edges = parse("1 2\n2 1\n3 3\n4 five");
	assert_eq!(pairs(&edges), vec![(1, 2)]);

	let json = serde_json::to_value(build_request(edges, None)).expect("request must serialize");
	assert_eq!(json, serde_json::json!({ "edges": [[1, 2]] }));
}

#[rstest]
#[case(2)]
#[case(5)]
#[case(13)]
fn full_probability_gives_complete_graph(#[case] n: usize) {
	let mut rng = SmallRng::seed_from_u64(n as u64);
	let edges = random_graph(RandomParams::new(n, 1.0), &mut rng);

	assert_eq!(edges.len(), n * (n - 1) / 2);
	for u in 0..n as Vertex {
		for v in (u + 1)..n as Vertex {
			let edge = Edge::new(u, v).expect("distinct endpoints");
			assert!(edges.contains(&edge), "missing {edge}");
		}
	}
	assert!(edges.iter().all(|e| e.u() < e.v()));
}

#[test]
fn out_of_range_inputs_are_clamped() {
	let zero = RandomParams::new(0, 0.3);
	assert_eq!(zero, RandomParams::new(2, 0.3));

	let over = RandomParams::new(4, 2.5);
	assert_eq!(over.probability(), 1.0);
	let edges = random_graph(over, &mut SmallRng::seed_from_u64(1));
	assert_eq!(edges.len(), 6);

	let tiny = random_graph(RandomParams::new(0, 2.5), &mut SmallRng::seed_from_u64(1));
	assert_eq!(pairs(&tiny), vec![(0, 1)]);
}

fn edge_line() -> impl Strategy<Value = String> {
	prop_oneof![
		4 => (-20i64..20, -20i64..20).prop_map(|(a, b)| format!("{a} {b}")),
		1 => "[a-z0-9 .\\-]{0,8}",
		1 => Just(String::new()),
	]
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(128))]

	#[test]
	fn parse_is_idempotent(lines in prop::collection::vec(edge_line(), 0..40)) {
		let text = lines.join("\n");
		let once = parse(&text);
		let twice = parse(&once.to_text());
		prop_assert_eq!(once, twice);
	}

	#[test]
	fn parsed_edges_are_canonical(lines in prop::collection::vec(edge_line(), 0..40)) {
		let edges = parse(&lines.join("\r\n"));
		let mut seen = std::collections::HashSet::new();
		for edge in &edges {
			prop_assert!(edge.u() < edge.v());
			prop_assert!(seen.insert(*edge));
		}
	}

	#[test]
	fn random_graph_is_never_empty(n in 0usize..40, p in -0.5f64..1.5, seed in any::<u64>()) {
		let params = RandomParams::new(n, p);
		let edges = random_graph(params, &mut SmallRng::seed_from_u64(seed));
		prop_assert!(!edges.is_empty());

		let max = params.vertices() as Vertex;
		for edge in &edges {
			prop_assert!(0 <= edge.u() && edge.u() < edge.v() && edge.v() < max);
		}
	}
}
