//! Lenient edge-list parser.
//!
//! Lines that cannot be read as an edge are dropped rather than rejected, so a
//! half-typed list still previews. [`parse_with_report`] keeps a record of what
//! was dropped so the UI can point at the offending lines.

use std::fmt;

use super::edge::{Edge, EdgeSet, Vertex};

/// Why a non-blank input line did not contribute an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
	/// Fewer than two tokens on the line.
	MissingToken,
	/// One of the first two tokens is not an integer.
	NotAnInteger,
	/// Both endpoints are the same vertex.
	SelfLoop,
	/// The normalized pair already appeared on an earlier line.
	Duplicate,
}

impl fmt::Display for DropReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::MissingToken => "expected two vertices",
			Self::NotAnInteger => "not an integer",
			Self::SelfLoop => "self-loop",
			Self::Duplicate => "duplicate edge",
		})
	}
}

/// A skipped input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedLine {
	/// 1-based line number in the input text.
	pub line: usize,
	/// The trimmed line content.
	pub text: String,
	/// What was wrong with it.
	pub reason: DropReason,
}

/// Result of [`parse_with_report`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
	/// Same set [`parse`] returns.
	pub edges: EdgeSet,
	/// Non-blank lines that did not contribute an edge, in input order.
	pub dropped: Vec<DroppedLine>,
}

impl ParseReport {
	/// Number of dropped lines that were actually malformed (duplicates excluded).
	pub fn malformed_count(&self) -> usize {
		self.dropped
			.iter()
			.filter(|d| d.reason != DropReason::Duplicate)
			.count()
	}
}

/// Parses an edge list into a canonical [`EdgeSet`], silently skipping bad lines.
pub fn parse(text: &str) -> EdgeSet {
	parse_with_report(text).edges
}

/// Like [`parse`], but also lists every non-blank line that was skipped.
pub fn parse_with_report(text: &str) -> ParseReport {
	let mut report = ParseReport::default();

	for (idx, raw) in text.lines().enumerate() {
		let line = raw.trim();
		if line.is_empty() {
			continue;
		}
		let outcome = parse_line(line).and_then(|edge| {
			if report.edges.insert(edge) {
				Ok(())
			} else {
				Err(DropReason::Duplicate)
			}
		});
		if let Err(reason) = outcome {
			report.dropped.push(DroppedLine {
				line: idx + 1,
				text: line.to_owned(),
				reason,
			});
		}
	}

	report
}

fn parse_line(line: &str) -> Result<Edge, DropReason> {
	let mut tokens = line.split_whitespace();
	let (Some(a), Some(b)) = (tokens.next(), tokens.next()) else {
		return Err(DropReason::MissingToken);
	};
	let (Some(a), Some(b)) = (vertex(a), vertex(b)) else {
		return Err(DropReason::NotAnInteger);
	};
	Edge::new(a, b).ok_or(DropReason::SelfLoop)
}

/// An integer token, or a decimal one with no fractional part (`1.0`, `1e1`).
fn vertex(token: &str) -> Option<Vertex> {
	token.parse::<Vertex>().ok().or_else(|| {
		let x = token.parse::<f64>().ok()?;
		let in_range = x >= Vertex::MIN as f64 && x < Vertex::MAX as f64;
		(x.is_finite() && x.fract() == 0.0 && in_range).then_some(x as Vertex)
	})
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn pairs(set: &EdgeSet) -> Vec<(Vertex, Vertex)> {
		set.iter().map(|e| (e.u(), e.v())).collect()
	}

	#[rstest]
	#[case("1 2\n2 1", vec![(1, 2)])]
	#[case("3 3", vec![])]
	#[case("a b\n1 2", vec![(1, 2)])]
	#[case("5 1\n2 3\n1 5", vec![(1, 5), (2, 3)])]
	#[case("  7\t\t-2  \r\n\r\n", vec![(-2, 7)])]
	#[case("1 2 99", vec![(1, 2)])]
	#[case("1.5 2\n4", vec![])]
	#[case("1.0 2\n+3 4\n1e1 3", vec![(1, 2), (3, 4), (3, 10)])]
	#[case("inf 1\nNaN 2\n1e30 3", vec![])]
	fn parses_leniently(#[case] text: &str, #[case] expected: Vec<(Vertex, Vertex)>) {
		assert_eq!(pairs(&parse(text)), expected);
	}

	#[test]
	fn report_lists_dropped_lines_with_reasons() {
		let report = parse_with_report("1 2\n\n2 1\n3 3\n4 five\n6");
		assert_eq!(pairs(&report.edges), vec![(1, 2)]);
		let dropped: Vec<_> = report.dropped.iter().map(|d| (d.line, d.reason)).collect();
		assert_eq!(
			dropped,
			vec![
				(3, DropReason::Duplicate),
				(4, DropReason::SelfLoop),
				(5, DropReason::NotAnInteger),
				(6, DropReason::MissingToken),
			]
		);
		assert_eq!(report.malformed_count(), 3);
	}

	#[test]
	fn blank_input_yields_empty_report() {
		let report = parse_with_report("\n   \n\t");
		assert!(report.edges.is_empty());
		assert!(report.dropped.is_empty());
	}
}
