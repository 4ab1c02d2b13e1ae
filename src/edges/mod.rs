//! Edge-list canonicalization and the wire types exchanged with the backend.
//!
//! Everything in here is target-independent: no DOM, no network. The UI only
//! ever talks to the backend through an [`EdgeSet`] built by [`parse`] or
//! [`random_graph`].

mod edge;
mod parse;
mod random;
mod weights;
mod wire;

pub use edge::{Edge, EdgeSet, Vertex};
pub use parse::{DropReason, DroppedLine, ParseReport, parse, parse_with_report};
pub use random::{
	DEFAULT_PROBABILITY, DEFAULT_VERTICES, MIN_VERTICES, RandomParams, random_graph,
};
pub use weights::{WeightClass, WeightSequence};
pub use wire::{GraphRequest, NO_OUTPUT, PlotResult, SolveResult, build_request};
