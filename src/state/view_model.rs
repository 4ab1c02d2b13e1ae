use rand::Rng;

use super::command::{Command, Effect, Ticket};
use crate::api::ApiError;
use crate::config::AppConfig;
use crate::edges::{
	DroppedLine, EdgeSet, PlotResult, RandomParams, SolveResult, WeightSequence, build_request,
	parse_with_report, random_graph,
};

/// Small triangle-with-tail so the page has something to preview on load.
const STARTER_EDGES: &str = "0 1\n1 2\n2 0\n2 3";

#[derive(Clone, Debug, PartialEq)]
pub enum Status {
	Idle,
	Pending(Command),
	Failed(String),
}

/// Everything the playground page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
	pub input_text: String,
	pub vertices_text: String,
	pub probability_text: String,
	pub last_edge_set: EdgeSet,
	/// Solver weights for `last_edge_set`; empty until a run completes.
	pub last_weights: WeightSequence,
	pub last_image: Option<String>,
	pub last_log: Option<String>,
	pub last_dropped: Vec<DroppedLine>,
	pub status: Status,
	max_vertices: usize,
	issued: u64,
}

impl ViewModel {
	pub fn new(config: &AppConfig) -> Self {
		Self {
			input_text: STARTER_EDGES.to_owned(),
			vertices_text: config.default_vertices.to_string(),
			probability_text: config.default_probability.to_string(),
			last_edge_set: EdgeSet::new(),
			last_weights: WeightSequence::default(),
			last_image: None,
			last_log: None,
			last_dropped: Vec::new(),
			status: Status::Idle,
			max_vertices: config.max_vertices,
			issued: 0,
		}
	}

	/// Runs the synchronous half of `command` and returns the request to send.
	///
	/// Every call supersedes whatever was in flight before it.
	pub fn dispatch<R: Rng + ?Sized>(&mut self, command: Command, rng: &mut R) -> Effect {
		let ticket = self.issue(command);

		if command == Command::Randomize {
			let params =
				RandomParams::from_inputs(&self.vertices_text, &self.probability_text, self.max_vertices);
			let edges = random_graph(params, rng);
			log::debug!(
				"generated {} edges on {} vertices (p = {})",
				edges.len(),
				params.vertices(),
				params.probability()
			);
			self.input_text = edges.to_text();
			self.last_dropped.clear();
			self.last_edge_set = edges;
		} else {
			let report = parse_with_report(&self.input_text);
			if !report.dropped.is_empty() {
				log::info!("ignored {} input line(s)", report.dropped.len());
			}
			self.last_edge_set = report.edges;
			self.last_dropped = report.dropped;
		}
		self.last_weights = WeightSequence::default();

		let request = build_request(self.last_edge_set.clone(), None);
		match command {
			Command::Run => Effect::Solve { ticket, request },
			Command::Preview | Command::Randomize => Effect::Plot { ticket, request },
		}
	}

	fn issue(&mut self, command: Command) -> Ticket {
		self.issued += 1;
		self.status = Status::Pending(command);
		Ticket(self.issued)
	}

	/// Only the most recently issued ticket may update the view.
	pub fn is_current(&self, ticket: Ticket) -> bool {
		ticket.0 == self.issued
	}

	/// Stores the solver output and returns the follow-up plot, or `None` if a
	/// newer command has been issued meanwhile.
	pub fn apply_solve(&mut self, ticket: Ticket, result: SolveResult) -> Option<Effect> {
		if !self.accept(ticket) {
			return None;
		}
		if result.weights.len() != self.last_edge_set.len() {
			log::warn!(
				"solver returned {} weights for {} edges",
				result.weights.len(),
				self.last_edge_set.len()
			);
		}
		self.last_log = Some(result.display_log().to_owned());
		self.last_weights = result.weights.clone();

		Some(Effect::Plot {
			ticket,
			request: build_request(self.last_edge_set.clone(), Some(result.weights)),
		})
	}

	/// Returns whether the image was applied.
	pub fn apply_plot(&mut self, ticket: Ticket, result: PlotResult) -> bool {
		if !self.accept(ticket) {
			return false;
		}
		self.last_image = Some(result.img);
		self.status = Status::Idle;
		true
	}

	/// Records a failure for the current request. The previous image and log
	/// stay on screen.
	pub fn apply_failure(&mut self, ticket: Ticket, error: &ApiError) -> bool {
		if !self.accept(ticket) {
			return false;
		}
		log::error!("request {ticket} failed: {error}");
		self.status = Status::Failed(error.to_string());
		true
	}

	pub fn dismiss_error(&mut self) {
		if matches!(self.status, Status::Failed(_)) {
			self.status = Status::Idle;
		}
	}

	fn accept(&self, ticket: Ticket) -> bool {
		let current = self.is_current(ticket);
		if !current {
			log::debug!("dropping stale response {ticket} (latest is #{})", self.issued);
		}
		current
	}
}
