use std::fmt;

use crate::edges::GraphRequest;

/// User-triggerable actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
	/// Parse the input and render it.
	Preview,
	/// Parse the input, solve it, then render it with the solver weights.
	Run,
	/// Generate a random graph into the input and render it.
	Randomize,
}

impl Command {
	pub fn label(&self) -> &'static str {
		match self {
			Self::Preview => "Preview",
			Self::Run => "Run",
			Self::Randomize => "Random example",
		}
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Monotonic id handed out per command; responses carry it back so stale ones
/// can be recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(super) u64);

impl fmt::Display for Ticket {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Network work requested by a command handler.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
	Plot { ticket: Ticket, request: GraphRequest },
	Solve { ticket: Ticket, request: GraphRequest },
}

impl Effect {
	pub fn ticket(&self) -> Ticket {
		match self {
			Self::Plot { ticket, .. } | Self::Solve { ticket, .. } => *ticket,
		}
	}
}
