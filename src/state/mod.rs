//! Command dispatch over an explicit view-model.
//!
//! [`ViewModel`] is plain data updated by pure handlers; [`dispatch`] is the
//! only place that touches the network.

mod command;
mod dispatch;
mod view_model;

pub use command::Command;
pub use dispatch::dispatch;
pub use view_model::{Status, ViewModel};
