//! Live force-directed preview of the current edge set.

mod component;
mod frame_loop;
mod render;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::PreviewData;
