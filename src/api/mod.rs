//! Browser `fetch` client for the rendering and solving backend.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
