//! HTTP API surface.
//!
//! Counter resource handlers plus the error-to-response mapping they share.

pub mod counters;
pub mod error;

pub use error::ApiError;
