//! Request extractors.

pub mod json;
pub use json::ApiJson;
