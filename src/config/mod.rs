//! Process settings loaded from the environment.

pub mod loader;
pub mod types;

pub use types::*;
