//! HTTP handlers for person CRUD and the greeting endpoint.

pub mod greeting;
pub mod person;
pub use greeting::*;
pub use person::*;
