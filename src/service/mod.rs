//! PersonService: alternate-key resolution and the four person operations.

mod person;
mod validation;
pub use person::PersonService;
pub use validation::RequestValidator;
