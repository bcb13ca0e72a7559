//! Field validation for person bodies.

use crate::error::AppError;
use crate::model::{NewPerson, PersonPatch};
use once_cell::sync::Lazy;
use regex::Regex;

/// One `@`, non-empty on both sides, no whitespace.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email regex must compile"));

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body. Both fields are present by construction.
    pub fn validate(body: &NewPerson) -> Result<(), AppError> {
        validate_name(&body.name)?;
        validate_email(&body.email)
    }

    /// Validate only the fields present in an update body.
    pub fn validate_partial(body: &PersonPatch) -> Result<(), AppError> {
        if let Some(name) = &body.name {
            validate_name(name)?;
        }
        if let Some(email) = &body.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if !EMAIL_RE.is_match(email) {
        return Err(AppError::Validation("email must be a valid email".into()));
    }
    Ok(())
}
