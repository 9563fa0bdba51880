//! Prompt answer validators
//!
//! Validators are plain functions so they can be referenced from the
//! question table and tested without a terminal.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ValidationError;
use crate::sanitize::sanitize_project_name;
use crate::types::RawAnswer;

/// Signature shared by every prompt validator
pub type Validator = fn(&RawAnswer) -> Result<(), ValidationError>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex is valid")
});

fn text(answer: &RawAnswer) -> Result<&str, ValidationError> {
    answer.as_text().ok_or(ValidationError::InvalidInput)
}

/// Reject empty (after trimming) text
pub fn validate_required(answer: &RawAnswer) -> Result<(), ValidationError> {
    if text(answer)?.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Require a plausible `local@domain.tld` address
pub fn validate_email(answer: &RawAnswer) -> Result<(), ValidationError> {
    let email = text(answer)?.trim();

    if email.is_empty() {
        return Err(ValidationError::Required);
    }

    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidFormat);
    }

    Ok(())
}

/// Required, and must leave something behind after sanitization
pub fn validate_project_name(answer: &RawAnswer) -> Result<(), ValidationError> {
    validate_required(answer)?;

    if sanitize_project_name(text(answer)?.trim()).is_empty() {
        return Err(ValidationError::InvalidName);
    }

    Ok(())
}
