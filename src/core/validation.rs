//! Validation rules for form fields
//!
//! Each rule is a pure predicate over a field value. A failing rule yields a
//! [`ValidationError`] whose `Display` text is the inline message shown under
//! the field once it has been touched.

use thiserror::Error;

use super::options::{Gender, Level};

/// Minimum feedback length, in characters
pub const MIN_FEEDBACK_LENGTH: usize = 5;

/// Maximum feedback length, in characters. Enforced by truncating input.
pub const MAX_FEEDBACK_LENGTH: usize = 500;

/// Validation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Feedback must be at least {min} characters")]
    FeedbackTooShort { min: usize },
    /// Only reachable when a value bypasses input truncation
    #[error("Feedback must be at most {max} characters")]
    FeedbackTooLong { max: usize },
    #[error("Select your level")]
    LevelRequired,
    #[error("Select a gender")]
    GenderRequired,
    #[error("You must agree to continue")]
    AgreementRequired,
}

/// Number of characters as the user perceives them
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Name: invalid if empty
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::NameRequired)
    } else {
        Ok(())
    }
}

/// Feedback text: invalid if shorter than [`MIN_FEEDBACK_LENGTH`]
pub fn validate_feedback(text: &str) -> Result<(), ValidationError> {
    if char_len(text) < MIN_FEEDBACK_LENGTH {
        Err(ValidationError::FeedbackTooShort {
            min: MIN_FEEDBACK_LENGTH,
        })
    } else {
        Ok(())
    }
}

pub fn validate_level(level: Option<Level>) -> Result<(), ValidationError> {
    level.map(|_| ()).ok_or(ValidationError::LevelRequired)
}

pub fn validate_gender(gender: Option<Gender>) -> Result<(), ValidationError> {
    gender.map(|_| ()).ok_or(ValidationError::GenderRequired)
}

/// Agreement checkbox: invalid if unchecked
pub fn validate_agreement(agree: bool) -> Result<(), ValidationError> {
    if agree {
        Ok(())
    } else {
        Err(ValidationError::AgreementRequired)
    }
}

/// Apply the input length cap, keeping the first [`MAX_FEEDBACK_LENGTH`] characters.
///
/// Mirrors a `maxlength` attribute: anything typed or pasted past the cap is dropped.
pub fn truncate_input(value: String) -> String {
    match value.char_indices().nth(MAX_FEEDBACK_LENGTH) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value,
    }
}
