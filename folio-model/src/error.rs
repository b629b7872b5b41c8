/// Error types for the portfolio core
use thiserror::Error;

/// Identifies a contact-form field for inline error placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// A contact-form field failed its validation rule.
///
/// Fully recoverable: the user edits the field and the error clears.
/// Submission is blocked while any of these are outstanding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name field is empty
    #[error("Please enter your name")]
    EmptyName,

    /// Email field is missing or not shaped like an address
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Message field is empty
    #[error("Please enter a message")]
    EmptyMessage,
}

impl ValidationError {
    /// The form field this error belongs to.
    pub fn field(&self) -> ContactField {
        match self {
            ValidationError::EmptyName => ContactField::Name,
            ValidationError::InvalidEmail => ContactField::Email,
            ValidationError::EmptyMessage => ContactField::Message,
        }
    }
}

/// Submission of a validated message failed.
///
/// Recoverable by resubmission; the entered field values are retained.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Transport-level failure (network unreachable, request aborted)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server responded with status {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_their_fields() {
        assert_eq!(ValidationError::EmptyName.field(), ContactField::Name);
        assert_eq!(ValidationError::InvalidEmail.field(), ContactField::Email);
        assert_eq!(ValidationError::EmptyMessage.field(), ContactField::Message);
    }

    #[test]
    fn status_error_carries_the_code() {
        let err = SubmitError::Status(503);
        assert_eq!(err.to_string(), "Server responded with status 503");
    }
}
