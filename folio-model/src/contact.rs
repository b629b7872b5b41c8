//! Contact-form payload, field validation, and submission.
//!
//! The form lifecycle is `Idle -> Submitting -> Idle`, with exactly one
//! POST per user-initiated submit. Validation runs client-side before any
//! network call; a message that fails validation is never sent.

use crate::error::{SubmitError, ValidationError};
use log::{info, warn};
use reqwest::Client;
use serde::Serialize;

/// Path of the contact endpoint, relative to the site origin.
pub const CONTACT_PATH: &str = "/api/contact";

/// A contact-form payload. Serialized as the JSON POST body
/// `{"name": ..., "email": ..., "message": ...}`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Validate all fields, collecting every failing rule so the form can
    /// surface them inline at once.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = [
            validate_name(&self.name).err(),
            validate_email(&self.email).err(),
            validate_message(&self.message).err(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Name rule: non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

/// Email rule: a single `@` separating a non-empty local part from a
/// dotted domain with non-empty labels. No whitespace anywhere.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    // A second '@' ends up in the domain half after split_once.
    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Message rule: non-empty after trimming.
pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        Err(ValidationError::EmptyMessage)
    } else {
        Ok(())
    }
}

/// POST a validated message to the contact endpoint.
///
/// Any 2xx response is success. A non-success status or a transport
/// failure maps to [`SubmitError`]; the response body is never read.
/// Exactly one request is issued per call; there is no retry.
pub async fn submit_contact(
    client: &Client,
    endpoint: &str,
    message: &ContactMessage,
) -> Result<(), SubmitError> {
    info!("Submitting contact message to {}", endpoint);
    let response = client.post(endpoint).json(message).send().await?;
    let status = response.status();
    if status.is_success() {
        info!("Contact message accepted ({})", status);
        Ok(())
    } else {
        warn!("Contact endpoint rejected message: {}", status);
        Err(SubmitError::Status(status.as_u16()))
    }
}

/// One entry in the static contact-channel list beside the form
/// (email, LinkedIn, GitHub, location).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    /// Link target; `None` renders as plain text (e.g. a location).
    pub href: Option<&'static str>,
    /// Key into the icon dictionary.
    pub icon: &'static str,
}

/// Static availability notice shown under the contact channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub status: &'static str,
    pub detail: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactField;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "I have a project in mind.".to_string(),
        }
    }

    #[test]
    fn valid_message_passes() {
        assert_eq!(valid_message().validate(), Ok(()));
    }

    #[test]
    fn empty_fields_each_surface_their_error() {
        let empty = ContactMessage::default();
        let errors = empty.validate().unwrap_err();
        let fields: Vec<ContactField> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
        assert_eq!(validate_message("\n\t"), Err(ValidationError::EmptyMessage));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@.com",
            "ada@example..com",
            "ada lovelace@example.com",
            "ada@exam@ple.com",
        ] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::InvalidEmail),
                "expected {:?} to be rejected",
                email
            );
        }
    }

    #[test]
    fn reasonable_emails_are_accepted() {
        for email in [
            "ada@example.com",
            "ada.lovelace+tag@mail.example.co.uk",
            "  ada@example.com  ",
        ] {
            assert_eq!(validate_email(email), Ok(()), "expected {:?} to pass", email);
        }
    }

    #[test]
    fn only_the_failing_field_is_reported() {
        let message = ContactMessage {
            email: "not-an-email".to_string(),
            ..valid_message()
        };
        assert_eq!(
            message.validate(),
            Err(vec![ValidationError::InvalidEmail])
        );
    }

    #[test]
    fn payload_serializes_to_the_wire_shape() {
        let value = serde_json::to_value(valid_message()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "message": "I have a project in mind.",
            })
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod submit_tests {
    use super::*;
    use httpmock::prelude::*;

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_json_body_exactly_once_on_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(CONTACT_PATH).json_body(serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "message": "Hello!",
            }));
            then.status(200);
        });

        let client = Client::new();
        let result = submit_contact(&client, &server.url(CONTACT_PATH), &sample_message()).await;

        assert!(result.is_ok());
        mock.assert();
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(CONTACT_PATH);
            then.status(500);
        });

        let client = Client::new();
        let result = submit_contact(&client, &server.url(CONTACT_PATH), &sample_message()).await;

        match result {
            Err(SubmitError::Status(code)) => assert_eq!(code, 500),
            other => panic!("expected status error, got {:?}", other),
        }
        mock.assert();
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_transport_error() {
        let client = Client::new();
        let result =
            submit_contact(&client, "http://127.0.0.1:9/api/contact", &sample_message()).await;
        assert!(matches!(result, Err(SubmitError::Http(_))));
    }
}
