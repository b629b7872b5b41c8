//! Validated contact form with its submission lifecycle.
//!
//! Idle -> Submitting -> Idle. Validation gates the POST: an invalid form
//! never issues a request. Success clears the fields and shows a success
//! toast; failure preserves the entered values for resubmission. The
//! submit control is disabled while a request is in flight, and the
//! handler returns early if one somehow fires anyway, so each submit
//! issues at most one request.

use crate::js_bridge;
use crate::state::{AppState, ToastKind};
use dioxus::prelude::*;
use folio_model::{
    submit_contact, validate_email, validate_message, validate_name, ContactMessage,
    ValidationError,
};
use log::{info, warn};

const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 10px 34px 10px 12px; border: 1px solid #ccc; border-radius: 6px; font-size: 14px; font-family: inherit;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 6px; font-size: 14px; color: #333;";

/// The contact form card.
#[component]
pub fn ContactForm() -> Element {
    let mut state = use_context::<AppState>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    // Empty-field errors only surface once a submit has been attempted;
    // a malformed non-empty field shows its error immediately.
    let mut attempted = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        attempted.set(true);

        let payload = ContactMessage {
            name: name(),
            email: email(),
            message: message(),
        };
        if let Err(errors) = payload.validate() {
            info!("Blocked contact submit: {} field(s) invalid", errors.len());
            return;
        }

        submitting.set(true);
        spawn(async move {
            let client = reqwest::Client::new();
            let endpoint = js_bridge::contact_endpoint();
            match submit_contact(&client, &endpoint, &payload).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    attempted.set(false);
                    state.show_toast(
                        ToastKind::Success,
                        "Message sent!",
                        "Thank you for reaching out. I'll get back to you as soon as possible.",
                    );
                }
                Err(err) => {
                    warn!("Contact submission failed: {}", err);
                    state.show_toast(
                        ToastKind::Error,
                        "Error",
                        "Failed to send message. Please try again.",
                    );
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            id: "contact-form",
            style: "background: white; border: 1px solid #e0e0e0; border-radius: 10px; padding: 28px; display: flex; flex-direction: column; gap: 18px;",
            onsubmit: on_submit,

            div {
                label { r#for: "contact-name", style: LABEL_STYLE, "Name" }
                div {
                    style: "position: relative;",
                    input {
                        id: "contact-name",
                        r#type: "text",
                        placeholder: "Your name",
                        style: INPUT_STYLE,
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    FieldMark {
                        filled: !name().is_empty(),
                        error: validate_name(&name()).err(),
                        attempted: attempted(),
                    }
                }
                FieldNote {
                    filled: !name().is_empty(),
                    error: validate_name(&name()).err(),
                    attempted: attempted(),
                }
            }

            div {
                label { r#for: "contact-email", style: LABEL_STYLE, "Email" }
                div {
                    style: "position: relative;",
                    input {
                        id: "contact-email",
                        r#type: "email",
                        placeholder: "your@email.com",
                        style: INPUT_STYLE,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    FieldMark {
                        filled: !email().is_empty(),
                        error: validate_email(&email()).err(),
                        attempted: attempted(),
                    }
                }
                FieldNote {
                    filled: !email().is_empty(),
                    error: validate_email(&email()).err(),
                    attempted: attempted(),
                }
            }

            div {
                label { r#for: "contact-message", style: LABEL_STYLE, "Message" }
                div {
                    style: "position: relative;",
                    textarea {
                        id: "contact-message",
                        placeholder: "Tell me about your project...",
                        style: "{INPUT_STYLE} min-height: 120px; resize: none;",
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                    FieldMark {
                        filled: !message().is_empty(),
                        error: validate_message(&message()).err(),
                        attempted: attempted(),
                    }
                }
                FieldNote {
                    filled: !message().is_empty(),
                    error: validate_message(&message()).err(),
                    attempted: attempted(),
                }
            }

            button {
                id: "contact-submit",
                r#type: "submit",
                disabled: submitting(),
                style: "padding: 12px; border: none; border-radius: 6px; background: #2196F3; color: white; font-size: 15px; cursor: pointer;",
                if submitting() { "Sending..." } else { "Send Message" }
            }
        }
    }
}

/// Pass/fail glyph at the input's right edge: a check for a filled valid
/// field, a cross once an error is visible, nothing otherwise.
#[component]
fn FieldMark(filled: bool, error: Option<ValidationError>, attempted: bool) -> Element {
    let show_error = error.is_some() && (attempted || filled);
    let glyph = if show_error {
        Some(("\u{2717}", "#C62828"))
    } else if filled {
        Some(("\u{2713}", "#2E7D32"))
    } else {
        None
    };
    let Some((mark, color)) = glyph else {
        return rsx! {};
    };

    rsx! {
        span {
            style: "position: absolute; right: 12px; top: 12px; color: {color}; font-size: 14px;",
            "{mark}"
        }
    }
}

/// Inline message under a field whose rule is currently failing.
#[component]
fn FieldNote(filled: bool, error: Option<ValidationError>, attempted: bool) -> Element {
    let visible = error.filter(|_| attempted || filled);
    let Some(err) = visible else {
        return rsx! {};
    };

    rsx! {
        p {
            style: "margin: 6px 0 0 0; font-size: 12px; color: #C62828;",
            "{err}"
        }
    }
}
