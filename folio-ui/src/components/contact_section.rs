//! Contact section: validated form beside the static channels.

use crate::components::{ContactChannels, ContactForm, SectionHeader};
use dioxus::prelude::*;

/// The "Get In Touch" page section.
#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section {
            id: "contact",
            style: "padding: 72px 24px; background: #fafafa;",
            div {
                style: "max-width: 1100px; margin: 0 auto;",
                SectionHeader {
                    title: "Get In Touch".to_string(),
                    subtitle: "Have a project in mind or just want to chat? I'd love to hear from you.".to_string(),
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 40px; align-items: start;",
                    ContactForm {}
                    ContactChannels {}
                }
            }
        }
    }
}
