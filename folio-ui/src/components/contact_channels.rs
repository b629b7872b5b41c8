//! Static contact channels and the availability notice.

use crate::components::Icon;
use dioxus::prelude::*;
use folio_content::{contact_channels, AVAILABILITY};

/// Icon + label + value row shared by linked and plain channels.
#[component]
fn ChannelRow(icon: String, label: String, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 14px;",
            div {
                style: "width: 42px; height: 42px; border-radius: 21px; background: #E3F2FD; display: flex; align-items: center; justify-content: center; flex-shrink: 0;",
                Icon { name: icon, size: 20 }
            }
            div {
                p { style: "margin: 0; font-size: 12px; color: #888;", "{label}" }
                p { style: "margin: 2px 0 0 0; font-size: 14px; color: #222;", "{value}" }
            }
        }
    }
}

/// Contact-channel cards and availability notice beside the form.
#[component]
pub fn ContactChannels() -> Element {
    let channels = contact_channels();
    let availability = AVAILABILITY;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 14px;",
            h3 {
                style: "margin: 0; font-size: 20px; color: #222;",
                "Let's Connect"
            }
            p {
                style: "margin: 0 0 6px 0; font-size: 14px; color: #666;",
                "Feel free to reach out through any of these channels. I'm always open to discussing new projects, creative ideas, or opportunities."
            }

            for channel in channels {
                div {
                    key: "{channel.label}",
                    style: "background: white; border: 1px solid #e0e0e0; border-radius: 10px; padding: 14px;",
                    if let Some(href) = channel.href {
                        a {
                            href: "{href}",
                            target: if href.starts_with("http") { "_blank" },
                            rel: if href.starts_with("http") { "noopener noreferrer" },
                            style: "text-decoration: none;",
                            ChannelRow {
                                icon: channel.icon.to_string(),
                                label: channel.label.to_string(),
                                value: channel.value.to_string(),
                            }
                        }
                    } else {
                        ChannelRow {
                            icon: channel.icon.to_string(),
                            label: channel.label.to_string(),
                            value: channel.value.to_string(),
                        }
                    }
                }
            }

            div {
                id: "availability",
                style: "background: #E3F2FD; border: 1px solid #BBDEFB; border-radius: 10px; padding: 18px; display: flex; align-items: center; gap: 12px;",
                span {
                    style: "width: 10px; height: 10px; border-radius: 5px; background: #4CAF50; flex-shrink: 0;",
                }
                div {
                    p {
                        style: "margin: 0; font-size: 14px; color: #222; font-weight: 500;",
                        "{availability.status}"
                    }
                    p {
                        style: "margin: 2px 0 0 0; font-size: 12px; color: #666;",
                        "{availability.detail}"
                    }
                }
            }
        }
    }
}
