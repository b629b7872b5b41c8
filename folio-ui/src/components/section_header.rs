//! Centered section header with title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    /// Section title
    pub title: String,
    /// One-line subtitle under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for page sections.
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 40px;",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 32px; color: #222;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0 auto; max-width: 560px; font-size: 15px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
