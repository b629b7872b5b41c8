//! Detail overlay for a selected project.
//!
//! Closes on the explicit close button, a click on the backdrop, or Escape.
//! The backdrop grabs focus when it mounts so the key handler receives
//! Escape for as long as the overlay is open; nothing is registered once it
//! closes.

use crate::state::AppState;
use dioxus::prelude::*;
use folio_model::Project;

const LINK_STYLE: &str = "display: inline-block; padding: 10px 18px; border-radius: 6px; background: #2196F3; color: white; text-decoration: none; font-size: 14px;";
const LINK_OUTLINE_STYLE: &str = "display: inline-block; padding: 10px 18px; border-radius: 6px; border: 1px solid #2196F3; color: #2196F3; text-decoration: none; font-size: 14px;";

#[derive(Props, Clone, PartialEq)]
pub struct ProjectOverlayProps {
    pub project: Project,
}

/// Modal detail view over the page for the selected project.
#[component]
pub fn ProjectOverlay(props: ProjectOverlayProps) -> Element {
    let mut state = use_context::<AppState>();
    let project = props.project;

    rsx! {
        div {
            id: "project-overlay",
            style: "position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; padding: 16px; background: rgba(0, 0, 0, 0.55); outline: none;",
            tabindex: "0",
            onmounted: move |element: Event<MountedData>| async move {
                let _ = element.set_focus(true).await;
            },
            onclick: move |_| state.close_project(),
            onkeydown: move |evt: Event<KeyboardData>| {
                if evt.key() == Key::Escape {
                    state.close_project();
                }
            },

            div {
                style: "position: relative; width: 100%; max-width: 760px; max-height: 90vh; overflow-y: auto; background: white; border-radius: 12px;",
                // Clicks inside the panel must not reach the backdrop.
                onclick: move |evt| evt.stop_propagation(),

                button {
                    id: "overlay-close",
                    style: "position: absolute; top: 12px; right: 12px; width: 32px; height: 32px; border: none; border-radius: 16px; background: rgba(255,255,255,0.9); cursor: pointer; font-size: 16px;",
                    onclick: move |_| state.close_project(),
                    "\u{d7}"
                }

                img {
                    src: "{project.image}",
                    alt: "{project.title}",
                    style: "width: 100%; aspect-ratio: 16 / 9; object-fit: cover; display: block; background: #f0f0f0;",
                }

                div {
                    style: "padding: 24px;",
                    span {
                        style: "display: inline-block; padding: 2px 10px; border-radius: 10px; background: #f0f0f0; color: #555; font-size: 12px;",
                        "{project.category}"
                    }
                    h3 {
                        style: "margin: 12px 0 14px 0; font-size: 26px; color: #222;",
                        "{project.title}"
                    }
                    p {
                        style: "margin: 0 0 20px 0; font-size: 15px; line-height: 1.6; color: #555;",
                        "{project.long_description}"
                    }

                    h4 {
                        style: "margin: 0 0 10px 0; font-size: 16px; color: #222;",
                        "Technologies Used"
                    }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 6px; margin-bottom: 20px;",
                        for tech in project.tech_stack.clone() {
                            span {
                                style: "padding: 2px 8px; border: 1px solid #ddd; border-radius: 10px; color: #555; font-size: 12px;",
                                "{tech}"
                            }
                        }
                    }

                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 12px;",
                        if let Some(live_url) = project.live_url.clone() {
                            a {
                                href: "{live_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                style: LINK_STYLE,
                                "View Live"
                            }
                        }
                        if let Some(github_url) = project.github_url.clone() {
                            a {
                                href: "{github_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                style: LINK_OUTLINE_STYLE,
                                "View Code"
                            }
                        }
                    }
                }
            }
        }
    }
}
