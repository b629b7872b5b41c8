//! Projects section: showcase grid, detail overlay, and the scroll lock
//! that accompanies it.

use crate::components::{ProjectCard, ProjectOverlay, SectionHeader};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

/// The "Featured Projects" page section.
#[component]
pub fn ProjectsSection() -> Element {
    let state = use_context::<AppState>();
    let projects = state.projects.read().clone();

    // Keep the body scroll lock in sync with the overlay. Subscribes to
    // selected_project and re-runs on every open/close.
    use_effect(move || {
        if state.selected_project.read().is_some() {
            js_bridge::lock_scroll();
        } else {
            js_bridge::unlock_scroll();
        }
    });

    // The lock must not outlive the section if it unmounts mid-overlay.
    use_drop(js_bridge::unlock_scroll);

    rsx! {
        section {
            id: "projects",
            style: "padding: 72px 24px; background: white;",
            div {
                style: "max-width: 1100px; margin: 0 auto;",
                SectionHeader {
                    title: "Featured Projects".to_string(),
                    subtitle: "A selection of projects showcasing my work across the stack".to_string(),
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 24px;",
                    for project in projects {
                        ProjectCard { key: "{project.id}", project: project.clone() }
                    }
                }
            }
        }

        if let Some(project) = state.selected_project.read().clone() {
            ProjectOverlay { project }
        }
    }
}
