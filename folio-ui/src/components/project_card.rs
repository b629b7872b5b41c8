//! Project card for the showcase grid.

use crate::state::AppState;
use dioxus::prelude::*;
use folio_model::Project;

const TECH_BADGE_STYLE: &str = "padding: 2px 8px; border: 1px solid #ddd; border-radius: 10px; color: #555; font-size: 12px;";

/// How many tech-stack badges a card shows before collapsing to "+N".
const TECH_PREVIEW_LEN: usize = 3;

#[derive(Props, Clone, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

/// Card in the projects grid. Clicking anywhere on it opens the detail
/// overlay for this project.
#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let mut state = use_context::<AppState>();
    let project = props.project;

    let preview: Vec<String> = project.tech_stack.iter().take(TECH_PREVIEW_LEN).cloned().collect();
    let extra = project.tech_stack.len().saturating_sub(TECH_PREVIEW_LEN);

    let on_select = {
        let project = project.clone();
        move |_| state.open_project(project.clone())
    };

    rsx! {
        div {
            id: "project-{project.id}",
            style: "background: white; border: 1px solid #e0e0e0; border-radius: 10px; overflow: hidden; cursor: pointer;",
            onclick: on_select,
            img {
                src: "{project.image}",
                alt: "{project.title}",
                style: "width: 100%; aspect-ratio: 16 / 9; object-fit: cover; display: block; background: #f0f0f0;",
            }
            div {
                style: "padding: 20px;",
                span {
                    style: "display: inline-block; padding: 2px 10px; border-radius: 10px; background: #f0f0f0; color: #555; font-size: 12px;",
                    "{project.category}"
                }
                h3 {
                    style: "margin: 12px 0 6px 0; font-size: 19px; color: #222;",
                    "{project.title}"
                }
                p {
                    style: "margin: 0 0 14px 0; font-size: 14px; color: #666;",
                    "{project.description}"
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    for tech in preview {
                        span { style: TECH_BADGE_STYLE, "{tech}" }
                    }
                    if extra > 0 {
                        span { style: TECH_BADGE_STYLE, "+{extra}" }
                    }
                }
            }
        }
    }
}
