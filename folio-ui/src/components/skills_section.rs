//! Skills section: header, category filter, and the filtered grid.

use crate::components::{CategoryFilterBar, SectionHeader, SkillCard};
use crate::state::AppState;
use dioxus::prelude::*;
use folio_model::filter_skills;

/// The "Skills & Technologies" page section.
///
/// The visible set is a pure projection of the loaded catalog through the
/// active filter; the catalog itself is never mutated.
#[component]
pub fn SkillsSection() -> Element {
    let state = use_context::<AppState>();
    let skills = state.skills.read().clone();
    let visible = filter_skills(&skills, (state.active_filter)());

    rsx! {
        section {
            id: "skills",
            style: "padding: 72px 24px; background: #fafafa;",
            div {
                style: "max-width: 1100px; margin: 0 auto;",
                SectionHeader {
                    title: "Skills & Technologies".to_string(),
                    subtitle: "A comprehensive toolkit for building modern, scalable applications".to_string(),
                }
                CategoryFilterBar {}
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 16px;",
                    for skill in visible {
                        SkillCard { key: "{skill.id}", skill: skill.clone() }
                    }
                }
            }
        }
    }
}
