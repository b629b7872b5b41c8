//! Skill tile with icon, category badge, and proficiency bar.

use crate::components::Icon;
use dioxus::prelude::*;
use folio_model::Skill;

#[derive(Props, Clone, PartialEq)]
pub struct SkillCardProps {
    pub skill: Skill,
}

/// A single tile in the skills grid.
#[component]
pub fn SkillCard(props: SkillCardProps) -> Element {
    let skill = props.skill;

    rsx! {
        div {
            id: "skill-{skill.id}",
            style: "background: white; border: 1px solid #e0e0e0; border-radius: 10px; padding: 20px;",
            div {
                style: "width: 44px; height: 44px; border-radius: 8px; background: #E3F2FD; display: flex; align-items: center; justify-content: center;",
                Icon { name: skill.icon.clone(), size: 24 }
            }
            h3 {
                style: "margin: 14px 0 6px 0; font-size: 17px; color: #222;",
                "{skill.name}"
            }
            span {
                style: "display: inline-block; padding: 2px 10px; border-radius: 10px; background: #f0f0f0; color: #555; font-size: 12px;",
                "{skill.category}"
            }
            div {
                style: "margin-top: 14px;",
                div {
                    style: "height: 8px; background: #eee; border-radius: 4px; overflow: hidden;",
                    div {
                        style: "height: 100%; width: {skill.proficiency}%; background: #2196F3; border-radius: 4px;",
                    }
                }
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #888; text-align: right;",
                    "{skill.proficiency}%"
                }
            }
        }
    }
}
