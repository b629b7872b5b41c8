//! Embedded static content for the portfolio site.
//!
//! Catalogs are embedded at compile time with `include_str!` and parsed once
//! at startup by the app's mount effect. They are treated as immutable input:
//! nothing here mutates a record after load, and the UI only ever borrows or
//! clones them.

use anyhow::Context;
use folio_model::{Availability, ContactChannel, Project, Skill};

// Embed the JSON catalogs at compile time.
const PROJECTS_JSON: &str = include_str!("../data/projects.json");
const SKILLS_JSON: &str = include_str!("../data/skills.json");

/// Parse the embedded project catalog.
pub fn load_projects() -> anyhow::Result<Vec<Project>> {
    serde_json::from_str(PROJECTS_JSON).context("invalid embedded project catalog")
}

/// Parse the embedded skill catalog.
pub fn load_skills() -> anyhow::Result<Vec<Skill>> {
    serde_json::from_str(SKILLS_JSON).context("invalid embedded skill catalog")
}

/// Contact channels listed beside the form, in display order.
pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            label: "Email",
            value: "alex@alexmoran.dev",
            href: Some("mailto:alex@alexmoran.dev"),
            icon: "mail",
        },
        ContactChannel {
            label: "LinkedIn",
            value: "/in/alex-moran",
            href: Some("https://www.linkedin.com/in/alex-moran"),
            icon: "linkedin",
        },
        ContactChannel {
            label: "GitHub",
            value: "@alexmoran-dev",
            href: Some("https://github.com/alexmoran-dev"),
            icon: "github",
        },
        ContactChannel {
            label: "Location",
            value: "Portland, OR",
            href: None,
            icon: "map-pin",
        },
    ]
}

/// Availability notice shown under the contact channels.
pub const AVAILABILITY: Availability = Availability {
    status: "Available for new projects",
    detail: "Currently accepting freelance work",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_catalog_parses_and_is_nonempty() {
        let projects = load_projects().unwrap();
        assert!(!projects.is_empty());
    }

    #[test]
    fn project_ids_are_unique() {
        let projects = load_projects().unwrap();
        let ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn every_project_has_an_image_and_a_tech_stack() {
        for project in load_projects().unwrap() {
            assert!(!project.image.is_empty(), "project {} has no image", project.id);
            assert!(
                !project.tech_stack.is_empty(),
                "project {} has no tech stack",
                project.id
            );
        }
    }

    #[test]
    fn skill_catalog_parses_and_is_nonempty() {
        let skills = load_skills().unwrap();
        assert!(!skills.is_empty());
    }

    #[test]
    fn skill_ids_are_unique() {
        let skills = load_skills().unwrap();
        let ids: HashSet<&str> = skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), skills.len());
    }

    #[test]
    fn proficiency_stays_in_range() {
        for skill in load_skills().unwrap() {
            assert!(
                skill.proficiency <= 100,
                "skill {} has out-of-range proficiency {}",
                skill.id,
                skill.proficiency
            );
        }
    }

    #[test]
    fn every_category_is_represented() {
        use folio_model::SkillCategory;
        let skills = load_skills().unwrap();
        for category in [
            SkillCategory::Frontend,
            SkillCategory::Backend,
            SkillCategory::Tools,
        ] {
            assert!(
                skills.iter().any(|s| s.category == category),
                "no skills in category {}",
                category
            );
        }
    }

    #[test]
    fn linkless_channels_render_as_plain_text() {
        let channels = contact_channels();
        let location = channels.iter().find(|c| c.label == "Location").unwrap();
        assert!(location.href.is_none());
        assert!(channels.iter().filter(|c| c.href.is_some()).count() >= 3);
    }
}
