//! Showcase project records.
//!
//! Projects are loaded once at startup from the embedded catalog and never
//! mutated; selecting one for the detail overlay is a transient UI pointer
//! into the loaded set.

use serde::{Deserialize, Serialize};

/// A single showcase project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Stable identifier used for DOM ids and list keys.
    pub id: String,
    /// Card and overlay title.
    pub title: String,
    /// Short card blurb (clamped to two lines on the card).
    pub description: String,
    /// Full description shown in the detail overlay.
    pub long_description: String,
    /// Image URL for the card and overlay hero.
    pub image: String,
    /// Free-form category badge text (e.g. "Web App").
    pub category: String,
    /// Technologies used, in display order.
    pub tech_stack: Vec<String>,
    /// Deployed instance, if one exists.
    #[serde(default)]
    pub live_url: Option<String>,
    /// Public repository, if one exists.
    #[serde(default)]
    pub github_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_urls_default_to_none() {
        let json = r#"{
            "id": "p1",
            "title": "Demo",
            "description": "short",
            "long_description": "long",
            "image": "/img/demo.png",
            "category": "Web App",
            "tech_stack": ["Rust"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.live_url, None);
        assert_eq!(project.github_url, None);
    }

    #[test]
    fn urls_survive_a_round_trip() {
        let project = Project {
            id: "p2".into(),
            title: "Demo".into(),
            description: "short".into(),
            long_description: "long".into(),
            image: "/img/demo.png".into(),
            category: "Web App".into(),
            tech_stack: vec!["Rust".into(), "Dioxus".into()],
            live_url: Some("https://example.com".into()),
            github_url: None,
        };
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }
}
