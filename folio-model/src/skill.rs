//! Skill records, categories, and the grid filter projection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad grouping for a skill. Closed set; the catalog uses the lowercase
/// names (`"frontend"`, `"backend"`, `"tools"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Tools => "tools",
        };
        write!(f, "{}", s)
    }
}

/// A single skill card record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    /// Stable identifier used for DOM ids and list keys.
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    /// Key into the icon dictionary; unknown keys fall back to a default glyph.
    pub icon: String,
    /// Self-assessed proficiency, 0-100, rendered as a bar fill percentage.
    /// The catalog keeps this in range; there is no runtime clamping.
    pub proficiency: u8,
}

/// Selector value for the skills grid filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show the full catalog.
    #[default]
    All,
    /// Show only skills in one category.
    Only(SkillCategory),
}

impl CategoryFilter {
    /// The four selector values, in display order.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(SkillCategory::Frontend),
        CategoryFilter::Only(SkillCategory::Backend),
        CategoryFilter::Only(SkillCategory::Tools),
    ];

    /// Button label for this filter.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Skills",
            CategoryFilter::Only(SkillCategory::Frontend) => "Frontend",
            CategoryFilter::Only(SkillCategory::Backend) => "Backend",
            CategoryFilter::Only(SkillCategory::Tools) => "Tools",
        }
    }
}

/// Project the visible subset for a filter, preserving catalog order.
///
/// `All` yields the full list; otherwise exactly the skills whose category
/// matches the selector.
pub fn filter_skills(skills: &[Skill], filter: CategoryFilter) -> Vec<Skill> {
    match filter {
        CategoryFilter::All => skills.to_vec(),
        CategoryFilter::Only(category) => skills
            .iter()
            .filter(|skill| skill.category == category)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a minimal skill in the given category.
    fn skill(id: &str, category: SkillCategory) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_uppercase(),
            category,
            icon: "code".to_string(),
            proficiency: 80,
        }
    }

    fn sample_skills() -> Vec<Skill> {
        vec![
            skill("react", SkillCategory::Frontend),
            skill("rust", SkillCategory::Backend),
            skill("css", SkillCategory::Frontend),
            skill("docker", SkillCategory::Tools),
            skill("postgres", SkillCategory::Backend),
        ]
    }

    #[test]
    fn all_filter_returns_full_list_in_order() {
        let skills = sample_skills();
        let visible = filter_skills(&skills, CategoryFilter::All);
        assert_eq!(visible, skills);
    }

    #[test]
    fn category_filter_returns_exact_subset_in_order() {
        let skills = sample_skills();
        let visible = filter_skills(&skills, CategoryFilter::Only(SkillCategory::Frontend));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["react", "css"]);
    }

    #[test]
    fn empty_category_yields_empty_grid() {
        let skills = vec![skill("rust", SkillCategory::Backend)];
        let visible = filter_skills(&skills, CategoryFilter::Only(SkillCategory::Tools));
        assert!(visible.is_empty());
    }

    #[test]
    fn selector_covers_all_four_values() {
        let labels: Vec<&str> = CategoryFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All Skills", "Frontend", "Backend", "Tools"]);
    }

    #[test]
    fn categories_use_lowercase_names_in_the_catalog() {
        let json = serde_json::to_string(&SkillCategory::Frontend).unwrap();
        assert_eq!(json, "\"frontend\"");
        let back: SkillCategory = serde_json::from_str("\"tools\"").unwrap();
        assert_eq!(back, SkillCategory::Tools);
    }
}
