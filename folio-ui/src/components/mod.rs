//! Reusable Dioxus RSX components for the portfolio site.

mod category_filter_bar;
mod contact_channels;
mod contact_form;
mod contact_section;
mod error_banner;
mod icon;
mod project_card;
mod project_overlay;
mod projects_section;
mod section_header;
mod skill_card;
mod skills_section;
mod toast;

pub use category_filter_bar::CategoryFilterBar;
pub use contact_channels::ContactChannels;
pub use contact_form::ContactForm;
pub use contact_section::ContactSection;
pub use error_banner::ErrorBanner;
pub use icon::Icon;
pub use project_card::ProjectCard;
pub use project_overlay::ProjectOverlay;
pub use projects_section::ProjectsSection;
pub use section_header::SectionHeader;
pub use skill_card::SkillCard;
pub use skills_section::SkillsSection;
pub use toast::ToastHost;
