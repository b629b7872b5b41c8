//! Personal portfolio single-page app.
//!
//! Composes the three content sections (projects, skills, contact) over
//! catalogs embedded at compile time:
//! 1. On mount: parse the embedded JSON catalogs into AppState.
//! 2. Sections render from AppState signals; selection and filter state
//!    stay local to their sections.
//! 3. The only network interaction is the contact-form POST.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use folio_ui::components::{
    ContactSection, ErrorBanner, ProjectsSection, SkillsSection, ToastHost,
};
use folio_ui::state::AppState;

const NAV_LINK_STYLE: &str = "color: #444; text-decoration: none;";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting portfolio app");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded catalogs once on mount.
    use_effect(move || {
        match folio_content::load_projects() {
            Ok(projects) => state.projects.set(projects),
            Err(e) => state
                .load_error
                .set(Some(format!("Failed to load project catalog: {}", e))),
        }
        match folio_content::load_skills() {
            Ok(skills) => state.skills.set(skills),
            Err(e) => state
                .load_error
                .set(Some(format!("Failed to load skill catalog: {}", e))),
        }
    });

    rsx! {
        div {
            style: "font-family: system-ui, -apple-system, sans-serif; color: #222; background: white;",

            PageHeader {}

            if let Some(err) = state.load_error.read().as_ref() {
                ErrorBanner { message: err.clone() }
            }

            main {
                ProjectsSection {}
                SkillsSection {}
                ContactSection {}
            }

            PageFooter {}
            ToastHost {}
        }
    }
}

/// Site masthead with anchor links to the three sections.
#[component]
fn PageHeader() -> Element {
    rsx! {
        header {
            style: "position: sticky; top: 0; z-index: 10; padding: 18px 24px; border-bottom: 1px solid #e0e0e0; display: flex; justify-content: space-between; align-items: center; background: white;",
            span {
                style: "font-size: 18px; font-weight: 600;",
                "Alex Moran"
            }
            nav {
                style: "display: flex; gap: 18px; font-size: 14px;",
                a { href: "#projects", style: NAV_LINK_STYLE, "Projects" }
                a { href: "#skills", style: NAV_LINK_STYLE, "Skills" }
                a { href: "#contact", style: NAV_LINK_STYLE, "Contact" }
            }
        }
    }
}

#[component]
fn PageFooter() -> Element {
    rsx! {
        footer {
            style: "padding: 24px; text-align: center; font-size: 13px; color: #888; border-top: 1px solid #e0e0e0;",
            "\u{a9} 2026 Alex Moran. Built with Rust and Dioxus."
        }
    }
}
