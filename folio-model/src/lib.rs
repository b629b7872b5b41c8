//! Core types, validation, and the contact API client for the portfolio site.
//!
//! This crate is DOM-free and compiles for both `wasm32-unknown-unknown`
//! (consumed by the Dioxus frontend) and native targets (where the
//! submission path is exercised against a mock HTTP server in tests).
//!
//! - `project`: immutable showcase records
//! - `skill`: skill records, categories, and the grid filter projection
//! - `contact`: the contact-form payload, field validation, and the
//!   `POST /api/contact` submission
//! - `error`: typed validation and submission errors

pub mod contact;
pub mod error;
pub mod project;
pub mod skill;

pub use contact::{
    submit_contact, validate_email, validate_message, validate_name, Availability, ContactChannel,
    ContactMessage, CONTACT_PATH,
};
pub use error::{ContactField, SubmitError, ValidationError};
pub use project::Project;
pub use skill::{filter_skills, CategoryFilter, Skill, SkillCategory};
