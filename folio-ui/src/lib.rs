//! Shared Dioxus components and reactive state for the portfolio site.
//!
//! This crate provides:
//! - `js_bridge`: scroll-lock and endpoint helpers over `js_sys::eval()` and `web-sys`
//! - `state`: reactive AppState with Dioxus Signals
//! - `icons`: static icon-name -> SVG glyph dictionary
//! - `components`: reusable RSX components (sections, cards, form, overlay, toast)

pub mod components;
pub mod icons;
pub mod js_bridge;
pub mod state;
