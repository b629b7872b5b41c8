//! Transient notification host.
//!
//! Renders the current toast from AppState in the page corner. Toasts
//! auto-dismiss (see `AppState::show_toast`); the close button dismisses
//! early.

use crate::state::{AppState, ToastKind};
use dioxus::prelude::*;

/// Fixed-position host for the current toast, if any.
#[component]
pub fn ToastHost() -> Element {
    let mut state = use_context::<AppState>();
    let Some(toast) = state.toast.read().clone() else {
        return rsx! {};
    };

    let (background, color, border) = match toast.kind {
        ToastKind::Success => ("#E8F5E9", "#2E7D32", "#A5D6A7"),
        ToastKind::Error => ("#FFEBEE", "#C62828", "#EF9A9A"),
    };

    rsx! {
        div {
            style: "position: fixed; bottom: 24px; right: 24px; z-index: 60; max-width: 360px; padding: 14px 16px; background: {background}; color: {color}; border: 1px solid {border}; border-radius: 6px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); display: flex; gap: 12px; align-items: flex-start;",
            div {
                strong { "{toast.title}" }
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px;",
                    "{toast.body}"
                }
            }
            button {
                style: "background: none; border: none; cursor: pointer; color: {color}; font-size: 16px; line-height: 1; padding: 0;",
                onclick: move |_| state.toast.set(None),
                "\u{d7}"
            }
        }
    }
}
