//! Category filter buttons for the skills grid.

use crate::state::AppState;
use dioxus::prelude::*;
use folio_model::CategoryFilter;

const ACTIVE_STYLE: &str = "padding: 8px 18px; border-radius: 18px; border: 1px solid #2196F3; background: #2196F3; color: white; cursor: pointer; font-size: 14px;";
const INACTIVE_STYLE: &str = "padding: 8px 18px; border-radius: 18px; border: 1px solid #ccc; background: white; color: #444; cursor: pointer; font-size: 14px;";

/// Row of filter buttons; the active filter is highlighted.
/// Writes the selection straight into AppState.
#[component]
pub fn CategoryFilterBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_filter)();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 10px; margin-bottom: 32px;",
            for filter in CategoryFilter::ALL {
                button {
                    style: if filter == active { ACTIVE_STYLE } else { INACTIVE_STYLE },
                    onclick: move |_| state.active_filter.set(filter),
                    "{filter.label()}"
                }
            }
        }
    }
}
