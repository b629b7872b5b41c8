//! Inline SVG icon component over the static icon dictionary.

use crate::icons;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    /// Key into the icon dictionary; unknown keys render the fallback glyph.
    pub name: String,
    /// Square size in pixels.
    #[props(default = 20)]
    pub size: u32,
    /// Stroke color.
    #[props(default = String::from("#2196F3"))]
    pub color: String,
}

/// A stroked 24x24 SVG icon looked up from the static dictionary.
#[component]
pub fn Icon(props: IconProps) -> Element {
    rsx! {
        svg {
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{props.color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: icons::icon_path(&props.name) }
        }
    }
}
