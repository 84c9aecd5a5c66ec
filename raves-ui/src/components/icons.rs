//! Inline SVG icons (Lucide/Tabler outlines)

use dioxus::prelude::*;

/// Funnel icon for the filter trigger
#[component]
pub fn FilterIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "M20 3H4a1 1 0 0 0-1 1v2.59a1 1 0 0 0 .29.7L9 13v7a1 1 0 0 0 1.45.89l4-2A1 1 0 0 0 15 18v-5l5.71-5.71a1 1 0 0 0 .29-.7V4a1 1 0 0 0-1-1z" }
        }
    }
}

/// Film strip placeholder for missing posters
#[component]
pub fn FilmIcon(#[props(default = "w-12 h-12")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { x: "2", y: "2", width: "20", height: "20", rx: "2.18", ry: "2.18" }
            path { d: "M7 2v20" }
            path { d: "M17 2v20" }
            path { d: "M2 12h20" }
            path { d: "M2 7h5" }
            path { d: "M2 17h5" }
            path { d: "M17 17h5" }
            path { d: "M17 7h5" }
        }
    }
}

#[component]
pub fn StarIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" }
        }
    }
}

#[component]
pub fn SearchIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}
