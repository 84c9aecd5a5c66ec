use crate::components::button::ChromelessButton;
use dioxus::prelude::*;
use raves_common::Genre;

/// Selectable genre pill inside the filter dialog
#[component]
pub fn GenreFilterChip(genre: Genre, is_selected: bool, on_toggle: EventHandler<i64>) -> Element {
    let class = if is_selected {
        "px-4 py-1.5 rounded-full border border-purple-500 bg-purple-500 text-white text-sm transition-colors"
    } else {
        "px-4 py-1.5 rounded-full border border-gray-600 text-gray-300 hover:border-purple-400 hover:text-white text-sm transition-colors"
    };
    let genre_id = genre.id;

    rsx! {
        ChromelessButton {
            class: Some(class.to_string()),
            aria_pressed: Some(is_selected),
            onclick: move |_| on_toggle.call(genre_id),
            "{genre.name}"
        }
    }
}
