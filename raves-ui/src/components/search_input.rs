//! Search box for the title bar

use crate::components::icons::SearchIcon;
use dioxus::prelude::*;

/// Controlled text input with a leading search icon
#[component]
pub fn SearchInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
) -> Element {
    rsx! {
        label { class: "relative flex items-center w-full max-w-xl",
            span { class: "absolute left-4 text-gray-400 pointer-events-none",
                SearchIcon { class: "w-4 h-4" }
            }
            input {
                r#type: "search",
                class: "w-full bg-gray-900/80 rounded-full pl-10 pr-4 py-2 text-white placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-purple-500/60",
                value: "{value}",
                placeholder,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
