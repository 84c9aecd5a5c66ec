use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center text-gray-400",
            "Search for a movie to get started."
        }
    }
}
