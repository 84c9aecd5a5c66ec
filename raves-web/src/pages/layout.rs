use crate::config::WebConfig;
use crate::Route;
use dioxus::prelude::*;
use raves_ui::{use_debounce, SearchInput};

#[component]
pub fn AppLayout() -> Element {
    let config = use_context::<WebConfig>();
    let current_route = use_route::<Route>();

    let initial_query = match &current_route {
        Route::Search { q, .. } => q.clone().unwrap_or_default(),
        _ => String::new(),
    };
    let mut search_input = use_signal(move || initial_query);
    let debounced = use_debounce(search_input(), config.search_debounce_ms);
    let term = debounced();

    use_effect(use_reactive!(|(term,)| {
        let term = term.trim().to_string();
        let (current_q, with_genres) = match router().current::<Route>() {
            Route::Search { q, with_genres } => (q.unwrap_or_default(), with_genres),
            _ => (String::new(), None),
        };
        if term.is_empty() || term == current_q {
            return;
        }
        tracing::debug!("Searching for {:?}", term);
        navigator().push(Route::Search {
            q: Some(term),
            with_genres,
        });
    }));

    rsx! {
        div { class: "fixed top-0 inset-x-0 z-10 flex items-center gap-8 px-24 py-6 bg-gradient-to-b from-black/80 to-transparent",
            Link { to: Route::Home {}, class: "text-2xl font-bold text-white", "Raves" }
            SearchInput {
                value: search_input(),
                on_input: move |value: String| search_input.set(value),
                placeholder: Some("Search movies"),
            }
        }
        Outlet::<Route> {}
    }
}
