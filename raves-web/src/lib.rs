pub mod config;
pub mod navigation;
pub mod pages;

use config::WebConfig;
use dioxus::prelude::*;
use pages::{AppLayout, Home, MovieDetail, Search};
use raves_ui::Movie;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/search?:q&:with_genres")]
    Search { q: Option<String>, with_genres: Option<String> },
    #[route("/movie/:movie_id")]
    MovieDetail { movie_id: i64 },
}

#[component]
pub fn App() -> Element {
    use_context_provider(WebConfig::from_build_env);
    // Filled by the host's fetch layer; the views only read it.
    use_context_provider(|| Signal::new(Vec::<Movie>::new()));

    rsx! {
        document::Title { "Raves Movies" }
        document::Meta { name: "description", content: "Movie Website" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-gray-950 font-sans", Router::<Route> {} }
    }
}
