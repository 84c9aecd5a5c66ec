use crate::config::WebConfig;
use dioxus::prelude::*;
use raves_ui::{Movie, MovieBackdrop};

#[component]
pub fn MovieDetail(movie_id: i64) -> Element {
    let config = use_context::<WebConfig>();
    let movies: Signal<Vec<Movie>> = use_context();
    let movie = movies.read().iter().find(|m| m.id == movie_id).cloned();

    let Some(movie) = movie else {
        return rsx! {
            div { class: "min-h-screen flex items-center justify-center text-gray-400",
                "Movie not found."
            }
        };
    };

    rsx! {
        div { class: "relative min-h-screen overflow-hidden",
            MovieBackdrop {
                backdrop_path: movie.backdrop_path.clone(),
                image_base_url: config.image_base_url.clone(),
            }
            div { class: "relative z-[1] min-h-screen bg-black/60 pt-[18vh] px-24 text-white",
                h1 { class: "text-5xl font-bold mb-4", "{movie.title}" }
                if let Some(year) = movie.release_year() {
                    p { class: "text-gray-300 mb-6", "{year}" }
                }
                if let Some(overview) = &movie.overview {
                    p { class: "max-w-2xl text-lg text-gray-200", "{overview}" }
                }
            }
        }
    }
}
