//! Search results page body

use crate::components::filter_dialog::{FilterButton, FilterDialogHandle};
use crate::components::movie_card::MovieCard;
use crate::display_types::Movie;
use crate::images::TMDB_IMAGE_BASE_URL;
use dioxus::prelude::*;

/// Heading, filter trigger and a grid of movie cards
#[component]
pub fn MovieSearchResultsView(
    movies: Vec<Movie>,
    input_query: String,
    filter_dialog: FilterDialogHandle,
    on_movie_click: EventHandler<i64>,
    #[props(default = TMDB_IMAGE_BASE_URL.to_string())] image_base_url: String,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-950 pt-[18vh] px-24 pb-24",
            div { class: "flex gap-8 items-center mb-5",
                h1 { class: "text-white text-[2.5vw] overflow-hidden flex items-center gap-4 before:block before:h-8 before:w-1 before:bg-purple-500",
                    "Showing results for \"{input_query}\""
                }
                FilterButton { handle: filter_dialog }
            }
            if movies.is_empty() {
                p { class: "text-gray-400", "No movies found." }
            } else {
                div { class: "grid grid-cols-4 gap-16 text-white",
                    for movie in movies {
                        MovieCard {
                            key: "{movie.id}",
                            movie: movie.clone(),
                            on_click: on_movie_click,
                            image_base_url: image_base_url.clone(),
                        }
                    }
                }
            }
        }
    }
}
