//! Movie card component - pure view with a click callback

use crate::components::icons::{FilmIcon, StarIcon};
use crate::display_types::Movie;
use crate::images::{image_url, ImageSize, TMDB_IMAGE_BASE_URL};
use dioxus::prelude::*;

/// Poster, title, year and rating for one search result.
///
/// Navigation to the detail page is left to `on_click`, which receives the
/// movie id.
#[component]
pub fn MovieCard(
    movie: Movie,
    on_click: EventHandler<i64>,
    #[props(default = TMDB_IMAGE_BASE_URL.to_string())] image_base_url: String,
) -> Element {
    let movie_id = movie.id;
    let title = movie.title.clone();
    let poster = image_url(&image_base_url, ImageSize::Poster, movie.poster_path.as_deref());
    let year = movie.release_year().map(str::to_string);
    let rating = movie.rating_label();

    rsx! {
        div {
            class: "flex flex-col gap-4 cursor-pointer group",
            "data-testid": "movie-card",
            onclick: move |_| on_click.call(movie_id),
            div { class: "aspect-[2/3] bg-gray-800 rounded-lg overflow-hidden flex items-center justify-center",
                if let Some(url) = poster {
                    img {
                        src: "{url}",
                        alt: "Poster for {title}",
                        loading: "lazy",
                        class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-300",
                    }
                } else {
                    FilmIcon { class: "w-12 h-12 text-gray-600" }
                }
            }
            div {
                h3 { class: "font-semibold text-white text-lg truncate", title: "{title}", "{title}" }
                div { class: "flex items-center gap-3 text-sm text-gray-400",
                    if let Some(year) = year {
                        span { "{year}" }
                    }
                    if let Some(rating) = rating {
                        span { class: "flex items-center gap-1",
                            StarIcon { class: "w-4 h-4 text-yellow-400" }
                            "{rating}"
                        }
                    }
                }
            }
        }
    }
}
