use crate::images::{image_url, ImageSize, TMDB_IMAGE_BASE_URL};
use dioxus::prelude::*;

/// Blurred full-size backdrop behind the movie detail header. Renders nothing
/// when the movie has no backdrop.
#[component]
pub fn MovieBackdrop(
    backdrop_path: Option<String>,
    #[props(default = TMDB_IMAGE_BASE_URL.to_string())] image_base_url: String,
) -> Element {
    let Some(url) = image_url(&image_base_url, ImageSize::Original, backdrop_path.as_deref())
    else {
        return rsx! {};
    };

    rsx! {
        img {
            src: "{url}",
            alt: "",
            class: "absolute inset-0 size-full blur-sm object-cover",
        }
    }
}
