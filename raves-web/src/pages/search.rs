use crate::config::WebConfig;
use crate::navigation::{RouterNavigator, SEARCH_PATH};
use crate::Route;
use dioxus::prelude::*;
use raves_common::{Genre, Navigator, QueryParams, WITH_GENRES};
use raves_ui::{use_filter_dialog, FilterDialogView, Movie, MovieSearchResultsView};

/// Query params of a search route, in the order the route declares them.
fn search_query_params(q: Option<&str>, with_genres: Option<&str>) -> QueryParams {
    let pairs = [("q", q), (WITH_GENRES, with_genres)];
    QueryParams::from_pairs(pairs.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))))
}

#[component]
pub fn Search(q: Option<String>, with_genres: Option<String>) -> Element {
    let config = use_context::<WebConfig>();
    let movies: Signal<Vec<Movie>> = use_context();
    let genres = use_hook(Genre::tmdb_movie_genres);

    let query = search_query_params(q.as_deref(), with_genres.as_deref());
    let filter_dialog = use_filter_dialog(query.clone());

    rsx! {
        MovieSearchResultsView {
            movies: movies(),
            input_query: q.unwrap_or_default(),
            filter_dialog,
            on_movie_click: move |movie_id| {
                navigator().push(Route::MovieDetail { movie_id });
            },
            image_base_url: config.image_base_url.clone(),
        }
        FilterDialogView {
            handle: filter_dialog,
            genres,
            query,
            path: SEARCH_PATH.to_string(),
            on_navigate: move |(path, query): (String, String)| {
                RouterNavigator.navigate(&path, &query);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_params_both() {
        let params = search_query_params(Some("heat"), Some("80,18"));
        assert_eq!(params.get("q"), Some("heat"));
        assert_eq!(params.get(WITH_GENRES), Some("80,18"));
        assert_eq!(params.to_query_string().unwrap(), "q=heat&with_genres=80%2C18");
    }

    #[test]
    fn test_search_query_params_skips_missing() {
        let params = search_query_params(Some("heat"), None);
        assert_eq!(params.applied_genres(), None);
        assert_eq!(params.to_query_string().unwrap(), "q=heat");
    }

    #[test]
    fn test_search_query_params_empty() {
        assert!(search_query_params(None, None).is_empty());
    }
}
