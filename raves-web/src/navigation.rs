//! Router-backed navigation for the filter dialog

use crate::Route;
use dioxus::prelude::*;
use raves_common::{QueryParams, WITH_GENRES};
use tracing::warn;

pub(crate) const SEARCH_PATH: &str = "/search";

/// Pushes `path?query` onto the app router.
pub struct RouterNavigator;

impl raves_common::Navigator for RouterNavigator {
    fn navigate(&mut self, path: &str, query: &str) {
        match route_for(path, query) {
            Some(route) => {
                navigator().push(route);
            }
            None => warn!("Not navigating to unroutable {}?{}", path, query),
        }
    }
}

/// Build the typed route for `path` with an encoded `query`.
///
/// Search params are decoded here and handed to the route as values, so
/// reserved characters in the search text reach the page intact.
pub(crate) fn route_for(path: &str, query: &str) -> Option<Route> {
    if path == SEARCH_PATH {
        let params = QueryParams::parse(query);
        return Some(Route::Search {
            q: params.get("q").map(str::to_string),
            with_genres: params.get(WITH_GENRES).map(str::to_string),
        });
    }
    path.parse::<Route>().ok()
}
