//! Web front-end configuration
//!
//! Values are baked in at build time: `RAVES_IMAGE_BASE_URL` and
//! `RAVES_SEARCH_DEBOUNCE_MS` override the defaults when set in the build
//! environment.

use raves_ui::images::TMDB_IMAGE_BASE_URL;
use tracing::warn;

const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Clone, Debug, PartialEq)]
pub struct WebConfig {
    /// Image host prefix for poster and backdrop paths
    pub image_base_url: String,
    /// Idle time after the last keystroke before a search is run
    pub search_debounce_ms: u64,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            image_base_url: TMDB_IMAGE_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl WebConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("RAVES_IMAGE_BASE_URL"),
            option_env!("RAVES_SEARCH_DEBOUNCE_MS"),
        )
    }

    fn from_values(image_base_url: Option<&str>, search_debounce_ms: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = image_base_url.filter(|u| !u.trim().is_empty()) {
            config.image_base_url = url.trim().to_string();
        }

        if let Some(raw) = search_debounce_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.search_debounce_ms = ms,
                Err(e) => warn!(
                    "Invalid RAVES_SEARCH_DEBOUNCE_MS {:?}, using {}ms: {}",
                    raw, DEFAULT_SEARCH_DEBOUNCE_MS, e
                ),
            }
        }

        config
    }
}
