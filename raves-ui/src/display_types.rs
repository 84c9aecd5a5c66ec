//! Display types for UI components
//!
//! Lightweight shapes of the metadata API's records, holding only what the
//! views render.

use serde::Deserialize;

/// Movie as returned by search and discover endpoints
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl Movie {
    /// Four-digit year from `release_date` (`YYYY-MM-DD`), if present.
    pub fn release_year(&self) -> Option<&str> {
        let date = self.release_date.as_deref()?;
        let year = date.get(..4)?;
        year.chars().all(|c| c.is_ascii_digit()).then_some(year)
    }

    /// Vote average rounded to one decimal, hidden when nobody voted.
    pub fn rating_label(&self) -> Option<String> {
        match self.vote_average {
            Some(v) if v > 0.0 => Some(format!("{:.1}", v)),
            _ => None,
        }
    }
}
