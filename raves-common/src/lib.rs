//! raves-common - framework-free filter logic shared by the UI and web crates
//!
//! Holds the genre model, the `with_genres` query contract and the
//! reconciler that decides when a confirmed filter selection needs a URL change.

pub mod error;
pub mod filters;
pub mod genre;

pub use error::FilterError;
pub use filters::*;
pub use genre::{Genre, GenreList, GenreToken};
