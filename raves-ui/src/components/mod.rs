//! Shared UI components

pub mod button;
pub mod filter_dialog;
pub mod genre_filter;
pub mod icons;
pub mod modal;
pub mod movie_backdrop;
pub mod movie_card;
pub mod movie_search_results;
pub mod search_input;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use filter_dialog::{use_filter_dialog, FilterButton, FilterDialogHandle, FilterDialogView};
pub use genre_filter::GenreFilterChip;
pub use icons::{FilmIcon, FilterIcon, SearchIcon, StarIcon};
pub use modal::Modal;
pub use movie_backdrop::MovieBackdrop;
pub use movie_card::MovieCard;
pub use movie_search_results::MovieSearchResultsView;
pub use search_input::SearchInput;
