mod home;
mod layout;
mod movie_detail;
mod search;

pub use home::Home;
pub use layout::AppLayout;
pub use movie_detail::MovieDetail;
pub use search::Search;
