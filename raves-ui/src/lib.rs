//! raves-ui - View components and hooks for the movie discovery front-end
//!
//! Components are props-based: data comes in through props, user intent goes
//! out through `EventHandler`s, and routing stays in the web crate.

pub mod components;
pub mod display_types;
pub mod hooks;
pub mod images;

pub use components::*;
pub use display_types::*;
pub use hooks::use_debounce;
