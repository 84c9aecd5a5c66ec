//! Genre filter state: the URL contract, the in-progress selection and the
//! reconciler that commits one into the other.

pub mod query;
pub mod reconciler;
pub mod selection;

pub use query::{AppliedSelection, QueryParams, WITH_GENRES};
pub use reconciler::{set_inequality, ConfirmOutcome, DialogPhase, FilterReconciler, Navigator};
pub use selection::WorkingSelection;
