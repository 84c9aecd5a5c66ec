//! Genre filter dialog
//!
//! - **`use_filter_dialog()`**: hook returning a `FilterDialogHandle`, the one
//!   shared object holding the dialog's open flag and working selection.
//! - **`FilterButton`**: the trigger. Only opens the dialog.
//! - **`FilterDialogView`**: the dialog. Toggles, clears, confirms, dismisses.
//!
//! The handle is passed to both as a prop; nothing else may change the open
//! flag. The applied filter always comes from the `query` prop, which the
//! dialog observes and feeds back into the reconciler when it changes.

use crate::components::button::{Button, ButtonVariant};
use crate::components::genre_filter::GenreFilterChip;
use crate::components::icons::FilterIcon;
use crate::components::modal::Modal;
use dioxus::prelude::*;
use raves_common::{ConfirmOutcome, FilterError, FilterReconciler, Genre, Navigator, QueryParams};
use tracing::error;

const TITLE_ID: &str = "filter-dialog-title";

/// Shared handle to the filter dialog state.
#[derive(Clone, Copy, PartialEq)]
pub struct FilterDialogHandle {
    state: Signal<FilterReconciler>,
}

impl FilterDialogHandle {
    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    pub fn is_selected(&self, genre_id: i64) -> bool {
        self.state.read().working().contains(genre_id)
    }

    pub fn can_clear(&self) -> bool {
        self.state.read().can_clear()
    }

    pub fn open(&self) {
        let mut state = self.state;
        state.write().open();
    }

    pub fn dismiss(&self) {
        let mut state = self.state;
        state.write().dismiss();
    }

    pub fn toggle(&self, genre_id: i64) {
        let mut state = self.state;
        state.write().toggle(genre_id);
    }

    pub fn clear(&self) {
        let mut state = self.state;
        state.write().clear();
    }

    pub fn observe_query(&self, query: QueryParams) {
        let mut state = self.state;
        state.write().observe_query(query);
    }

    pub fn confirm<N>(&self, path: &str, navigator: &mut N) -> Result<ConfirmOutcome, FilterError>
    where
        N: Navigator + ?Sized,
    {
        let mut state = self.state;
        let result = state.write().confirm(path, navigator);
        result
    }
}

/// Hook that creates the dialog state, seeded from the current query.
pub fn use_filter_dialog(query: QueryParams) -> FilterDialogHandle {
    let state = use_signal(move || FilterReconciler::new(query));
    FilterDialogHandle { state }
}

/// "Filter" pill that opens the dialog
#[component]
pub fn FilterButton(handle: FilterDialogHandle) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "px-6 py-2 bg-purple-500 rounded-full flex items-center gap-3 hover:bg-purple-800 text-white",
            aria_haspopup: "dialog",
            onclick: move |_| handle.open(),
            span { "Filter" }
            FilterIcon { class: "w-6 h-6" }
        }
    }
}

/// Modal listing every genre with a clear and a confirm action
#[component]
pub fn FilterDialogView(
    handle: FilterDialogHandle,
    /// Catalog of selectable genres, in display order
    genres: Vec<Genre>,
    /// Query string of the current page
    query: QueryParams,
    /// Path of the current page; confirm navigates back to it
    path: String,
    /// Called with `(path, query)` on every confirm
    on_navigate: EventHandler<(String, String)>,
) -> Element {
    use_effect(use_reactive!(|(query,)| {
        handle.observe_query(query);
    }));

    let is_open_memo = use_memo(move || handle.is_open());
    let is_open: ReadSignal<bool> = is_open_memo.into();
    let can_clear = handle.can_clear();

    rsx! {
        Modal {
            is_open,
            on_close: move |_| handle.dismiss(),
            labelled_by: Some(TITLE_ID),
            div { class: "bg-gray-950 border border-gray-950 rounded-lg p-6 w-full max-w-lg mx-4",
                div { class: "text-white flex justify-between items-center pt-2",
                    h2 { id: TITLE_ID, class: "text-lg font-semibold", "Select Filters" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: !can_clear,
                        onclick: move |_| handle.clear(),
                        "Clear Filters"
                    }
                }
                div { class: "flex flex-wrap items-center py-8 gap-2",
                    for genre in genres {
                        GenreFilterChip {
                            key: "{genre.id}",
                            is_selected: handle.is_selected(genre.id),
                            genre: genre.clone(),
                            on_toggle: move |id| handle.toggle(id),
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    full_width: true,
                    onclick: move |_| {
                        let mut navigate = |path: &str, query: &str| {
                            on_navigate.call((path.to_string(), query.to_string()));
                        };
                        if let Err(e) = handle.confirm(&path, &mut navigate) {
                            error!("Applying genre filters failed: {}", e);
                        }
                    },
                    "Confirm"
                }
            }
        }
    }
}
