//! Modal host for the filter dialog
//!
//! Rendered as a native `<dialog>` shown with `showModal()`, which gives the
//! top layer, focus trapping and a `::backdrop`. The browser's `open`
//! attribute is compared with `is_open` before every call because
//! `showModal()` throws on a dialog that is already open.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use tracing::{trace, warn};
use wasm_bindgen_x::JsCast;

static DIALOG_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Centered modal over a dimmed backdrop.
///
/// Pressing Escape or clicking outside the panel calls `on_close`; the caller
/// decides whether that flips `is_open`.
#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    on_close: EventHandler<()>,
    /// Id of the element that names the dialog for assistive tech
    #[props(default)]
    labelled_by: Option<&'static str>,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| {
        let n = DIALOG_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("raves-dialog-{n}")
    });

    let effect_id = dialog_id.clone();
    use_effect(move || {
        let open = is_open();
        match dialog_element(&effect_id) {
            Some(dialog) => sync_dialog(&dialog, open),
            None => trace!("Dialog {} not mounted yet", effect_id),
        }
    });

    // The <dialog> keeps its native display:none when closed, so layout
    // classes go on the inner overlay only.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80",
            aria_modal: "true",
            aria_labelledby: labelled_by,
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}

fn dialog_element(id: &str) -> Option<web_sys_x::Element> {
    web_sys_x::window()?.document()?.get_element_by_id(id)
}

/// Bring the native dialog in line with `open`.
fn sync_dialog(dialog: &web_sys_x::Element, open: bool) {
    if dialog.has_attribute("open") == open {
        return;
    }
    let method = if open { "showModal" } else { "close" };
    let function = js_sys_x::Reflect::get(dialog, &method.into())
        .ok()
        .and_then(|value| value.dyn_into::<js_sys_x::Function>().ok());
    match function {
        Some(function) => {
            if let Err(e) = function.call0(dialog) {
                warn!("dialog.{}() failed: {:?}", method, e);
            }
        }
        None => warn!("dialog.{}() is not available", method),
    }
}
