//! Pill buttons

use dioxus::prelude::*;

/// Unstyled button carrying the disabled/aria wiring shared by every button.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            disabled,
            aria_disabled: if disabled { Some("true") } else { None },
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Purple fill - confirm and other primary actions
    Primary,
    /// Light gray fill with dark text - secondary actions like clearing
    Secondary,
}

/// Rounded-full button with the app's palette
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] full_width: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 py-2 px-4 rounded-full font-medium transition-colors";

    let variant_class = match (variant, disabled) {
        (ButtonVariant::Primary, false) => "bg-purple-500 hover:bg-purple-700 text-white",
        (ButtonVariant::Primary, true) => "bg-purple-500/50 text-white/70 cursor-not-allowed",
        (ButtonVariant::Secondary, false) => "bg-gray-400 hover:bg-gray-300 text-black",
        (ButtonVariant::Secondary, true) => "bg-gray-400/50 text-black cursor-not-allowed",
    };

    let width = if full_width { "w-full" } else { "" };

    let computed_class = format!("{base} {variant_class} {width}");

    rsx! {
        ChromelessButton { disabled, class: Some(computed_class), onclick, {children} }
    }
}
