//! Circular progress indicator

use dioxus::prelude::*;

/// Spinner shown while something loads. Hidden rather than unmounted.
#[component]
pub fn Spinner(
    /// Whether the spinner is displayed
    #[props(default = true)]
    visible: bool,
    /// Accessible label announced while loading
    #[props(default = "Loading".to_string())]
    label: String,
) -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "progressbar",
            "aria-label": "{label}",
            "aria-hidden": if visible { "false" } else { "true" },
            style: if visible { "" } else { "display: none;" },
        }
    }
}
