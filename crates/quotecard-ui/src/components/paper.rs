//! Paper surface

use dioxus::prelude::*;

use super::button::join_classes;

/// Padded surface filling its parent, the outer frame of a card.
#[component]
pub fn Paper(
    children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let full_class = join_classes("paper", class.as_deref());

    rsx! {
        div { class: "{full_class}", {children} }
    }
}
