//! Button Component
//!
//! Filled primary action in the theme's primary color, no elevation.

use dioxus::prelude::*;

/// CSS class every button carries.
pub const BUTTON_CLASS: &str = "btn-contained";

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         onclick: move |_| copy(),
///         "Copy Text"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(BUTTON_CLASS, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Append optional extra classes to a base class.
pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}
