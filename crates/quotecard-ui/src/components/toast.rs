//! Toast notification
//!
//! A message that slides up from the bottom edge. The component only
//! renders; when to open and close it is the owner's state.

use dioxus::prelude::*;

/// Properties for the Toast component
#[derive(Clone, PartialEq, Props)]
pub struct ToastProps {
    /// Whether the toast is shown
    pub open: bool,
    /// Message text
    pub message: String,
    /// Called when the user dismisses the toast
    #[props(default)]
    pub onclose: Option<EventHandler<()>>,
}

/// CSS class for the toast in the given open state.
pub fn toast_class(open: bool) -> &'static str {
    if open {
        "toast toast--open"
    } else {
        "toast"
    }
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    rsx! {
        div {
            class: toast_class(props.open),
            role: "status",
            "aria-live": "polite",
            onclick: move |_| {
                if let Some(handler) = &props.onclose {
                    handler.call(());
                }
            },
            span { class: "toast__message", "{props.message}" }
        }
    }
}
