//! Text Field Component
//!
//! Full-width read-only single-line input. The preview card uses it to
//! show a snippet the user can select by hand.

use dioxus::prelude::*;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Displayed value
    pub value: String,
    /// Optional element ID
    #[props(default)]
    pub id: Option<String>,
}

/// Read-only text field following the design system
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField { value: snippet.clone() }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let id = props.id.as_deref().unwrap_or("text-field");

    rsx! {
        div { class: "text-field",
            input {
                id: "{id}",
                class: "text-field__input",
                r#type: "text",
                value: "{props.value}",
                readonly: true,
            }
        }
    }
}
