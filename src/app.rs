use dioxus::prelude::*;

use crate::components::PreviewCard;
use crate::context::use_initial_card;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and hosts a single preview card for the
/// configuration chosen at launch.
#[component]
pub fn App() -> Element {
    let config = use_initial_card();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "app-shell",
            h1 { class: "page-title", "Quote Card" }
            PreviewCard { config }
        }
    }
}
