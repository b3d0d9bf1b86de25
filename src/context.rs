//! Launch context for the quote card preview.
//!
//! Settings and the initial card are fixed on the command line and handed
//! to the component tree as root contexts.
//!
//! ## Usage
//!
//! ```ignore
//! // In main
//! dioxus::LaunchBuilder::desktop()
//!     .with_context(settings)
//!     .with_context(InitialCard(config))
//!     .launch(App);
//!
//! // In child components
//! let settings = use_settings();
//! ```

use dioxus::prelude::*;
use quotecard_core::{AppSettings, QuoteConfig};

/// Card configuration the application opens with.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialCard(pub QuoteConfig);

/// Hook to access the rendering service settings from context.
pub fn use_settings() -> AppSettings {
    use_context::<AppSettings>()
}

/// Hook to access the configuration chosen at launch.
pub fn use_initial_card() -> QuoteConfig {
    use_context::<InitialCard>().0
}
