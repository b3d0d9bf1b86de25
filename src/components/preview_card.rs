//! Preview Card
//!
//! Shows a quote card for a configuration together with the markdown
//! snippet that embeds it in a README:
//! - a locally rendered SVG preview, shown until the remote image loads
//! - the remote image from the rendering service, hidden until loaded
//! - a read-only field with `![Quote](<url>)` and a copy button
//! - a toast reporting the copy result, closing itself after 3 seconds

use dioxus::prelude::*;
use quotecard_core::{
    render_svg, svg_data_uri, AppSettings, PreviewState, QuoteConfig, QuoteRequest,
    RenderDescriptor, TOAST_AUTO_HIDE,
};
use quotecard_ui::{Button, Paper, Spinner, TextField, Toast};

use crate::clipboard::copy_to_system_clipboard;
use crate::context::use_settings;

/// Everything a single render derives from one configuration snapshot.
#[derive(Debug, Clone, PartialEq)]
struct CardView {
    preview_src: String,
    quote_url: String,
    markdown: String,
}

impl CardView {
    fn build(settings: &AppSettings, config: &QuoteConfig) -> Self {
        let svg = render_svg(&RenderDescriptor::from_config(config));
        let request = QuoteRequest::new(settings, config);
        Self {
            preview_src: svg_data_uri(&svg),
            quote_url: request.url().to_string(),
            markdown: request.markdown(),
        }
    }
}

/// Quote card preview with a copyable embed snippet.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PreviewCard { config: QuoteConfig::default() }
/// }
/// ```
#[component]
pub fn PreviewCard(config: QuoteConfig) -> Element {
    let settings = use_settings();
    let mut state = use_signal(PreviewState::new);

    let view = CardView::build(&settings, &config);
    let quote_url = view.quote_url.clone();

    // New request URL, new image: show the spinner until it loads
    use_effect(use_reactive!(|quote_url| {
        if state.write().observe_url(&quote_url) {
            tracing::debug!("Waiting for quote image {}", quote_url);
        }
    }));

    let copy_snippet = {
        let markdown = view.markdown.clone();
        move |_| {
            let text = markdown.clone();
            spawn(async move {
                let message = copy_to_system_clipboard(&text);
                let generation = state.write().show_toast(message);
                tokio::time::sleep(TOAST_AUTO_HIDE).await;
                state.write().dismiss_toast(generation);
            });
        }
    };

    let on_image_load = {
        let url = view.quote_url.clone();
        move |_| {
            state.write().mark_loaded(&url);
        }
    };

    let loaded = state.read().image_loaded();
    let toast_open = state.read().toast_open();
    let toast_message = state.read().toast_message().to_string();

    rsx! {
        Paper { class: "preview-card".to_string(),
            div { class: "preview-card__image",
                img {
                    class: "preview-card__local",
                    src: "{view.preview_src}",
                    alt: "Quote card preview",
                    style: if loaded { "display: none;" } else { "" },
                }
                img {
                    class: "preview-card__remote",
                    src: "{view.quote_url}",
                    alt: "Dynamic Quote for Github Readme",
                    style: if loaded { "" } else { "display: none;" },
                    onload: on_image_load,
                }
                Spinner { visible: !loaded, label: "Loading quote image".to_string() }
            }

            div { class: "preview-card__actions",
                div { class: "preview-card__snippet",
                    TextField {
                        value: view.markdown.clone(),
                        id: "quote-markdown".to_string(),
                    }
                }
                Button {
                    onclick: copy_snippet,
                    "Copy Text"
                }
            }

            Toast {
                open: toast_open,
                message: toast_message,
                onclose: move |_| state.write().close_toast(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AppSettings {
        AppSettings::new("http://localhost:3004").unwrap()
    }

    #[test]
    fn view_markdown_wraps_request_url() {
        let view = CardView::build(&settings(), &QuoteConfig::default());
        assert_eq!(view.markdown, format!("![Quote]({})", view.quote_url));
        assert!(view.preview_src.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn config_change_changes_url_and_resets_loaded() {
        let first = CardView::build(&settings(), &QuoteConfig::default());
        let second = CardView::build(
            &settings(),
            &QuoteConfig {
                theme: "dark".to_string(),
                ..QuoteConfig::default()
            },
        );
        assert_ne!(first.quote_url, second.quote_url);
        assert_ne!(first.preview_src, second.preview_src);

        let mut state = PreviewState::new();
        state.observe_url(&first.quote_url);
        state.mark_loaded(&first.quote_url);
        assert!(state.image_loaded());

        state.observe_url(&second.quote_url);
        assert!(!state.image_loaded());
    }
}
