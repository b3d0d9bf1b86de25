//! Quote Card Core Library
//!
//! Pure logic behind the quote card preview: configuration, style
//! registries, the local SVG template and the request URL sent to the
//! remote rendering service.
//!
//! ## Overview
//!
//! A [`QuoteConfig`] is resolved into a [`RenderDescriptor`], which renders
//! to an SVG document for an immediate local preview. The same config is
//! serialized into a [`QuoteRequest`] whose URL is embedded in a markdown
//! snippet for README files.
//!
//! ## Quick Start
//!
//! ```
//! use quotecard_core::{AppSettings, QuoteConfig, QuoteRequest, RenderDescriptor};
//!
//! let settings = AppSettings::new("http://localhost:3004").unwrap();
//! let config = QuoteConfig::default();
//!
//! let svg = quotecard_core::render_svg(&RenderDescriptor::from_config(&config));
//! assert!(svg.starts_with("<svg"));
//!
//! let request = QuoteRequest::new(&settings, &config);
//! assert!(request.markdown().starts_with("![Quote](http://localhost:3004/quote?"));
//! ```

pub mod clipboard;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod preview;
pub mod registry;
pub mod request;
pub mod template;

// Re-exports
pub use clipboard::{copy_text, ClipboardSink};
pub use config::{AppSettings, QuoteConfig, DEFAULT_ORIGIN, ORIGIN_ENV};
pub use descriptor::{QuoteData, RenderDescriptor};
pub use error::{ClipboardError, ConfigError, QuoteResult};
pub use preview::{PreviewState, ToastGeneration, COPY_FAILURE, COPY_SUCCESS, TOAST_AUTO_HIDE};
pub use request::{markdown_embed, query_params, QuoteRequest};
pub use template::{render_svg, svg_data_uri};
