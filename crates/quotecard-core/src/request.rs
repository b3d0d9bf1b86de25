//! Request URL for the remote rendering service.
//!
//! The query string follows a fixed inclusion table: five required
//! parameters, then optional ones each guarded by its own predicate.
//!
//! | param         | included when                                  |
//! |---------------|------------------------------------------------|
//! | theme         | always                                         |
//! | animation     | always                                         |
//! | layout        | always                                         |
//! | font          | always                                         |
//! | quoteType     | always                                         |
//! | bgColor       | provided                                       |
//! | fontColor     | provided                                       |
//! | borderColor   | layout is `default` and provided               |
//! | bgSource      | bgSource is `unsplash`                         |
//! | unsplashQuery | bgSource is `unsplash` and provided            |

use url::Url;

use crate::config::{AppSettings, QuoteConfig, UNSPLASH};

/// Path of the rendering endpoint, relative to the origin.
pub const QUOTE_PATH: &str = "quote";

type ParamValue = for<'a> fn(&'a QuoteConfig) -> Option<&'a str>;

fn theme(c: &QuoteConfig) -> Option<&str> {
    Some(&c.theme)
}

fn animation(c: &QuoteConfig) -> Option<&str> {
    Some(&c.animation)
}

fn layout(c: &QuoteConfig) -> Option<&str> {
    Some(&c.layout)
}

fn font(c: &QuoteConfig) -> Option<&str> {
    Some(&c.font)
}

fn quote_type(c: &QuoteConfig) -> Option<&str> {
    Some(&c.quote_type)
}

fn bg_source(c: &QuoteConfig) -> Option<&str> {
    c.is_unsplash().then_some(UNSPLASH)
}

fn unsplash_query(c: &QuoteConfig) -> Option<&str> {
    if c.is_unsplash() {
        c.unsplash_query()
    } else {
        None
    }
}

/// Ordered query schema. A parameter is emitted when its accessor yields a
/// value; the accessor owns the gating predicate.
const QUERY_SCHEMA: [(&str, ParamValue); 10] = [
    ("theme", theme),
    ("animation", animation),
    ("layout", layout),
    ("font", font),
    ("quoteType", quote_type),
    ("bgColor", QuoteConfig::bg_color),
    ("fontColor", QuoteConfig::font_color),
    ("borderColor", QuoteConfig::effective_border_color),
    ("bgSource", bg_source),
    ("unsplashQuery", unsplash_query),
];

/// Names of the parameters sent on every request.
pub const REQUIRED_PARAMS: [&str; 5] = ["theme", "animation", "layout", "font", "quoteType"];

/// Query parameters for `config`, in schema order.
pub fn query_params(config: &QuoteConfig) -> Vec<(&'static str, &str)> {
    QUERY_SCHEMA
        .iter()
        .filter_map(|(name, value)| value(config).map(|v| (*name, v)))
        .collect()
}

/// A fully assembled request against the rendering service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    url: Url,
}

impl QuoteRequest {
    pub fn new(settings: &AppSettings, config: &QuoteConfig) -> Self {
        let mut url = settings.origin().clone();
        // `AppSettings` guarantees the origin can be a base, so this is Ok.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(QUOTE_PATH);
        }
        url.set_query(None);
        url.set_fragment(None);

        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query_params(config) {
                pairs.append_pair(name, value);
            }
        }

        Self { url }
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Markdown image embed for README files.
    pub fn markdown(&self) -> String {
        markdown_embed(self.url())
    }
}

/// `![Quote](<url>)`, byte for byte.
pub fn markdown_embed(url: &str) -> String {
    format!("![Quote]({})", url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AppSettings {
        AppSettings::new("http://localhost:3004").unwrap()
    }

    fn base() -> QuoteConfig {
        QuoteConfig {
            theme: "dark".to_string(),
            animation: "fade".to_string(),
            layout: "default".to_string(),
            font: "serif".to_string(),
            quote_type: "motivational".to_string(),
            ..QuoteConfig::default()
        }
    }

    #[test]
    fn border_color_example() {
        let config = QuoteConfig {
            border_color: Some("#fff".to_string()),
            ..base()
        };
        let request = QuoteRequest::new(&settings(), &config);
        assert_eq!(
            request.url(),
            "http://localhost:3004/quote?theme=dark&animation=fade&layout=default&font=serif&quoteType=motivational&borderColor=%23fff"
        );
    }

    #[test]
    fn markdown_wraps_url() {
        let request = QuoteRequest::new(&settings(), &base());
        assert_eq!(request.markdown(), format!("![Quote]({})", request.url()));
    }

    #[test]
    fn border_color_dropped_off_default_layout() {
        let config = QuoteConfig {
            layout: "churchill".to_string(),
            border_color: Some("#fff".to_string()),
            ..base()
        };
        let request = QuoteRequest::new(&settings(), &config);
        assert!(!request.url().contains("borderColor"));
    }

    #[test]
    fn unsplash_params() {
        let config = QuoteConfig {
            bg_source: Some("unsplash".to_string()),
            unsplash_query: Some("mountain lake".to_string()),
            ..base()
        };
        let request = QuoteRequest::new(&settings(), &config);
        assert!(request
            .url()
            .ends_with("&bgSource=unsplash&unsplashQuery=mountain+lake"));
    }

    #[test]
    fn unsplash_query_requires_unsplash_source() {
        let config = QuoteConfig {
            bg_source: Some("solid".to_string()),
            unsplash_query: Some("ocean".to_string()),
            ..base()
        };
        let names: Vec<_> = query_params(&config).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, REQUIRED_PARAMS);
    }

    #[test]
    fn colors_in_schema_order() {
        let config = QuoteConfig {
            font_color: Some("#000".to_string()),
            bg_color: Some("#eee".to_string()),
            ..base()
        };
        let request = QuoteRequest::new(&settings(), &config);
        assert!(request
            .url()
            .ends_with("quoteType=motivational&bgColor=%23eee&fontColor=%23000"));
    }

    #[test]
    fn origin_with_path_and_trailing_slash() {
        let settings = AppSettings::new("https://example.com/api/").unwrap();
        let request = QuoteRequest::new(&settings, &base());
        assert!(request.url().starts_with("https://example.com/api/quote?theme=dark"));
    }
}
