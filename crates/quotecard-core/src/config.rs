//! Quote card configuration.
//!
//! [`QuoteConfig`] is the set of visual and content options a user picks for
//! a card. It is re-supplied whole on every edit and never mutated in place by
//! the preview. [`AppSettings`] carries the runtime settings that are not part
//! of a card, currently just the origin of the rendering service.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, QuoteResult};

/// Origin used when neither the CLI nor the environment names one.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3004";

/// Environment variable consulted for the rendering service origin.
pub const ORIGIN_ENV: &str = "QUOTECARD_ORIGIN";

/// Background source value that enables Unsplash photo backgrounds.
pub const UNSPLASH: &str = "unsplash";

/// Layout id whose border color may be overridden.
pub const DEFAULT_LAYOUT: &str = "default";

/// User-chosen options controlling card appearance.
///
/// Field names serialize in camelCase so a JSON config file reads the same
/// as the query string sent to the rendering service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteConfig {
    pub theme: String,
    pub font: String,
    pub animation: String,
    pub layout: String,
    pub quote_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsplash_query: Option<String>,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            font: "default".to_string(),
            animation: "default".to_string(),
            layout: DEFAULT_LAYOUT.to_string(),
            quote_type: "random".to_string(),
            bg_color: None,
            font_color: None,
            border_color: None,
            bg_source: None,
            unsplash_query: None,
        }
    }
}

/// Treat `None` and empty strings alike: only non-empty values are provided.
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl QuoteConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> QuoteResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded quote configuration");
        Ok(config)
    }

    pub fn bg_color(&self) -> Option<&str> {
        provided(&self.bg_color)
    }

    pub fn font_color(&self) -> Option<&str> {
        provided(&self.font_color)
    }

    /// Raw border color, regardless of layout.
    pub fn border_color(&self) -> Option<&str> {
        provided(&self.border_color)
    }

    pub fn unsplash_query(&self) -> Option<&str> {
        provided(&self.unsplash_query)
    }

    pub fn is_default_layout(&self) -> bool {
        self.layout == DEFAULT_LAYOUT
    }

    pub fn is_unsplash(&self) -> bool {
        self.bg_source.as_deref() == Some(UNSPLASH)
    }

    /// Border color override, honored only on the default layout.
    pub fn effective_border_color(&self) -> Option<&str> {
        if self.is_default_layout() {
            self.border_color()
        } else {
            None
        }
    }
}

/// Runtime settings shared by every card in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    origin: Url,
}

impl AppSettings {
    /// Validate `origin` and build settings around it.
    pub fn new(origin: &str) -> QuoteResult<Self> {
        let url = Url::parse(origin).map_err(|source| ConfigError::InvalidOrigin {
            origin: origin.to_string(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::OriginNotBase(origin.to_string()));
        }
        Ok(Self { origin: url })
    }

    /// Resolve the origin from an explicit value, then the environment,
    /// then [`DEFAULT_ORIGIN`].
    pub fn resolve(explicit: Option<&str>) -> QuoteResult<Self> {
        let from_env = std::env::var(ORIGIN_ENV).ok();
        let origin = explicit
            .or(from_env.as_deref())
            .unwrap_or(DEFAULT_ORIGIN);
        tracing::info!("Rendering service origin: {}", origin);
        Self::new(origin)
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optionals_are_not_provided() {
        let config = QuoteConfig {
            bg_color: Some(String::new()),
            font_color: Some("#333".to_string()),
            ..QuoteConfig::default()
        };
        assert_eq!(config.bg_color(), None);
        assert_eq!(config.font_color(), Some("#333"));
    }

    #[test]
    fn border_color_gated_on_default_layout() {
        let mut config = QuoteConfig {
            border_color: Some("#fff".to_string()),
            ..QuoteConfig::default()
        };
        assert_eq!(config.effective_border_color(), Some("#fff"));

        config.layout = "socrates".to_string();
        assert_eq!(config.border_color(), Some("#fff"));
        assert_eq!(config.effective_border_color(), None);
    }

    #[test]
    fn unsplash_requires_exact_match() {
        let mut config = QuoteConfig::default();
        assert!(!config.is_unsplash());
        config.bg_source = Some("Unsplash".to_string());
        assert!(!config.is_unsplash());
        config.bg_source = Some(UNSPLASH.to_string());
        assert!(config.is_unsplash());
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r##"{
            "theme": "dark",
            "font": "serif",
            "animation": "fade",
            "layout": "default",
            "quoteType": "motivational",
            "borderColor": "#fff"
        }"##;
        let config: QuoteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.quote_type, "motivational");
        assert_eq!(config.border_color.as_deref(), Some("#fff"));
        assert!(config.bg_source.is_none());
    }

    #[test]
    fn settings_reject_bad_origin() {
        assert!(matches!(
            AppSettings::new("not a url"),
            Err(ConfigError::InvalidOrigin { .. })
        ));
        assert!(matches!(
            AppSettings::new("mailto:someone@example.com"),
            Err(ConfigError::OriginNotBase(_))
        ));
    }

    #[test]
    fn settings_explicit_origin_wins() {
        let settings = AppSettings::resolve(Some("https://quotes.example.com")).unwrap();
        assert_eq!(settings.origin().host_str(), Some("quotes.example.com"));
    }

    #[test]
    fn default_origin_is_valid() {
        let settings = AppSettings::new(DEFAULT_ORIGIN).unwrap();
        assert_eq!(settings.origin().as_str(), "http://localhost:3004/");
    }
}
