//! Rendering descriptor: a [`QuoteConfig`] resolved against the registries.

use crate::config::QuoteConfig;
use crate::registry::{Animation, Font, Layout, ANIMATIONS, FONTS, LAYOUTS, THEMES};

/// Border used whenever no override applies.
pub const DEFAULT_BORDER_COLOR: &str = "rgba(0, 0, 0, 0.2)";

pub const PLACEHOLDER_QUOTE: &str = "This is going to be the Github quote for your README";
pub const PLACEHOLDER_AUTHOR: &str = "Open Source";

/// Quote content shown on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteData {
    pub quote: String,
    pub author: String,
}

impl QuoteData {
    /// Fixed content used for local previews.
    pub fn placeholder() -> Self {
        Self {
            quote: PLACEHOLDER_QUOTE.to_string(),
            author: PLACEHOLDER_AUTHOR.to_string(),
        }
    }
}

/// Theme colors after user overrides have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub quote_color: String,
    pub author_color: String,
    pub bg_color: String,
    pub accent_color: String,
}

/// Everything the SVG template needs, rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDescriptor {
    pub theme: ResolvedTheme,
    pub font: Font,
    pub animation: Animation,
    pub layout: Layout,
    pub border_color: String,
    pub data: QuoteData,
}

/// Characters that would let a color value escape its CSS declaration or
/// the stylesheet's CDATA section.
const UNSAFE_COLOR_CHARS: [char; 6] = ['<', '>', '{', '}', ';', ']'];

/// Accept a user color override only if it stays inside one CSS value.
fn css_color(value: Option<&str>) -> Option<&str> {
    let value = value?;
    if value.contains(UNSAFE_COLOR_CHARS) {
        tracing::warn!("Ignoring color override {:?}, using theme color", value);
        return None;
    }
    Some(value)
}

impl RenderDescriptor {
    pub fn from_config(config: &QuoteConfig) -> Self {
        let base = THEMES.resolve(&config.theme);
        let theme = ResolvedTheme {
            quote_color: css_color(config.font_color())
                .unwrap_or(base.quote_color)
                .to_string(),
            author_color: base.author_color.to_string(),
            bg_color: css_color(config.bg_color())
                .unwrap_or(base.bg_color)
                .to_string(),
            accent_color: base.accent_color.to_string(),
        };

        let border_color = css_color(config.effective_border_color())
            .unwrap_or(DEFAULT_BORDER_COLOR)
            .to_string();

        Self {
            theme,
            font: *FONTS.resolve(&config.font),
            animation: *ANIMATIONS.resolve(&config.animation),
            layout: *LAYOUTS.resolve(&config.layout),
            border_color,
            data: QuoteData::placeholder(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LayoutKind;

    fn config(theme: &str, layout: &str) -> QuoteConfig {
        QuoteConfig {
            theme: theme.to_string(),
            layout: layout.to_string(),
            ..QuoteConfig::default()
        }
    }

    #[test]
    fn color_overrides_replace_theme_colors() {
        let mut cfg = config("dark", "default");
        cfg.font_color = Some("#123456".to_string());
        cfg.bg_color = Some("#abcdef".to_string());

        let desc = RenderDescriptor::from_config(&cfg);
        assert_eq!(desc.theme.quote_color, "#123456");
        assert_eq!(desc.theme.bg_color, "#abcdef");
        // Untouched colors come from the theme
        assert_eq!(desc.theme.author_color, "#9e9e9e");
    }

    #[test]
    fn border_override_only_on_default_layout() {
        let mut cfg = config("default", "default");
        cfg.border_color = Some("#fff".to_string());
        assert_eq!(RenderDescriptor::from_config(&cfg).border_color, "#fff");

        cfg.layout = "socrates".to_string();
        let desc = RenderDescriptor::from_config(&cfg);
        assert_eq!(desc.border_color, DEFAULT_BORDER_COLOR);
        assert_eq!(desc.layout.kind, LayoutKind::QuoteMark);
    }

    #[test]
    fn default_layout_without_override_uses_gray_border() {
        let desc = RenderDescriptor::from_config(&config("default", "default"));
        assert_eq!(desc.border_color, DEFAULT_BORDER_COLOR);
    }

    #[test]
    fn unknown_ids_fall_back() {
        let desc = RenderDescriptor::from_config(&config("nope", "nope"));
        assert_eq!(desc.layout.kind, LayoutKind::Bordered);
        assert_eq!(desc.theme.bg_color, "#ffffff");
    }

    #[test]
    fn unsafe_color_overrides_fall_back() {
        let mut cfg = config("dark", "default");
        cfg.bg_color = Some("red; } .quote { display: none".to_string());
        cfg.font_color = Some("rgb(1, 2, 3)".to_string());
        cfg.border_color = Some("#fff]]>".to_string());

        let desc = RenderDescriptor::from_config(&cfg);
        assert_eq!(desc.theme.bg_color, "#151515");
        assert_eq!(desc.theme.quote_color, "rgb(1, 2, 3)");
        assert_eq!(desc.border_color, DEFAULT_BORDER_COLOR);
    }

    #[test]
    fn placeholder_data() {
        let desc = RenderDescriptor::from_config(&QuoteConfig::default());
        assert_eq!(desc.data.author, "Open Source");
        assert!(desc.data.quote.starts_with("This is going to be"));
    }
}
