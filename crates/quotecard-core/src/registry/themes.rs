//! Color themes.

use super::Registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub quote_color: &'static str,
    pub author_color: &'static str,
    pub bg_color: &'static str,
    pub accent_color: &'static str,
}

const fn theme(
    quote_color: &'static str,
    author_color: &'static str,
    bg_color: &'static str,
    accent_color: &'static str,
) -> Theme {
    Theme {
        quote_color,
        author_color,
        bg_color,
        accent_color,
    }
}

pub static THEMES: Registry<Theme> = Registry::new(
    "themes",
    &[
        ("default", theme("#333333", "#333333", "#ffffff", "#6c5ce7")),
        ("dark", theme("#ffffff", "#9e9e9e", "#151515", "#fe428e")),
        ("radical", theme("#fe428e", "#a9fef7", "#141321", "#f8d847")),
        ("merko", theme("#abd200", "#b7d364", "#0a0f0b", "#68b587")),
        ("gruvbox", theme("#fabd2f", "#8ec07c", "#282828", "#fe8019")),
        ("tokyonight", theme("#70a5fd", "#38bdae", "#1a1b27", "#bf91f3")),
        ("onedark", theme("#e4bf7a", "#8eb573", "#282c34", "#df6d74")),
        ("cobalt", theme("#e683d9", "#75eeb2", "#193549", "#0480ef")),
        ("synthwave", theme("#e2e9ec", "#ef8539", "#2b213a", "#e5289e")),
        ("highcontrast", theme("#e7f216", "#ffffff", "#000000", "#00ffff")),
        ("dracula", theme("#ff6e96", "#79dafa", "#282a36", "#bd93f9")),
    ],
);
