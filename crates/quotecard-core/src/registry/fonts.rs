//! Quote typefaces.

use super::Registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// CSS `font-family` value
    pub family: &'static str,
    /// Stylesheet providing the face, when it is not a system font
    pub import_url: Option<&'static str>,
}

const fn system(family: &'static str) -> Font {
    Font {
        family,
        import_url: None,
    }
}

const fn web(family: &'static str, import_url: &'static str) -> Font {
    Font {
        family,
        import_url: Some(import_url),
    }
}

pub static FONTS: Registry<Font> = Registry::new(
    "fonts",
    &[
        ("default", system("'Segoe UI', Ubuntu, 'Helvetica Neue', sans-serif")),
        ("serif", system("Georgia, 'Times New Roman', serif")),
        ("monospace", system("'JetBrains Mono', 'SF Mono', Consolas, monospace")),
        (
            "Redressed",
            web(
                "'Redressed', cursive",
                "https://fonts.googleapis.com/css2?family=Redressed&display=swap",
            ),
        ),
        (
            "Architects Daughter",
            web(
                "'Architects Daughter', cursive",
                "https://fonts.googleapis.com/css2?family=Architects+Daughter&display=swap",
            ),
        ),
        (
            "Lobster",
            web(
                "'Lobster', cursive",
                "https://fonts.googleapis.com/css2?family=Lobster&display=swap",
            ),
        ),
    ],
);
