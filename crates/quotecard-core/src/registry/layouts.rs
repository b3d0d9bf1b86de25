//! Card layouts.

use super::Registry;

/// Arrangement of quote, author and decoration inside the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Bordered card, quote above a right-aligned author
    Bordered,
    /// Large opening quote mark beside the text
    QuoteMark,
    /// Accent bar down the left edge
    SideBar,
    /// Centered text with an underlined author
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub kind: LayoutKind,
    pub width: u32,
    pub height: u32,
}

const fn layout(kind: LayoutKind) -> Layout {
    Layout {
        kind,
        width: 600,
        height: 200,
    }
}

pub static LAYOUTS: Registry<Layout> = Registry::new(
    "layouts",
    &[
        ("default", layout(LayoutKind::Bordered)),
        ("socrates", layout(LayoutKind::QuoteMark)),
        ("churchill", layout(LayoutKind::SideBar)),
        ("samuel", layout(LayoutKind::Centered)),
    ],
);
