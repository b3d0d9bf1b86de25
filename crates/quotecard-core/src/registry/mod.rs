//! Style registries keyed by id.
//!
//! Themes, fonts, animations and layouts are fixed tables compiled into the
//! binary. Unknown ids resolve to the table's `default` entry with a warning
//! rather than failing the render.

mod animations;
mod fonts;
mod layouts;
mod themes;

pub use animations::{Animation, ANIMATIONS};
pub use fonts::{Font, FONTS};
pub use layouts::{Layout, LayoutKind, LAYOUTS};
pub use themes::{Theme, THEMES};

/// Id every registry must contain; the fallback for unknown ids.
pub const FALLBACK_ID: &str = "default";

/// A static id → style table.
#[derive(Debug)]
pub struct Registry<T: 'static> {
    name: &'static str,
    entries: &'static [(&'static str, T)],
}

impl<T: 'static> Registry<T> {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, T)]) -> Self {
        Self { name, entries }
    }

    /// Exact lookup by id.
    pub fn lookup(&self, id: &str) -> Option<&'static T> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, value)| value)
    }

    /// Lookup that falls back to the `default` entry for unknown ids.
    pub fn resolve(&self, id: &str) -> &'static T {
        if let Some(value) = self.lookup(id) {
            return value;
        }
        tracing::warn!(registry = self.name, id, "Unknown id, using default");
        self.fallback()
    }

    fn fallback(&self) -> &'static T {
        // Every table is declared with `default` first.
        self.lookup(FALLBACK_ID).unwrap_or(&self.entries[0].1)
    }

    /// Known ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}
