//! System clipboard backed by arboard.

use quotecard_core::{copy_text, ClipboardError, ClipboardSink};

/// Cross-platform desktop clipboard.
pub struct SystemClipboard(arboard::Clipboard);

impl SystemClipboard {
    pub fn open() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(Self)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0
            .set_text(text)
            .map_err(|e| ClipboardError::Denied(e.to_string()))
    }
}

/// Copy `text` to the desktop clipboard, returning the toast message.
pub fn copy_to_system_clipboard(text: &str) -> &'static str {
    match SystemClipboard::open() {
        Ok(mut clipboard) => copy_text(Ok(&mut clipboard), text),
        Err(e) => copy_text(Err(e), text),
    }
}
