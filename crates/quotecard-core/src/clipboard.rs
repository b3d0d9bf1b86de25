//! Clipboard seam for the copy action.
//!
//! The platform clipboard lives in the desktop binary; this module only
//! decides which toast a write attempt produces.

use crate::error::ClipboardError;
use crate::preview::{COPY_FAILURE, COPY_SUCCESS};

/// Something that can receive plain text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Write `text` to `sink` and return the toast message to show.
///
/// `sink` is the outcome of opening the clipboard; an `Err` means none was
/// reachable. Failures are logged with their cause while the user only ever
/// sees the generic message. No retry.
pub fn copy_text(sink: Result<&mut dyn ClipboardSink, ClipboardError>, text: &str) -> &'static str {
    let result = sink.and_then(|sink| sink.write_text(text));

    match result {
        Ok(()) => {
            tracing::debug!(bytes = text.len(), "Copied snippet to clipboard");
            COPY_SUCCESS
        }
        Err(e) => {
            tracing::error!("Error copying to clipboard: {}", e);
            COPY_FAILURE
        }
    }
}
