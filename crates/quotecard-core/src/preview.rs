//! UI state owned by a single preview card.
//!
//! The card tracks two things: whether the remote image for the current
//! request URL has finished loading, and the toast shown after a copy.
//! Both live in one small record so the component's transitions are plain
//! method calls that can be tested without a renderer.

use std::time::Duration;

/// Toast shown when the markdown snippet reached the clipboard.
pub const COPY_SUCCESS: &str = "Copied to Clipboard!";

/// Toast shown for any clipboard failure.
pub const COPY_FAILURE: &str = "Unable to copy";

/// How long a toast stays open before closing itself.
pub const TOAST_AUTO_HIDE: Duration = Duration::from_millis(3000);

/// Identifies one opening of the toast.
pub type ToastGeneration = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    show_toast: bool,
    toast_message: String,
    image_loaded: bool,
    current_url: Option<String>,
    toast_generation: ToastGeneration,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the request URL used by the latest render.
    ///
    /// A different URL means a different image, so the loaded flag resets.
    /// Returns whether a reset happened.
    pub fn observe_url(&mut self, url: &str) -> bool {
        if self.current_url.as_deref() == Some(url) {
            return false;
        }
        self.current_url = Some(url.to_string());
        self.image_loaded = false;
        true
    }

    /// The remote image for `url` fired its load event.
    ///
    /// Loads for a URL other than the current one are stale and ignored.
    /// A load arriving before any URL was observed adopts its URL.
    pub fn mark_loaded(&mut self, url: &str) -> bool {
        match self.current_url.as_deref() {
            None => self.current_url = Some(url.to_string()),
            Some(current) if current != url => {
                tracing::debug!("Ignoring load for superseded image {}", url);
                return false;
            }
            Some(_) => {}
        }
        self.image_loaded = true;
        true
    }

    /// Open the toast with `message`, returning the generation to pass to
    /// [`dismiss_toast`](Self::dismiss_toast) later.
    pub fn show_toast(&mut self, message: impl Into<String>) -> ToastGeneration {
        self.toast_generation = self.toast_generation.wrapping_add(1);
        self.toast_message = message.into();
        self.show_toast = true;
        self.toast_generation
    }

    /// Close the toast if it is still the opening identified by `generation`.
    pub fn dismiss_toast(&mut self, generation: ToastGeneration) -> bool {
        if generation != self.toast_generation || !self.show_toast {
            return false;
        }
        self.show_toast = false;
        true
    }

    /// Close whatever toast is open (user dismissal).
    pub fn close_toast(&mut self) {
        self.show_toast = false;
    }

    pub fn image_loaded(&self) -> bool {
        self.image_loaded
    }

    pub fn toast_open(&self) -> bool {
        self.show_toast
    }

    pub fn toast_message(&self) -> &str {
        &self.toast_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_url_resets_loaded_flag() {
        let mut state = PreviewState::new();
        assert!(state.observe_url("http://a/quote?theme=dark"));
        assert!(state.mark_loaded("http://a/quote?theme=dark"));
        assert!(state.image_loaded());

        assert!(state.observe_url("http://a/quote?theme=radical"));
        assert!(!state.image_loaded());
    }

    #[test]
    fn same_url_keeps_loaded_flag() {
        let mut state = PreviewState::new();
        state.observe_url("u");
        state.mark_loaded("u");
        assert!(!state.observe_url("u"));
        assert!(state.image_loaded());
    }

    #[test]
    fn stale_load_is_ignored() {
        let mut state = PreviewState::new();
        state.observe_url("old");
        state.observe_url("new");
        assert!(!state.mark_loaded("old"));
        assert!(!state.image_loaded());
    }

    #[test]
    fn load_before_first_observation_is_adopted() {
        let mut state = PreviewState::new();
        assert!(state.mark_loaded("u"));
        assert!(state.image_loaded());

        // The late observation of the same URL keeps the image shown
        assert!(!state.observe_url("u"));
        assert!(state.image_loaded());
    }

    #[test]
    fn toast_dismiss_respects_generation() {
        let mut state = PreviewState::new();
        let first = state.show_toast(COPY_SUCCESS);
        let second = state.show_toast(COPY_FAILURE);

        // The first opening's timer must not close the second toast
        assert!(!state.dismiss_toast(first));
        assert!(state.toast_open());
        assert_eq!(state.toast_message(), COPY_FAILURE);

        assert!(state.dismiss_toast(second));
        assert!(!state.toast_open());
    }

    #[test]
    fn close_toast_keeps_message() {
        let mut state = PreviewState::new();
        state.show_toast(COPY_SUCCESS);
        state.close_toast();
        assert!(!state.toast_open());
        assert_eq!(state.toast_message(), COPY_SUCCESS);
    }
}
