//! Quote Card UI Primitives
//!
//! Small presentational Dioxus components the preview card is composed
//! from. Each renders plain elements with stable CSS classes; the look
//! comes from the application's global stylesheet.
//!
//! - **Paper**: padded elevated surface
//! - **TextField**: full-width read-only input
//! - **Button**: contained button
//! - **Spinner**: circular progress indicator
//! - **Toast**: transient message sliding up from the bottom edge

pub mod components;

pub use components::*;
