//! Reusable UI components for the quote card preview

mod button;
mod paper;
mod spinner;
mod text_field;
mod toast;

pub use button::*;
pub use paper::*;
pub use spinner::*;
pub use text_field::*;
pub use toast::*;
