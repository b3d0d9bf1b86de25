//! UI Components for the quote card preview.

mod preview_card;

pub use preview_card::PreviewCard;
