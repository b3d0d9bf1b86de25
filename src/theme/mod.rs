//! Global styling for the quote card preview.

mod styles;

pub use styles::GLOBAL_STYLES;
