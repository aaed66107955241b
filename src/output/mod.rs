//! Output formatting for trial results.
//!
//! Terminal: human-readable report with fixed-width timing tables.

mod terminal;

pub use terminal::{format_header, format_notice, format_trial, separator, LABEL_WIDTH, VALUE_WIDTH};
