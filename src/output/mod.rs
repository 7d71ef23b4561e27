//! Output formatting for match results.
//!
//! - [`terminal`] - coloured console output

mod terminal;

pub use terminal::{format_match_row, print_match_matrix};
