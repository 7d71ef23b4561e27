//! Terminal output utilities.

use crate::processing::{MatchBlock, MatchRow};
use colored::Colorize;
use itertools::Itertools;

/// Render one probe line, e.g. `isMatch: true, 10.0.0.1`.
pub fn format_match_row(row: &MatchRow) -> String {
    let verdict = if row.is_match {
        "true".green()
    } else {
        "false".red()
    };
    format!("isMatch: {verdict}, {}", row.probe)
}

/// Print every block, separated by a blank line.
pub fn print_match_matrix(blocks: &[MatchBlock]) {
    for block in blocks {
        let matched = block
            .rows
            .iter()
            .filter(|r| r.is_match)
            .map(|r| r.probe)
            .unique()
            .join(", ");
        log::info!(
            "trie {}: {}/{} probes matched [{matched}]",
            block.prefix,
            block.match_count(),
            block.rows.len()
        );
        for row in &block.rows {
            println!("{}", format_match_row(row));
        }
        println!();
    }
}
