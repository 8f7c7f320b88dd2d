//! Result file writing and run summary output.

use crate::card_matching::{MatchedCard, TARGET_NAMES};
use crate::error::PipelineError;
use std::fs;

/// Write the matched cards as a two-space-indented JSON array.
/// The file is created, written, and closed in one step.
pub fn write_research_file(path: &str, matches: &[MatchedCard]) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(matches)?;
    fs::write(path, json)?;
    Ok(())
}

/// Count how many record names contain each target token.
///
/// Counts are independent, not mutually exclusive: a name containing two
/// tokens counts toward both.
pub fn breakdown(matches: &[MatchedCard]) -> Vec<(&'static str, usize)> {
    TARGET_NAMES
        .iter()
        .map(|token| {
            let count = matches
                .iter()
                .filter(|m| m.name.to_lowercase().contains(token))
                .count();
            (*token, count)
        })
        .collect()
}

/// Log the written count and the per-token breakdown.
pub fn log_summary(path: &str, matches: &[MatchedCard]) {
    log::info!("Wrote {} cards to {}", matches.len(), path);
    log::info!("Breakdown:");
    for (token, count) in breakdown(matches) {
        log::info!("{} cards: {}", capitalize(token), count);
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
