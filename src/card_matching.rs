//! Name matching, set-metadata joining, and ordering of scanned cards.

use crate::tcg_data::{CardRecord, SetCatalog};
use serde::Serialize;

/// Cards whose lowercased name contains any of these tokens are collected.
/// No token is a substring of another, so a name matches each token
/// independently.
pub const TARGET_NAMES: [&str; 3] = ["pichu", "pikachu", "raichu"];

/// Sentinel for set metadata missing from the catalog
const UNKNOWN: &str = "Unknown";

/// Output record: a card joined with the metadata of the set it came from.
/// Field order here is the key order of the written JSON.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchedCard {
    pub api_id: String,
    pub name: String,
    pub number: String,
    pub set_name: String,
    pub set_series: String,
    pub set_id: String,
    pub release_date: String,
    pub rarity: String,
}

/// True when the lowercased name contains any target token. A name
/// containing several tokens still matches only once.
pub fn name_matches(name: &str) -> bool {
    let lower = name.to_lowercase();
    TARGET_NAMES.iter().any(|token| lower.contains(token))
}

impl MatchedCard {
    /// Join a scanned card with the descriptor of the set it was read from.
    ///
    /// A set id missing from the catalog defaults the set name and series
    /// to "Unknown" and the release date to an empty string; fields inside
    /// a found descriptor are taken as-is. A missing rarity defaults to
    /// "Unknown".
    pub fn join(card: &CardRecord, set_id: &str, catalog: &SetCatalog) -> Self {
        let descriptor = catalog.get(set_id);
        Self {
            api_id: card.id.clone(),
            name: card.name.clone(),
            number: card.number.clone(),
            set_name: descriptor.map_or_else(|| UNKNOWN.to_string(), |d| d.name.clone()),
            set_series: descriptor.map_or_else(|| UNKNOWN.to_string(), |d| d.series.clone()),
            set_id: set_id.to_string(),
            release_date: descriptor.map_or_else(String::new, |d| d.release_date.clone()),
            rarity: card.rarity.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Collect the matching cards of one set, in file order, joined with the
/// set's metadata.
pub fn find_matching_cards(
    cards: &[CardRecord],
    set_id: &str,
    catalog: &SetCatalog,
) -> Vec<MatchedCard> {
    cards
        .iter()
        .filter(|card| name_matches(&card.name))
        .map(|card| MatchedCard::join(card, set_id, catalog))
        .collect()
}

/// Numeric portion of a collector number, for sorting. Numbers with no
/// digits, empty numbers, and unparseable digit runs all sort as 0.
fn numeric_number(number: &str) -> u64 {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Stable ascending sort by release date, set name, numeric collector
/// number, then the original number string as the final tie-break.
///
/// Release dates are compared lexically; the `YYYY/MM/DD` format makes
/// that chronological, and empty dates sort first.
pub fn sort_matches(matches: &mut [MatchedCard]) {
    matches.sort_by(|a, b| {
        a.release_date
            .cmp(&b.release_date)
            .then_with(|| a.set_name.cmp(&b.set_name))
            .then_with(|| numeric_number(&a.number).cmp(&numeric_number(&b.number)))
            .then_with(|| a.number.cmp(&b.number))
    });
}

#[cfg(test)]
#[path = "card_matching_tests.rs"]
mod tests;
