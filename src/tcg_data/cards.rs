use crate::fetch::FetchClient;
use serde::Deserialize;

/// One card as stored in a per-set file. Fields the pipeline does not use
/// are ignored; fields it does use default when absent.
#[derive(Debug, Deserialize, Clone)]
pub struct CardRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Collector number, may contain non-numeric characters ("SWSH039")
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub rarity: Option<String>,
}

/// Fetch all cards of one set.
///
/// Returns `None` once retries are exhausted; the scanner skips the set
/// and moves on.
pub fn fetch_set_cards(
    client: &FetchClient,
    cards_base_url: &str,
    set_id: &str,
) -> Option<Vec<CardRecord>> {
    let url = format!("{}/{}.json", cards_base_url, set_id);
    client.fetch_json(&url)
}

#[cfg(test)]
#[path = "cards_tests.rs"]
mod tests;
