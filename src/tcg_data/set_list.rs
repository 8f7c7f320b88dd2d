use crate::fetch::FetchClient;
use serde::Deserialize;

/// One entry of the GitHub contents listing. Everything but the file name
/// is ignored.
#[derive(Debug, Deserialize)]
struct DirectoryEntry {
    name: String,
}

/// Fetch the listing of per-set card files and return the sorted set ids.
///
/// Only `.json` entries count; the extension is stripped before sorting.
/// Returns `None` when the listing itself cannot be fetched.
pub fn fetch_set_ids(client: &FetchClient, url: &str) -> Option<Vec<String>> {
    let entries: Vec<DirectoryEntry> = client.fetch_json(url)?;

    let mut ids: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| entry.name.strip_suffix(".json").map(str::to_string))
        .collect();
    ids.sort();

    Some(ids)
}

#[cfg(test)]
#[path = "set_list_tests.rs"]
mod tests;
