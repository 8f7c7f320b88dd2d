use crate::fetch::FetchClient;
use serde::Deserialize;
use std::collections::HashMap;

/// One set description from the aggregate sets file.
///
/// `releaseDate` is a `YYYY/MM/DD` string, so lexical order equals
/// chronological order. Missing fields default to empty strings.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetDescriptor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub release_date: String,
}

/// Set metadata lookup keyed by set id.
pub struct SetCatalog {
    entries: HashMap<String, SetDescriptor>,
}

impl SetCatalog {
    /// Build the lookup from a list of descriptors. Duplicate ids
    /// overwrite, last write wins.
    pub fn from_sets(sets: Vec<SetDescriptor>) -> Self {
        let mut entries = HashMap::with_capacity(sets.len());
        for set in sets {
            entries.insert(set.id.clone(), set);
        }
        Self { entries }
    }

    /// Fetch the aggregate sets file and index it by id.
    ///
    /// Returns `None` when the file cannot be fetched; the pipeline treats
    /// that as fatal.
    pub fn fetch(client: &FetchClient, url: &str) -> Option<Self> {
        let sets: Vec<SetDescriptor> = client.fetch_json(url)?;
        Some(Self::from_sets(sets))
    }

    /// Look up the descriptor for a set id
    pub fn get(&self, set_id: &str) -> Option<&SetDescriptor> {
        self.entries.get(set_id)
    }

    /// Get the number of sets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "set_catalog_tests.rs"]
mod tests;
