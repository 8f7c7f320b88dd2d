//! Client for the PokemonTCG/pokemon-tcg-data GitHub repository.
//!
//! Three endpoint families: the GitHub contents listing of per-set card
//! files, the aggregate sets metadata file, and the per-set card files
//! themselves (raw content).

mod cards;
mod set_catalog;
mod set_list;

pub use cards::{fetch_set_cards, CardRecord};
pub use set_catalog::{SetCatalog, SetDescriptor};
pub use set_list::fetch_set_ids;

/// Raw content base URL of the card data repository
const GITHUB_RAW_BASE: &str =
    "https://raw.githubusercontent.com/PokemonTCG/pokemon-tcg-data/master";

/// GitHub contents API endpoint listing the per-set card files
const SET_LIST_URL: &str =
    "https://api.github.com/repos/PokemonTCG/pokemon-tcg-data/contents/cards/en";

/// Endpoint set for one pipeline run.
///
/// `Default` targets the public repository; tests point the fields at a
/// mock server instead.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub set_list_url: String,
    pub set_catalog_url: String,
    pub cards_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            set_list_url: SET_LIST_URL.to_string(),
            set_catalog_url: format!("{}/sets/en.json", GITHUB_RAW_BASE),
            cards_base_url: format!("{}/cards/en", GITHUB_RAW_BASE),
        }
    }
}
