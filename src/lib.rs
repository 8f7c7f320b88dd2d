//! Pikachu Research - Pokemon TCG card collector
//!
//! Fetches every Pichu, Pikachu, and Raichu card from the public
//! PokemonTCG/pokemon-tcg-data repository, joins each card with its set's
//! metadata, and writes the sorted result to a JSON research file.

pub mod card_matching;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod tcg_data;

// Re-export commonly used items
pub use card_matching::{find_matching_cards, name_matches, sort_matches, MatchedCard};
pub use error::{ApiError, ApiResult, PipelineError};
pub use fetch::FetchClient;
pub use pipeline::RunSummary;
pub use tcg_data::{fetch_set_cards, fetch_set_ids, CardRecord, Endpoints, SetCatalog, SetDescriptor};
