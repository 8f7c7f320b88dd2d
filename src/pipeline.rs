//! Sequential fetch → filter → sort → write pipeline.
//!
//! One invocation, one pass: list the set files, load the set catalog,
//! scan each set for matching cards, sort, write the research file. A
//! missing listing or catalog is fatal; a missing per-set file only skips
//! that set.

use crate::card_matching::{self, MatchedCard};
use crate::error::PipelineError;
use crate::fetch::FetchClient;
use crate::report;
use crate::tcg_data::{self, Endpoints, SetCatalog};

/// Progress is logged for the first set and every 20th set after it
const PROGRESS_INTERVAL: usize = 20;

/// Counts reported after a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub cards_written: usize,
    pub sets_scanned: usize,
    pub sets_skipped: usize,
    /// Per-token name counts, independent of each other
    pub breakdown: Vec<(&'static str, usize)>,
}

/// Run the pipeline against the public card data repository.
pub fn run(output_path: &str) -> Result<RunSummary, PipelineError> {
    run_with(&Endpoints::default(), output_path)
}

/// Run the pipeline against the given endpoints.
pub fn run_with(endpoints: &Endpoints, output_path: &str) -> Result<RunSummary, PipelineError> {
    let client = FetchClient::new();

    log::info!("Fetching set file list...");
    let set_ids = tcg_data::fetch_set_ids(&client, &endpoints.set_list_url)
        .filter(|ids| !ids.is_empty())
        .ok_or(PipelineError::SetListUnavailable)?;
    log::info!("Found {} set files", set_ids.len());

    log::info!("Fetching sets metadata...");
    let catalog = SetCatalog::fetch(&client, &endpoints.set_catalog_url)
        .filter(|catalog| !catalog.is_empty())
        .ok_or(PipelineError::SetCatalogUnavailable)?;
    log::info!("Loaded {} sets", catalog.len());

    let mut matches: Vec<MatchedCard> = Vec::new();
    let mut sets_skipped = 0;

    for (i, set_id) in set_ids.iter().enumerate() {
        if i == 0 || (i + 1) % PROGRESS_INTERVAL == 0 {
            log::info!("Processing set {}/{}: {}...", i + 1, set_ids.len(), set_id);
        }

        let cards = match tcg_data::fetch_set_cards(&client, &endpoints.cards_base_url, set_id) {
            Some(cards) => cards,
            None => {
                log::warn!("Skipping set {}: card file unavailable", set_id);
                sets_skipped += 1;
                continue;
            }
        };

        matches.extend(card_matching::find_matching_cards(&cards, set_id, &catalog));
    }
    log::info!("Found {} matching cards total", matches.len());

    card_matching::sort_matches(&mut matches);

    report::write_research_file(output_path, &matches)?;
    report::log_summary(output_path, &matches);

    Ok(RunSummary {
        cards_written: matches.len(),
        sets_scanned: set_ids.len() - sets_skipped,
        sets_skipped,
        breakdown: report::breakdown(&matches),
    })
}
