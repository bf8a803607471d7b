//! "Also likes": documents read by the readers of a seed document
//!
//! Two hops over the reader <-> document graph: seed -> its readers -> every
//! document each of them read. Each (reader, document) pair contributes one
//! co-read occurrence, so the seed itself always scores exactly the size of
//! its reader set.

use super::error::{AnalysisError, AnalysisResult};
use super::index::BipartiteIndex;
use crate::config::RecommendConfig;
use crate::event::{DocumentId, EventStore};
use crate::rank::CountTable;
use indexmap::IndexMap;
use tracing::debug;

/// Documents ranked by co-read count
pub type RankedList = CountTable<DocumentId>;

/// Rank every document co-read with `seed`, most shared readers first
///
/// An unknown seed, or one without readers, yields an empty list.
pub fn also_likes<S: EventStore + ?Sized>(
    store: &S,
    seed: &DocumentId,
    config: &RecommendConfig,
) -> AnalysisResult<RankedList> {
    let mut index = BipartiteIndex::new(store);
    let readers: Vec<_> = index.readers_of(seed)?.iter().cloned().collect();

    let mut counts: IndexMap<DocumentId, u64> = IndexMap::new();
    let mut occurrences = 0usize;

    for reader in &readers {
        let documents = index.documents_of(reader)?;

        if let Some(limit) = config.max_fan_out {
            if occurrences + documents.len() > limit {
                return Err(AnalysisError::FanOutExceeded {
                    seed: seed.clone(),
                    limit,
                });
            }
        }
        occurrences += documents.len();

        for document in documents {
            *counts.entry(document.clone()).or_insert(0) += 1;
        }
    }

    debug!(
        "also_likes({}): {} readers, {} co-read occurrences, {} documents",
        seed,
        readers.len(),
        occurrences,
        counts.len()
    );

    Ok(CountTable::from_counts(counts))
}

/// `also_likes` truncated to the configured `top_k`
pub fn top_k_also_likes<S: EventStore + ?Sized>(
    store: &S,
    seed: &DocumentId,
    config: &RecommendConfig,
) -> AnalysisResult<RankedList> {
    let mut ranked = also_likes(store, seed, config)?;
    ranked.truncate(config.top_k);
    Ok(ranked)
}
