//! Scoring, classification, tiering, and ranked views over a batch.

pub mod archetype;
pub mod ranking;
pub mod tiers;

pub use archetype::{classify, OTHER_ARCHETYPE};
pub use ranking::{distribution, rank, top_n, Distribution};
pub use tiers::PriorityTier;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::LeadmapConfig;
use crate::core::{NormalizedRecord, ScoreBreakdown};
use crate::scoring::score_record;

/// One fully evaluated account: canonical record, score components,
/// archetype assignment, and priority tier.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAccount {
    pub record: NormalizedRecord,
    pub breakdown: ScoreBreakdown,
    pub archetype: String,
    pub tier: PriorityTier,
}

/// Score, classify, and tier a normalized batch.
///
/// Records are independent, so the pass shards across the rayon pool
/// when `parallel` is set; either path preserves input order.
pub fn prioritize(
    records: Vec<NormalizedRecord>,
    config: &LeadmapConfig,
    as_of: NaiveDate,
    parallel: bool,
) -> Vec<ScoredAccount> {
    let evaluate = |record: NormalizedRecord| -> ScoredAccount {
        let breakdown = score_record(&record, &config.scoring, as_of);
        let archetype = classify(&record, &config.catalog);
        let tier = PriorityTier::from_score(breakdown.total());
        ScoredAccount {
            record,
            breakdown,
            archetype,
            tier,
        }
    };

    if parallel {
        records.into_par_iter().map(evaluate).collect()
    } else {
        records.into_iter().map(evaluate).collect()
    }
}
