//! Ranked views and distribution statistics over scored accounts.
//!
//! Ranking never recomputes scores; everything here is a read-only
//! projection of the scored collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{PriorityTier, ScoredAccount};

/// Sort descending by total score; ties keep original input order.
pub fn rank(mut accounts: Vec<ScoredAccount>) -> Vec<ScoredAccount> {
    accounts.sort_by(|a, b| b.breakdown.total().cmp(&a.breakdown.total()));
    accounts
}

/// The first `n` accounts of a ranked collection.
pub fn top_n(accounts: &[ScoredAccount], n: usize) -> &[ScoredAccount] {
    &accounts[..n.min(accounts.len())]
}

/// Aggregate distribution of a scored batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub tier_counts: BTreeMap<PriorityTier, usize>,
    pub archetype_counts: BTreeMap<String, usize>,
    pub mean_score: f64,
    pub median_score: f64,
    pub p90_score: f64,
}

pub fn distribution(accounts: &[ScoredAccount]) -> Distribution {
    let mut tier_counts = BTreeMap::new();
    let mut archetype_counts = BTreeMap::new();
    for account in accounts {
        *tier_counts.entry(account.tier).or_insert(0) += 1;
        *archetype_counts
            .entry(account.archetype.clone())
            .or_insert(0) += 1;
    }

    let mut totals: Vec<f64> = accounts
        .iter()
        .map(|account| f64::from(account.breakdown.total()))
        .collect();
    totals.sort_by(|a, b| a.total_cmp(b));

    Distribution {
        tier_counts,
        archetype_counts,
        mean_score: mean(&totals),
        median_score: quantile(&totals, 0.5),
        p90_score: quantile(&totals, 0.9),
    }
}

fn mean(sorted: &[f64]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.iter().sum::<f64>() / sorted.len() as f64
}

/// Linearly interpolated quantile over an ascending-sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        len => {
            let position = q * (len - 1) as f64;
            let lower = position.floor() as usize;
            let upper = position.ceil() as usize;
            let fraction = position - lower as f64;
            sorted[lower] + fraction * (sorted[upper] - sorted[lower])
        }
    }
}
