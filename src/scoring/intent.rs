//! Intent and engagement signals: intent score, lead source, and touch
//! recency, max 20.
//!
//! Recency is measured against an explicitly injected evaluation date so
//! a batch run scores every record as of the same moment and tests are
//! reproducible.

use chrono::NaiveDate;

use crate::config::IntentTable;
use crate::core::{NormalizedRecord, TouchDate};

pub fn score(record: &NormalizedRecord, table: &IntentTable, as_of: NaiveDate) -> u32 {
    intent_points(record.intent_score, table)
        + source_points(record.raw.lead_source.trim(), table)
        + recency_points(&record.last_touch, table, as_of)
}

fn intent_points(intent: Option<f64>, table: &IntentTable) -> u32 {
    match intent {
        Some(value) => table
            .thresholds
            .iter()
            .find(|threshold| value >= threshold.min)
            .map(|threshold| threshold.points)
            .unwrap_or(table.floor_points),
        None => 0,
    }
}

fn source_points(source: &str, table: &IntentTable) -> u32 {
    table
        .sources
        .iter()
        .find(|entry| entry.name == source)
        .map(|entry| entry.points)
        .unwrap_or(table.source_fallback_points)
}

fn recency_points(touch: &TouchDate, table: &IntentTable, as_of: NaiveDate) -> u32 {
    match touch {
        TouchDate::Date(date) => {
            let days = (as_of - *date).num_days();
            if days <= table.recency.recent_days {
                table.recency.recent_points
            } else if days <= table.recency.warm_days {
                table.recency.warm_points
            } else {
                table.recency.stale_points
            }
        }
        TouchDate::Raw(_) => table.recency.unparsed_points,
        TouchDate::Missing => 0,
    }
}
