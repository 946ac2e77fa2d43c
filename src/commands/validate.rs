//! Validation of a previously scored output file.
//!
//! Re-checks the invariants a scored CSV must satisfy: required columns,
//! component caps, component/total agreement, and tier consistency, then
//! prints the key metrics a reviewer would eyeball.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::*;

use crate::errors::LeadmapError;
use crate::io::output::ScoredRow;
use crate::priority::PriorityTier;

/// Columns a scored file must expose for downstream consumers.
pub const REQUIRED_OUTPUT_COLUMNS: [&str; 8] = [
    "company_name",
    "employee_count_class",
    "revenue_usd_millions",
    "region",
    "total_score",
    "icp_archetype",
    "priority_tier",
    "score_firmographic",
];

#[derive(Debug)]
pub struct ValidateConfig {
    pub input: PathBuf,
    pub top: usize,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub rows: usize,
    pub failures: Vec<String>,
    pub mean_score: f64,
    pub critical_count: usize,
    pub high_count: usize,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn validate_scored_file(path: &Path) -> Result<ValidationReport> {
    let mut reader = csv::Reader::from_path(path).map_err(|err| match err.into_kind() {
        csv::ErrorKind::Io(io_err) => {
            anyhow::Error::from(LeadmapError::io("failed to open scored file", path, io_err))
        }
        other => anyhow::anyhow!("failed to open {}: {other:?}", path.display()),
    })?;

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_OUTPUT_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(LeadmapError::missing_columns(missing).into());
    }

    let mut report = ValidationReport::default();
    let mut total_sum = 0u64;
    for (row, result) in reader.deserialize::<ScoredRow>().enumerate() {
        let scored = match result {
            Ok(scored) => scored,
            Err(err) => {
                report.failures.push(format!("row {row}: unreadable ({err})"));
                continue;
            }
        };
        report.rows += 1;
        total_sum += u64::from(scored.total_score);
        check_row(row, &scored, &mut report.failures);
        if scored.total_score >= 90 {
            report.critical_count += 1;
        } else if scored.total_score >= 80 {
            report.high_count += 1;
        }
    }
    if report.rows > 0 {
        report.mean_score = total_sum as f64 / report.rows as f64;
    }
    Ok(report)
}

fn check_row(row: usize, scored: &ScoredRow, failures: &mut Vec<String>) {
    let caps = [
        (scored.score_firmographic, 40, "firmographic"),
        (scored.score_solution_fit, 25, "solution fit"),
        (scored.score_intent, 20, "intent"),
        (scored.score_tech_compliance, 15, "tech/compliance"),
    ];
    for (value, cap, name) in caps {
        if value > cap {
            failures.push(format!("row {row}: {name} score {value} exceeds cap {cap}"));
        }
    }

    let component_sum = scored.score_firmographic
        + scored.score_solution_fit
        + scored.score_intent
        + scored.score_tech_compliance;
    if component_sum != scored.total_score {
        failures.push(format!(
            "row {row}: components sum to {component_sum} but total is {}",
            scored.total_score
        ));
    }
    if scored.total_score > 100 {
        failures.push(format!(
            "row {row}: total score {} out of range",
            scored.total_score
        ));
    }

    let expected_tier = PriorityTier::from_score(scored.total_score).label();
    if scored.priority_tier != expected_tier {
        failures.push(format!(
            "row {row}: tier {} does not match score {} (expected {expected_tier})",
            scored.priority_tier, scored.total_score
        ));
    }
    if scored.icp_archetype.trim().is_empty() {
        failures.push(format!("row {row}: empty archetype assignment"));
    }
}

pub fn handle_validate(config: ValidateConfig) -> Result<()> {
    let report = validate_scored_file(&config.input)?;

    println!();
    println!("{}", "Scored Output Validation".bold());
    println!("───────────────────────────────────────────");
    println!("Rows:              {}", report.rows);
    println!("Mean score:        {:.1}", report.mean_score);
    println!("Critical (90+):    {}", report.critical_count);
    println!("High (80-89):      {}", report.high_count);

    if report.passed() {
        println!("{}", "All validations passed".green().bold());
        Ok(())
    } else {
        for failure in report.failures.iter().take(config.top) {
            println!("{} {failure}", "FAIL".red().bold());
        }
        let shown = report.failures.len().min(config.top);
        if report.failures.len() > shown {
            println!("... and {} more", report.failures.len() - shown);
        }
        Err(LeadmapError::validation(format!(
            "{} of {} rows failed validation",
            report.failures.len(),
            report.rows
        ))
        .into())
    }
}
