//! The main pipeline command: load, normalize, score, classify, rank,
//! and write.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::LeadmapConfig;
use crate::core::BatchSummary;
use crate::errors::LeadmapError;
use crate::io::output::{create_writer, OutputFormat, ScoredOutput, ScoredRow};
use crate::normalize::normalize_records;
use crate::priority::{distribution, prioritize, rank};

#[derive(Debug)]
pub struct ScoreConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: usize,
    pub as_of: NaiveDate,
    pub parallel: bool,
    pub config_path: Option<PathBuf>,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let settings = LeadmapConfig::load(config.config_path.as_deref())?;
    let output = score_dataset(&config, &settings)?;

    let destination: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|err| LeadmapError::io("failed to create output file", path, err))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    create_writer(config.format, destination).write_output(&output)
}

/// Run the pipeline and assemble the writer payload.
pub fn score_dataset(config: &ScoreConfig, settings: &LeadmapConfig) -> Result<ScoredOutput> {
    let dataset = crate::io::loader::load_csv(&config.input)?;
    let processed = dataset.records.len() + dataset.errored;

    let normalized = normalize_records(dataset.records);
    let accounts = prioritize(normalized, settings, config.as_of, config.parallel);
    let ranked = rank(accounts);

    let summary = BatchSummary {
        processed,
        scored: ranked.len(),
        errored: dataset.errored,
    };
    log::info!(
        "scored {} of {} records ({} errored)",
        summary.scored,
        summary.processed,
        summary.errored
    );

    Ok(ScoredOutput {
        as_of: config.as_of.format("%Y-%m-%d").to_string(),
        summary,
        distribution: distribution(&ranked),
        top_limit: config.top,
        accounts: ranked.iter().map(ScoredRow::from).collect(),
    })
}
