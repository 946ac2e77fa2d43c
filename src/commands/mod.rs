//! CLI command implementations.
//!
//! Each submodule handles one subcommand with its configuration and
//! execution logic:
//! - **score**: run the full normalize/score/classify/rank pipeline
//! - **explore**: profile raw data quality before cleaning
//! - **validate**: check a scored output file's invariants
//! - **init**: scaffold a default `leadmap.toml`

pub mod explore;
pub mod init;
pub mod score;
pub mod validate;

pub use explore::{column_quality, handle_explore, ColumnQuality};
pub use init::init_config;
pub use score::{handle_score, score_dataset, ScoreConfig};
pub use validate::{handle_validate, validate_scored_file, ValidateConfig};
