// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod normalize;
pub mod priority;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    BatchSummary, EmployeeBand, EmployeeCount, NormalizedRecord, RawRecord, Region, Revenue,
    ScoreBreakdown, TouchDate,
};

pub use crate::config::{ArchetypeCatalog, ArchetypeDefinition, LeadmapConfig, ScoringConfig};

pub use crate::normalize::{normalize_record, normalize_records};

pub use crate::priority::{
    classify, distribution, prioritize, rank, top_n, Distribution, PriorityTier, ScoredAccount,
    OTHER_ARCHETYPE,
};

pub use crate::scoring::score_record;

pub use crate::io::{create_writer, load_csv, OutputFormat, OutputWriter, ScoredOutput, ScoredRow};
