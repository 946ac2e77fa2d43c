use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "leadmap")]
#[command(about = "Prospect dataset normalizer and ICP fit scorer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize, score, and rank a prospect dataset
    Score {
        /// Path to the input CSV
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of accounts shown in report views
        #[arg(long, default_value = "50")]
        top: usize,

        /// Evaluation date for recency scoring (defaults to today)
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,

        /// Disable the parallel scoring pass
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Path to a leadmap.toml overriding the built-in tables
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Profile data quality of a raw dataset
    Explore {
        /// Path to the input CSV
        path: PathBuf,
    },

    /// Validate a previously scored output file
    Validate {
        /// Path to the scored CSV
        path: PathBuf,

        /// Maximum validation failures to print
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Initialize a leadmap configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored report
    Terminal,
    /// Full scored dataset as JSON
    Json,
    /// Full scored dataset as CSV
    Csv,
    /// Prioritization report as markdown
    Markdown,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Markdown => Self::Markdown,
        }
    }
}
