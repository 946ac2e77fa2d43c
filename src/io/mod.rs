pub mod loader;
pub mod output;
pub mod writers;

pub use loader::{load_csv, LoadedDataset, REQUIRED_COLUMNS};
pub use output::{create_writer, OutputFormat, OutputWriter, ScoredOutput, ScoredRow};
