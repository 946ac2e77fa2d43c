use std::io::Write;

use crate::io::output::{OutputWriter, ScoredOutput};

/// Serializes the full ranked account table; headers come from the row
/// struct's field names.
pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_output(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        let mut csv_writer = ::csv::Writer::from_writer(&mut self.writer);
        for row in &output.accounts {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
