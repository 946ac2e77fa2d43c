use std::io::Write;

use crate::io::output::{OutputWriter, ScoredOutput};

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_output(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(output)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
