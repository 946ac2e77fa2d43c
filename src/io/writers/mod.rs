mod csv;
mod json;
mod markdown;
mod terminal;

pub use self::csv::CsvWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;
