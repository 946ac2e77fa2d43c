//! Data-quality exploration of a raw dataset: per-column missing counts
//! and distinct-value counts, ahead of any cleaning.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::errors::LeadmapError;
use crate::normalize::is_missing;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnQuality {
    pub column: String,
    pub rows: usize,
    pub missing: usize,
    pub distinct: usize,
}

impl ColumnQuality {
    pub fn missing_pct(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.missing as f64 / self.rows as f64 * 100.0
        }
    }
}

/// Profile every column of the input file. Works on any header set; the
/// fixed pipeline schema is not required here.
pub fn column_quality(path: &Path) -> Result<Vec<ColumnQuality>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|err| match err.into_kind() {
            csv::ErrorKind::Io(io_err) => {
                anyhow::Error::from(LeadmapError::io("failed to open dataset", path, io_err))
            }
            other => anyhow::anyhow!("failed to open {}: {other:?}", path.display()),
        })?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut missing = vec![0usize; headers.len()];
    let mut distinct: Vec<HashSet<String>> = vec![HashSet::new(); headers.len()];
    let mut rows = 0usize;

    for result in reader.records() {
        let record = result?;
        rows += 1;
        for (index, _) in headers.iter().enumerate() {
            let value = record.get(index).unwrap_or_default().trim();
            if is_missing(value) {
                missing[index] += 1;
            } else {
                distinct[index].insert(value.to_string());
            }
        }
    }

    Ok(headers
        .into_iter()
        .enumerate()
        .map(|(index, column)| ColumnQuality {
            column,
            rows,
            missing: missing[index],
            distinct: distinct[index].len(),
        })
        .collect())
}

pub fn handle_explore(path: &Path) -> Result<()> {
    let profile = column_quality(path)?;
    let rows = profile.first().map(|c| c.rows).unwrap_or(0);

    println!();
    println!("{}", "Data Quality Assessment".bold());
    println!("───────────────────────────────────────────────────────");
    println!("{rows} records, {} columns", profile.len());
    println!();
    println!(
        "{:<30} {:>8} {:>9} {:>9}",
        "Column".bold(),
        "Missing".bold(),
        "Missing%".bold(),
        "Distinct".bold()
    );
    for column in &profile {
        let pct = format!("{:.1}", column.missing_pct());
        let pct_text = if column.missing_pct() > 20.0 {
            pct.red().to_string()
        } else {
            pct
        };
        println!(
            "{:<30} {:>8} {:>9} {:>9}",
            column.column, column.missing, pct_text, column.distinct
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn profiles_missing_and_distinct_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            indoc! {"
                Company Name,Revenue
                Acme,$20M
                Globex,
                Initech,unknown
                Acme,$20M
            "}
        )
        .unwrap();

        let profile = column_quality(file.path()).unwrap();
        assert_eq!(profile.len(), 2);

        let company = &profile[0];
        assert_eq!(company.rows, 4);
        assert_eq!(company.missing, 0);
        assert_eq!(company.distinct, 3);

        let revenue = &profile[1];
        assert_eq!(revenue.missing, 2);
        assert_eq!(revenue.distinct, 1);
        assert!((revenue.missing_pct() - 50.0).abs() < 1e-9);
    }
}
