//! CSV dataset ingestion.
//!
//! The column set is fixed: a header missing any required column aborts
//! the whole batch before any record is processed. Individual rows that
//! fail to read (ragged field counts, encoding problems) are tallied and
//! skipped so the rest of the batch survives.

use std::path::Path;

use anyhow::Result;

use crate::core::RawRecord;
use crate::errors::LeadmapError;

pub const REQUIRED_COLUMNS: [&str; 15] = [
    "Company Name",
    "Website",
    "Employee Count",
    "Revenue",
    "Region",
    "Industry",
    "Solution Interest",
    "Contact Role/Title",
    "Lead Source",
    "Last Marketing Touch",
    "Tech Stack Signals",
    "Compliance Certifications",
    "Intent Score",
    "SFDC Account ID",
    "Lead Owner",
];

/// A loaded batch: readable records plus the count of rows that failed.
#[derive(Debug)]
pub struct LoadedDataset {
    pub records: Vec<RawRecord>,
    pub errored: usize,
}

pub fn load_csv(path: &Path) -> Result<LoadedDataset> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|err| map_open_error(path, err))?;

    let headers = reader.headers()?.clone();
    let indices = resolve_columns(&headers)?;

    let mut records = Vec::new();
    let mut errored = 0;
    for (row, result) in reader.records().enumerate() {
        match result {
            Ok(record) => records.push(to_raw_record(&record, &indices, row)),
            Err(err) => {
                log::warn!("{}", LeadmapError::record(row, err.to_string()));
                errored += 1;
            }
        }
    }

    log::info!(
        "loaded {} records from {} ({} unreadable)",
        records.len(),
        path.display(),
        errored
    );
    Ok(LoadedDataset { records, errored })
}

/// Resolve each required column to its header position, or fail with the
/// full list of what is missing.
fn resolve_columns(headers: &csv::StringRecord) -> Result<[usize; 15]> {
    let mut indices = [0usize; 15];
    let mut missing = Vec::new();
    for (slot, column) in REQUIRED_COLUMNS.iter().enumerate() {
        match headers.iter().position(|header| header.trim() == *column) {
            Some(index) => indices[slot] = index,
            None => missing.push(column.to_string()),
        }
    }
    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(LeadmapError::missing_columns(missing).into())
    }
}

fn to_raw_record(record: &csv::StringRecord, indices: &[usize; 15], row: usize) -> RawRecord {
    let field = |slot: usize| -> String {
        record
            .get(indices[slot])
            .unwrap_or_default()
            .trim()
            .to_string()
    };
    RawRecord {
        company_name: field(0),
        website: field(1),
        employee_count: field(2),
        revenue: field(3),
        region: field(4),
        industry: field(5),
        solution_interest: field(6),
        contact_role: field(7),
        lead_source: field(8),
        last_touch: field(9),
        tech_stack: field(10),
        certifications: field(11),
        intent_score: field(12),
        sfdc_account_id: field(13),
        lead_owner: field(14),
        row,
    }
}

fn map_open_error(path: &Path, err: csv::Error) -> anyhow::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => {
            LeadmapError::io("failed to open dataset", path, io_err).into()
        }
        other => anyhow::anyhow!("failed to open {}: {other:?}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Company Name,Website,Employee Count,Revenue,Region,Industry,Solution Interest,Contact Role/Title,Lead Source,Last Marketing Touch,Tech Stack Signals,Compliance Certifications,Intent Score,SFDC Account ID,Lead Owner";

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn loads_records_in_order() {
        let file = write_csv(&[
            "Acme,acme.com,1000+,$250M,AMS,Technology,Risk,CRO,Web,2025-07-01,Salesforce,SOX,85,001,Ann",
            "Globex,globex.com,50-200,$20M,EMEA,Legal,Boards,GC,Event,7/1/25,HubSpot,GDPR,60,002,Ben",
        ]);
        let dataset = load_csv(file.path()).unwrap();
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.errored, 0);
        assert_eq!(dataset.records[0].company_name, "Acme");
        assert_eq!(dataset.records[0].row, 0);
        assert_eq!(dataset.records[1].row, 1);
    }

    #[test]
    fn missing_columns_fail_before_any_record() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Company Name,Website").unwrap();
        writeln!(file, "Acme,acme.com").unwrap();
        let err = load_csv(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing required columns"));
        assert!(message.contains("Revenue"));
    }

    #[test]
    fn ragged_rows_are_tallied_not_fatal() {
        let file = write_csv(&[
            "Acme,acme.com,1000+,$250M,AMS,Technology,Risk,CRO,Web,2025-07-01,Salesforce,SOX,85,001,Ann",
            "short,row",
        ]);
        let dataset = load_csv(file.path()).unwrap();
        assert_eq!(dataset.records.len(), 1);
        assert_eq!(dataset.errored, 1);
    }

    #[test]
    fn columns_may_appear_in_any_order() {
        let mut file = NamedTempFile::new().unwrap();
        let reversed: Vec<&str> = REQUIRED_COLUMNS.iter().rev().copied().collect();
        writeln!(file, "{}", reversed.join(",")).unwrap();
        writeln!(
            file,
            "Ann,001,85,SOX,Salesforce,2025-07-01,Web,CRO,Risk,Technology,AMS,$250M,1000+,acme.com,Acme"
        )
        .unwrap();
        let dataset = load_csv(file.path()).unwrap();
        assert_eq!(dataset.records[0].company_name, "Acme");
        assert_eq!(dataset.records[0].lead_owner, "Ann");
        assert_eq!(dataset.records[0].revenue, "$250M");
    }
}
