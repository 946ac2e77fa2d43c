//! Domain types shared across the normalization and scoring pipeline.
//!
//! Raw input fields stay untouched on [`RawRecord`]; every canonical field
//! derived from them lives alongside on [`NormalizedRecord`] as a tagged
//! type with an explicit `Unknown`/pass-through/absent variant. Downstream
//! scoring matches exhaustively on these variants instead of sniffing
//! strings.

use chrono::NaiveDate;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One row of the input dataset, exactly as loaded.
///
/// Field values are kept verbatim (trimmed only); absent cells are empty
/// strings. `row` is the zero-based data row index and, together with
/// `company_name`, forms the record's identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub company_name: String,
    pub website: String,
    pub employee_count: String,
    pub revenue: String,
    pub region: String,
    pub industry: String,
    pub solution_interest: String,
    pub contact_role: String,
    pub lead_source: String,
    pub last_touch: String,
    pub tech_stack: String,
    pub certifications: String,
    pub intent_score: String,
    pub sfdc_account_id: String,
    pub lead_owner: String,
    pub row: usize,
}

/// Canonical employee headcount bands, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeBand {
    From1To50,
    From50To200,
    From200To500,
    From500To1000,
    Over1000,
}

impl EmployeeBand {
    pub const ALL: [EmployeeBand; 5] = [
        EmployeeBand::From1To50,
        EmployeeBand::From50To200,
        EmployeeBand::From200To500,
        EmployeeBand::From500To1000,
        EmployeeBand::Over1000,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeBand::From1To50 => "1-50",
            EmployeeBand::From50To200 => "50-200",
            EmployeeBand::From200To500 => "200-500",
            EmployeeBand::From500To1000 => "500-1,000",
            EmployeeBand::Over1000 => "1000+",
        }
    }

    /// Map a pair of range endpoints onto a band, if they match one.
    pub fn from_bounds(low: u64, high: u64) -> Option<Self> {
        match (low, high) {
            (1, 50) => Some(EmployeeBand::From1To50),
            (50, 200) => Some(EmployeeBand::From50To200),
            (200, 500) => Some(EmployeeBand::From200To500),
            (500, 1000) => Some(EmployeeBand::From500To1000),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.as_str() == value)
    }
}

impl std::fmt::Display for EmployeeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EmployeeBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmployeeBand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        EmployeeBand::parse(&value)
            .ok_or_else(|| D::Error::custom(format!("unknown employee band: {value}")))
    }
}

/// Canonical employee-count field.
///
/// Unrecognized non-missing text passes through title-cased rather than
/// being discarded; scoring treats pass-throughs the same as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeCount {
    Band(EmployeeBand),
    Other(String),
    Unknown,
}

impl std::fmt::Display for EmployeeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeCount::Band(band) => f.write_str(band.as_str()),
            EmployeeCount::Other(text) => f.write_str(text),
            EmployeeCount::Unknown => f.write_str("Unknown"),
        }
    }
}

impl Serialize for EmployeeCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Canonical annual revenue in whole USD millions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revenue {
    Millions(u64),
    Unknown,
}

impl std::fmt::Display for Revenue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revenue::Millions(value) => write!(f, "${value}M"),
            Revenue::Unknown => f.write_str("Unknown"),
        }
    }
}

impl Serialize for Revenue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Canonical sales regions. Unmapped codes pass through uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    Americas,
    Emea,
    Apac,
    UkIreland,
    Dach,
    France,
    Mea,
    Other(String),
    Unknown,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Region::Americas => "Americas",
            Region::Emea => "EMEA",
            Region::Apac => "APAC",
            Region::UkIreland => "UK & Ireland",
            Region::Dach => "DACH",
            Region::France => "France",
            Region::Mea => "MEA",
            Region::Other(code) => code.as_str(),
            Region::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Canonical last-marketing-touch field.
///
/// Text that matches none of the recognized date formats is carried as
/// `Raw` so downstream consumers can still see it; recency scoring gives
/// such values the stale floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TouchDate {
    Date(NaiveDate),
    Raw(String),
    Missing,
}

impl TouchDate {
    pub fn is_missing(&self) -> bool {
        matches!(self, TouchDate::Missing)
    }

    /// Canonical text form: ISO date, the raw pass-through, or `None`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            TouchDate::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
            TouchDate::Raw(text) => Some(text.clone()),
            TouchDate::Missing => None,
        }
    }
}

impl Serialize for TouchDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_text() {
            Some(text) => serializer.serialize_str(&text),
            None => serializer.serialize_none(),
        }
    }
}

/// A [`RawRecord`] plus every canonical field derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub raw: RawRecord,
    pub employee_count: EmployeeCount,
    pub revenue: Revenue,
    pub region: Region,
    pub last_touch: TouchDate,
    pub website: Option<String>,
    pub tech_stack: Vec<String>,
    pub certifications: Option<String>,
    pub intent_score: Option<f64>,
    pub sfdc_account_id: String,
    pub lead_owner: String,
}

/// The four additive sub-scores of the composite fit score.
///
/// Each component is capped by its own table (40/25/20/15), so the total
/// is in [0, 100] by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub firmographic: u32,
    pub solution_fit: u32,
    pub intent: u32,
    pub tech_compliance: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.firmographic + self.solution_fit + self.intent + self.tech_compliance
    }
}

/// Batch processing tally reported alongside scored output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub scored: usize,
    pub errored: usize,
}
