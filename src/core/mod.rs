pub mod types;

pub use types::{
    BatchSummary, EmployeeBand, EmployeeCount, NormalizedRecord, RawRecord, Region, Revenue,
    ScoreBreakdown, TouchDate,
};
