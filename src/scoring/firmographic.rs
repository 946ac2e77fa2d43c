//! Firmographic fit: employee band + revenue bucket + industry, max 40.

use crate::config::FirmographicTable;
use crate::core::{EmployeeCount, NormalizedRecord, Revenue};

pub fn score(record: &NormalizedRecord, table: &FirmographicTable) -> u32 {
    employee_points(&record.employee_count, table)
        + revenue_points(record.revenue, table)
        + table.industry.exact_points(record.raw.industry.trim())
}

fn employee_points(count: &EmployeeCount, table: &FirmographicTable) -> u32 {
    match count {
        EmployeeCount::Band(band) => table.employee.points_for(*band),
        EmployeeCount::Other(_) | EmployeeCount::Unknown => 0,
    }
}

fn revenue_points(revenue: Revenue, table: &FirmographicTable) -> u32 {
    match revenue {
        Revenue::Millions(value) => table
            .revenue
            .iter()
            .find(|bucket| bucket.millions == value)
            .map(|bucket| bucket.points)
            .unwrap_or(0),
        Revenue::Unknown => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EmployeeBand, RawRecord};

    fn record(employee: EmployeeCount, revenue: Revenue, industry: &str) -> NormalizedRecord {
        NormalizedRecord {
            raw: RawRecord {
                industry: industry.to_string(),
                ..RawRecord::default()
            },
            employee_count: employee,
            revenue,
            region: crate::core::Region::Unknown,
            last_touch: crate::core::TouchDate::Missing,
            website: None,
            tech_stack: Vec::new(),
            certifications: None,
            intent_score: None,
            sfdc_account_id: "Missing".into(),
            lead_owner: "Unassigned".into(),
        }
    }

    #[test]
    fn maximal_profile_scores_forty() {
        let record = record(
            EmployeeCount::Band(EmployeeBand::Over1000),
            Revenue::Millions(250),
            "Financial Services",
        );
        assert_eq!(score(&record, &Default::default()), 40);
    }

    #[test]
    fn unknown_firmographics_fall_to_industry_floor() {
        let record = record(EmployeeCount::Unknown, Revenue::Unknown, "");
        assert_eq!(score(&record, &Default::default()), 3);
    }

    #[test]
    fn unlisted_revenue_scores_zero() {
        let record = record(EmployeeCount::Unknown, Revenue::Millions(42), "");
        assert_eq!(score(&record, &Default::default()), 3);
    }

    #[test]
    fn small_band_and_revenue_take_table_values() {
        let record = record(
            EmployeeCount::Band(EmployeeBand::From1To50),
            Revenue::Millions(5),
            "Technology",
        );
        // 0 + 4 + 7
        assert_eq!(score(&record, &Default::default()), 11);
    }

    #[test]
    fn passthrough_employee_text_scores_zero() {
        let record = record(
            EmployeeCount::Other("A Few Dozen".into()),
            Revenue::Unknown,
            "Retail",
        );
        assert_eq!(score(&record, &Default::default()), 3);
    }
}
