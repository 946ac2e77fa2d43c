//! Output contract shared by every writer.
//!
//! [`ScoredRow`] is the serialization shape of one scored account: every
//! canonical field and every score component, exposed by name. Writers
//! receive the whole [`ScoredOutput`] and decide what to render.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::core::BatchSummary;
use crate::normalize::tech_stack::canonical_string;
use crate::priority::{Distribution, ScoredAccount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Markdown,
    Terminal,
}

/// Flat, serializable view of one scored account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    pub company_name: String,
    pub sfdc_account_id: String,
    pub lead_owner: String,
    pub industry: String,
    pub solution_interest: String,
    pub contact_role: String,
    pub lead_source: String,
    pub region: String,
    pub employee_count_class: String,
    pub revenue_usd_millions: String,
    pub website_canonical: Option<String>,
    pub last_touch_date: Option<String>,
    pub tech_stack_list: String,
    pub compliance_certifications: Option<String>,
    pub intent_score: Option<f64>,
    pub score_firmographic: u32,
    pub score_solution_fit: u32,
    pub score_intent: u32,
    pub score_tech_compliance: u32,
    pub total_score: u32,
    pub icp_archetype: String,
    pub priority_tier: String,
}

impl From<&ScoredAccount> for ScoredRow {
    fn from(account: &ScoredAccount) -> Self {
        let record = &account.record;
        Self {
            company_name: record.raw.company_name.clone(),
            sfdc_account_id: record.sfdc_account_id.clone(),
            lead_owner: record.lead_owner.clone(),
            industry: record.raw.industry.clone(),
            solution_interest: record.raw.solution_interest.clone(),
            contact_role: record.raw.contact_role.clone(),
            lead_source: record.raw.lead_source.clone(),
            region: record.region.to_string(),
            employee_count_class: record.employee_count.to_string(),
            revenue_usd_millions: record.revenue.to_string(),
            website_canonical: record.website.clone(),
            last_touch_date: record.last_touch.as_text(),
            tech_stack_list: canonical_string(&record.tech_stack),
            compliance_certifications: record.certifications.clone(),
            intent_score: record.intent_score,
            score_firmographic: account.breakdown.firmographic,
            score_solution_fit: account.breakdown.solution_fit,
            score_intent: account.breakdown.intent,
            score_tech_compliance: account.breakdown.tech_compliance,
            total_score: account.breakdown.total(),
            icp_archetype: account.archetype.clone(),
            priority_tier: account.tier.label().to_string(),
        }
    }
}

/// Everything a writer needs: the ranked rows plus batch metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredOutput {
    pub as_of: String,
    pub summary: BatchSummary,
    pub distribution: Distribution,
    /// How many rows the report views should show.
    pub top_limit: usize,
    /// All accounts, ranked descending by total score.
    pub accounts: Vec<ScoredRow>,
}

impl ScoredOutput {
    pub fn top(&self) -> &[ScoredRow] {
        &self.accounts[..self.top_limit.min(self.accounts.len())]
    }
}

pub trait OutputWriter {
    fn write_output(&mut self, output: &ScoredOutput) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    destination: Box<dyn Write>,
) -> Box<dyn OutputWriter> {
    use super::writers::{CsvWriter, JsonWriter, MarkdownWriter, TerminalWriter};
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Csv => Box::new(CsvWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    }
}
