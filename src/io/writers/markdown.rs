use std::io::Write;

use crate::io::output::{OutputWriter, ScoredOutput, ScoredRow};

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_output(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        self.write_header(output)?;
        self.write_summary(output)?;
        self.write_distribution(output)?;
        self.write_top_accounts(output)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "# Account Prioritization Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Scored as of: {}", output.as_of)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "## Batch Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Records processed | {} |", output.summary.processed)?;
        writeln!(self.writer, "| Records scored | {} |", output.summary.scored)?;
        writeln!(self.writer, "| Records errored | {} |", output.summary.errored)?;
        writeln!(
            self.writer,
            "| Mean score | {:.1} |",
            output.distribution.mean_score
        )?;
        writeln!(
            self.writer,
            "| Median score | {:.1} |",
            output.distribution.median_score
        )?;
        writeln!(
            self.writer,
            "| 90th percentile | {:.1} |",
            output.distribution.p90_score
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_distribution(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "## Priority Tiers")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Tier | Accounts |")?;
        writeln!(self.writer, "|------|----------|")?;
        for (tier, count) in &output.distribution.tier_counts {
            writeln!(self.writer, "| {} | {} |", tier.label(), count)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## ICP Archetypes")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Archetype | Accounts |")?;
        writeln!(self.writer, "|-----------|----------|")?;
        for (archetype, count) in &output.distribution.archetype_counts {
            writeln!(self.writer, "| {archetype} | {count} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_top_accounts(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "## Top {} Accounts", output.top().len())?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| # | Company | Industry | Solution | Archetype | Tier | Score |"
        )?;
        writeln!(
            self.writer,
            "|---|---------|----------|----------|-----------|------|-------|"
        )?;
        for (position, row) in output.top().iter().enumerate() {
            self.write_account_row(position + 1, row)?;
        }
        Ok(())
    }

    fn write_account_row(&mut self, position: usize, row: &ScoredRow) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} | {} |",
            position,
            row.company_name,
            row.industry,
            row.solution_interest,
            row.icp_archetype,
            row.priority_tier,
            row.total_score
        )?;
        Ok(())
    }
}
