use colored::*;
use std::io::Write;

use crate::io::output::{OutputWriter, ScoredOutput, ScoredRow};
use crate::priority::PriorityTier;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_output(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        self.write_header(output)?;
        self.write_summary(output)?;
        self.write_distribution(output)?;
        self.write_top_accounts(output)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            "═══════════════════════════════════════════".cyan()
        )?;
        writeln!(
            self.writer,
            "{}",
            "       ACCOUNT PRIORITIZATION REPORT".bold().cyan()
        )?;
        writeln!(
            self.writer,
            "{}",
            "═══════════════════════════════════════════".cyan()
        )?;
        writeln!(self.writer, "Scored as of {}", output.as_of)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Batch Summary".bold())?;
        writeln!(self.writer, "───────────────────────────────────────────")?;
        writeln!(self.writer, "Processed: {}", output.summary.processed)?;
        writeln!(
            self.writer,
            "Scored:    {}",
            output.summary.scored.to_string().green()
        )?;
        let errored = output.summary.errored;
        let errored_text = if errored > 0 {
            errored.to_string().red().to_string()
        } else {
            errored.to_string()
        };
        writeln!(self.writer, "Errored:   {errored_text}")?;
        writeln!(
            self.writer,
            "Scores:    mean {:.1}, median {:.1}, p90 {:.1}",
            output.distribution.mean_score,
            output.distribution.median_score,
            output.distribution.p90_score
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_distribution(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Priority Tiers".bold())?;
        writeln!(self.writer, "───────────────────────────────────────────")?;
        for (tier, count) in &output.distribution.tier_counts {
            writeln!(self.writer, "  {:<10} {}", tier_label(*tier), count)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "ICP Archetypes".bold())?;
        writeln!(self.writer, "───────────────────────────────────────────")?;
        for (archetype, count) in &output.distribution.archetype_counts {
            writeln!(self.writer, "  {archetype:<28} {count}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_top_accounts(&mut self, output: &ScoredOutput) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!("Top {} Accounts", output.top().len()).bold()
        )?;
        writeln!(self.writer, "───────────────────────────────────────────")?;
        for (position, row) in output.top().iter().enumerate() {
            self.write_account_line(position + 1, row)?;
        }
        Ok(())
    }

    fn write_account_line(&mut self, position: usize, row: &ScoredRow) -> anyhow::Result<()> {
        let tier = PriorityTier::parse(&row.priority_tier).unwrap_or(PriorityTier::Low);
        writeln!(
            self.writer,
            "{position:>3}. {:<28} {:<20} {:>3}  {}",
            truncate(&row.company_name, 28),
            truncate(&row.icp_archetype, 20),
            row.total_score,
            tier_label(tier)
        )?;
        Ok(())
    }
}

fn tier_label(tier: PriorityTier) -> ColoredString {
    match tier {
        PriorityTier::Critical => tier.label().red().bold(),
        PriorityTier::High => tier.label().yellow(),
        PriorityTier::Medium => tier.label().cyan(),
        PriorityTier::Low => tier.label().normal(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
