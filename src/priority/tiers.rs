/// Priority tier classification for account triage.
///
/// Total scores map onto four ordinal tiers through fixed inclusive
/// upper boundaries, so every score in [0, 100] lands in exactly one
/// tier and boundary scores stay in the lower bucket.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityTier {
    /// [0, 40]: nurture or disqualify
    Low,
    /// (40, 60]: keep warm
    Medium,
    /// (60, 80]: active working queue
    High,
    /// (80, 100]: immediate outreach
    Critical,
}

impl PriorityTier {
    pub const ALL: [PriorityTier; 4] = [
        PriorityTier::Low,
        PriorityTier::Medium,
        PriorityTier::High,
        PriorityTier::Critical,
    ];

    pub fn from_score(total: u32) -> Self {
        match total {
            0..=40 => PriorityTier::Low,
            41..=60 => PriorityTier::Medium,
            61..=80 => PriorityTier::High,
            _ => PriorityTier::Critical,
        }
    }

    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::Low => "Low",
            PriorityTier::Medium => "Medium",
            PriorityTier::High => "High",
            PriorityTier::Critical => "Critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == value)
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
