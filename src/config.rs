//! Scoring tables and the ICP archetype catalog.
//!
//! Both are immutable configuration data loaded once at startup: the
//! compiled-in defaults below, optionally overridden by a `leadmap.toml`.
//! Keeping the tables as data lets each one be tested independently and
//! swapped without touching the scoring algorithm.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::EmployeeBand;

pub const DEFAULT_CONFIG_FILE: &str = "leadmap.toml";

/// Top-level configuration: scoring tables plus the archetype catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadmapConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub catalog: ArchetypeCatalog,
}

impl LeadmapConfig {
    /// Load configuration from an explicit path, or from `leadmap.toml`
    /// in the working directory when present. Defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let candidate = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    log::debug!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                    return Ok(Self::default());
                }
                default.to_path_buf()
            }
        };

        let content = std::fs::read_to_string(&candidate).map_err(|err| {
            crate::errors::LeadmapError::io("failed to read config", &candidate, err)
        })?;
        let config: Self = toml::from_str(&content).map_err(|err| {
            crate::errors::LeadmapError::config(format!(
                "failed to parse {}: {err}",
                candidate.display()
            ))
        })?;
        config.validate()?;
        log::debug!("loaded config from {}", candidate.display());
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.catalog.archetypes.is_empty() {
            anyhow::bail!("archetype catalog must not be empty");
        }
        let mut names: Vec<&str> = self
            .catalog
            .archetypes
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.catalog.archetypes.len() {
            anyhow::bail!("archetype names must be unique");
        }
        Ok(())
    }
}

/// The four sub-score tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub firmographic: FirmographicTable,
    #[serde(default)]
    pub solution: SolutionTable,
    #[serde(default)]
    pub intent: IntentTable,
    #[serde(default)]
    pub tech: TechComplianceTable,
}

/// Points awarded by substring/exact membership in a high or medium list,
/// with a base floor for everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TieredMatchTable {
    pub high: Vec<String>,
    pub high_points: u32,
    pub medium: Vec<String>,
    pub medium_points: u32,
    pub base_points: u32,
}

impl TieredMatchTable {
    /// First-match-wins, case-insensitive substring containment: the high
    /// list is checked before the medium list.
    pub fn substring_points(&self, haystack: &str) -> u32 {
        let lowered = haystack.to_lowercase();
        if self.high.iter().any(|n| lowered.contains(&n.to_lowercase())) {
            self.high_points
        } else if self
            .medium
            .iter()
            .any(|n| lowered.contains(&n.to_lowercase()))
        {
            self.medium_points
        } else {
            self.base_points
        }
    }

    /// Exact-membership variant of the same tiering.
    pub fn exact_points(&self, value: &str) -> u32 {
        if self.high.iter().any(|n| n == value) {
            self.high_points
        } else if self.medium.iter().any(|n| n == value) {
            self.medium_points
        } else {
            self.base_points
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmographicTable {
    #[serde(default = "default_employee_points")]
    pub employee: EmployeeBandPoints,
    #[serde(default = "default_revenue_buckets")]
    pub revenue: Vec<RevenueBucket>,
    #[serde(default = "default_industry_table")]
    pub industry: TieredMatchTable,
}

impl Default for FirmographicTable {
    fn default() -> Self {
        Self {
            employee: default_employee_points(),
            revenue: default_revenue_buckets(),
            industry: default_industry_table(),
        }
    }
}

/// Per-band employee-count points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeBandPoints {
    pub over_1000: u32,
    pub from_500_to_1000: u32,
    pub from_200_to_500: u32,
    pub from_50_to_200: u32,
    pub from_1_to_50: u32,
}

impl EmployeeBandPoints {
    pub fn points_for(&self, band: EmployeeBand) -> u32 {
        match band {
            EmployeeBand::Over1000 => self.over_1000,
            EmployeeBand::From500To1000 => self.from_500_to_1000,
            EmployeeBand::From200To500 => self.from_200_to_500,
            EmployeeBand::From50To200 => self.from_50_to_200,
            EmployeeBand::From1To50 => self.from_1_to_50,
        }
    }
}

/// Exact revenue bucket, in whole USD millions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueBucket {
    pub millions: u64,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionTable {
    #[serde(default = "default_solution_interests")]
    pub interests: Vec<InterestPoints>,
    #[serde(default = "default_solution_fallback")]
    pub fallback_points: u32,
    #[serde(default = "default_role_table")]
    pub roles: TieredMatchTable,
}

impl Default for SolutionTable {
    fn default() -> Self {
        Self {
            interests: default_solution_interests(),
            fallback_points: default_solution_fallback(),
            roles: default_role_table(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestPoints {
    pub name: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentTable {
    /// Descending intent-score thresholds; the first one met wins.
    #[serde(default = "default_intent_thresholds")]
    pub thresholds: Vec<IntentThreshold>,
    #[serde(default = "default_intent_floor")]
    pub floor_points: u32,
    #[serde(default = "default_lead_sources")]
    pub sources: Vec<InterestPoints>,
    #[serde(default = "default_source_fallback")]
    pub source_fallback_points: u32,
    #[serde(default)]
    pub recency: RecencyTable,
}

impl Default for IntentTable {
    fn default() -> Self {
        Self {
            thresholds: default_intent_thresholds(),
            floor_points: default_intent_floor(),
            sources: default_lead_sources(),
            source_fallback_points: default_source_fallback(),
            recency: RecencyTable::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentThreshold {
    pub min: f64,
    pub points: u32,
}

/// Points by days elapsed since the last touch, relative to the injected
/// evaluation date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecencyTable {
    pub recent_days: i64,
    pub recent_points: u32,
    pub warm_days: i64,
    pub warm_points: u32,
    pub stale_points: u32,
    pub unparsed_points: u32,
}

impl Default for RecencyTable {
    fn default() -> Self {
        Self {
            recent_days: 30,
            recent_points: 5,
            warm_days: 90,
            warm_points: 3,
            stale_points: 1,
            unparsed_points: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechComplianceTable {
    #[serde(default = "default_tech_table")]
    pub tech: TieredMatchTable,
    #[serde(default = "default_cert_table")]
    pub certifications: TieredMatchTable,
}

impl Default for TechComplianceTable {
    fn default() -> Self {
        Self {
            tech: default_tech_table(),
            certifications: default_cert_table(),
        }
    }
}

/// One ICP archetype: the trait memberships a record is matched against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeDefinition {
    pub name: String,
    pub description: String,
    pub employee_bands: Vec<EmployeeBand>,
    pub revenue_millions: Vec<u64>,
    pub industries: Vec<String>,
    pub solutions: Vec<String>,
    pub roles: Vec<String>,
    pub certifications: Vec<String>,
    pub tech_stack: Vec<String>,
}

/// Additive weights for each archetype match criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub employee: u32,
    pub revenue: u32,
    pub industry: u32,
    pub solution: u32,
    pub role: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            employee: 3,
            revenue: 3,
            industry: 3,
            solution: 4,
            role: 3,
        }
    }
}

/// The ordered archetype catalog.
///
/// Order matters: when two archetypes tie on match score, the earlier
/// definition wins. Treat the sequence as part of the catalog schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeCatalog {
    #[serde(default = "default_archetypes")]
    pub archetypes: Vec<ArchetypeDefinition>,
    #[serde(default = "default_min_confidence")]
    pub min_confidence: u32,
    #[serde(default)]
    pub weights: MatchWeights,
}

impl Default for ArchetypeCatalog {
    fn default() -> Self {
        Self {
            archetypes: default_archetypes(),
            min_confidence: default_min_confidence(),
            weights: MatchWeights::default(),
        }
    }
}

fn default_employee_points() -> EmployeeBandPoints {
    EmployeeBandPoints {
        over_1000: 15,
        from_500_to_1000: 12,
        from_200_to_500: 10,
        from_50_to_200: 5,
        from_1_to_50: 0,
    }
}

fn default_revenue_buckets() -> Vec<RevenueBucket> {
    [(1000, 15), (250, 15), (100, 12), (20, 8), (5, 4)]
        .into_iter()
        .map(|(millions, points)| RevenueBucket { millions, points })
        .collect()
}

fn default_industry_table() -> TieredMatchTable {
    TieredMatchTable {
        high: string_vec(&[
            "Financial Services",
            "Healthcare",
            "Energy",
            "Manufacturing",
            "Legal",
        ]),
        high_points: 10,
        medium: string_vec(&["Technology", "Government"]),
        medium_points: 7,
        base_points: 3,
    }
}

fn default_solution_interests() -> Vec<InterestPoints> {
    [("Risk", 15), ("Compliance", 12), ("Boards", 10)]
        .into_iter()
        .map(|(name, points)| InterestPoints {
            name: name.to_string(),
            points,
        })
        .collect()
}

fn default_solution_fallback() -> u32 {
    5
}

fn default_role_table() -> TieredMatchTable {
    TieredMatchTable {
        high: string_vec(&[
            "chief risk officer",
            "risk manager",
            "board secretary",
            "general counsel",
            "legal counsel",
            "compliance officer",
        ]),
        high_points: 10,
        medium: string_vec(&["director of security", "it director", "cfo", "ciso"]),
        medium_points: 7,
        base_points: 3,
    }
}

fn default_intent_thresholds() -> Vec<IntentThreshold> {
    [(80.0, 10), (60.0, 8), (40.0, 6)]
        .into_iter()
        .map(|(min, points)| IntentThreshold { min, points })
        .collect()
}

fn default_intent_floor() -> u32 {
    3
}

fn default_lead_sources() -> Vec<InterestPoints> {
    [("Referral", 5), ("Event", 4), ("Web", 3)]
        .into_iter()
        .map(|(name, points)| InterestPoints {
            name: name.to_string(),
            points,
        })
        .collect()
}

fn default_source_fallback() -> u32 {
    2
}

fn default_tech_table() -> TieredMatchTable {
    TieredMatchTable {
        high: string_vec(&["salesforce", "servicenow", "workday", "okta"]),
        high_points: 8,
        medium: string_vec(&["hubspot", "marketo", "pardot"]),
        medium_points: 5,
        base_points: 3,
    }
}

fn default_cert_table() -> TieredMatchTable {
    TieredMatchTable {
        high: string_vec(&["sox", "pci dss", "iso27001"]),
        high_points: 7,
        medium: string_vec(&["gdpr", "hipaa"]),
        medium_points: 5,
        base_points: 2,
    }
}

fn default_min_confidence() -> u32 {
    6
}

fn default_archetypes() -> Vec<ArchetypeDefinition> {
    vec![
        ArchetypeDefinition {
            name: "Enterprise_Risk_Management".to_string(),
            description: "Large enterprises with complex risk management needs".to_string(),
            employee_bands: vec![EmployeeBand::Over1000, EmployeeBand::From500To1000],
            revenue_millions: vec![100, 250, 1000],
            industries: string_vec(&[
                "Financial Services",
                "Healthcare",
                "Energy",
                "Manufacturing",
            ]),
            solutions: string_vec(&["Risk"]),
            roles: string_vec(&["Chief Risk Officer", "Risk Manager", "Board Secretary"]),
            certifications: string_vec(&["SOX", "PCI DSS", "ISO27001"]),
            tech_stack: string_vec(&["Salesforce", "ServiceNow", "Workday"]),
        },
        ArchetypeDefinition {
            name: "Mid_Market_Compliance".to_string(),
            description: "Growing companies needing compliance frameworks".to_string(),
            employee_bands: vec![EmployeeBand::From200To500, EmployeeBand::From500To1000],
            revenue_millions: vec![20, 100],
            industries: string_vec(&[
                "Technology",
                "Financial Services",
                "Healthcare",
                "Legal",
            ]),
            solutions: string_vec(&["Compliance"]),
            roles: string_vec(&["General Counsel", "Legal Counsel", "Compliance Officer"]),
            certifications: string_vec(&["GDPR", "HIPAA", "ISO27001"]),
            tech_stack: string_vec(&["HubSpot", "Marketo", "Pardot", "Okta"]),
        },
        ArchetypeDefinition {
            name: "Board_Governance".to_string(),
            description: "Organizations focused on board management and governance".to_string(),
            employee_bands: vec![
                EmployeeBand::From200To500,
                EmployeeBand::From500To1000,
                EmployeeBand::Over1000,
            ],
            revenue_millions: vec![100, 250, 1000],
            industries: string_vec(&[
                "Financial Services",
                "Non-Profit",
                "Legal",
                "Government",
            ]),
            solutions: string_vec(&["Boards"]),
            roles: string_vec(&["Board Secretary", "Director of Security", "General Counsel"]),
            certifications: string_vec(&["SOX", "GDPR"]),
            tech_stack: string_vec(&["Salesforce", "Workday", "ServiceNow"]),
        },
    ]
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
