use serde::{Deserialize, Serialize};

/// Contract area a clause pattern or key detail belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseCategory {
    SecurityDeposit,
    Rent,
    Termination,
    Maintenance,
    Privacy,
    Pets,
    Subletting,
    Utilities,
    Other,
}

impl ClauseCategory {
    /// Every category, in display order
    pub const ALL: [ClauseCategory; 9] = [
        ClauseCategory::SecurityDeposit,
        ClauseCategory::Rent,
        ClauseCategory::Termination,
        ClauseCategory::Maintenance,
        ClauseCategory::Privacy,
        ClauseCategory::Pets,
        ClauseCategory::Subletting,
        ClauseCategory::Utilities,
        ClauseCategory::Other,
    ];

    /// Wire token, identical to the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            ClauseCategory::SecurityDeposit => "security_deposit",
            ClauseCategory::Rent => "rent",
            ClauseCategory::Termination => "termination",
            ClauseCategory::Maintenance => "maintenance",
            ClauseCategory::Privacy => "privacy",
            ClauseCategory::Pets => "pets",
            ClauseCategory::Subletting => "subletting",
            ClauseCategory::Utilities => "utilities",
            ClauseCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A keyword-detectable contract clause and its risk metadata.
///
/// Entries are created when a catalog is loaded and never mutated afterwards.
/// `severity` only carries meaning when `is_malicious` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClausePattern {
    pub id: String,
    pub category: ClauseCategory,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>, // Matched case-insensitively, in declared order
    pub is_malicious: bool,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_reference: Option<String>,
    pub explanation: String,
}

/// A labeled fact pulled out of the contract text (rent, deposit, dates)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDetail {
    pub label: String,
    pub value: String,
    pub category: ClauseCategory,
}

/// A catalog entry that matched the contract, with the surrounding excerpt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedClause {
    pub clause: ClausePattern,
    pub matched_text: String,
    pub position: usize, // Character offset of the match in the original text
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub key_details: Vec<KeyDetail>,
    pub flagged_clauses: Vec<FlaggedClause>,
    pub overall_risk_score: u32,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Flagged clauses that are disadvantageous to the tenant
    pub fn problematic_clauses(&self) -> impl Iterator<Item = &FlaggedClause> {
        self.flagged_clauses.iter().filter(|f| f.clause.is_malicious)
    }

    /// Flagged clauses that are informational only
    pub fn notable_clauses(&self) -> impl Iterator<Item = &FlaggedClause> {
        self.flagged_clauses.iter().filter(|f| !f.clause.is_malicious)
    }

    pub fn key_detail(&self, label: &str) -> Option<&KeyDetail> {
        self.key_details.iter().find(|d| d.label == label)
    }
}

/// Coarse presentation band for a risk score.
///
/// Uses the same thresholds as the summary text: 0, below 30, below 60, and
/// everything from 60 up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            0 => RiskLevel::Low,
            1..=29 => RiskLevel::Moderate,
            30..=59 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Critical => "Critical Risk",
        }
    }
}
