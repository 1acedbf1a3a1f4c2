//! Risk scoring policy
//!
//! Weighted linear model over malicious flagged clauses, capped at
//! [`MAX_RISK_SCORE`]. Informational clauses never contribute.

use shared_types::{FlaggedClause, Severity};

pub const HIGH_SEVERITY_WEIGHT: u32 = 30;
pub const MEDIUM_SEVERITY_WEIGHT: u32 = 15;
pub const LOW_SEVERITY_WEIGHT: u32 = 5;
pub const MAX_RISK_SCORE: u32 = 100;

/// Lower bound of the "stronger caution" summary band
pub const CAUTION_THRESHOLD: u32 = 30;
/// Lower bound of the urgent warning summary band
pub const WARNING_THRESHOLD: u32 = 60;

pub fn severity_weight(severity: Severity) -> u32 {
    match severity {
        Severity::High => HIGH_SEVERITY_WEIGHT,
        Severity::Medium => MEDIUM_SEVERITY_WEIGHT,
        Severity::Low => LOW_SEVERITY_WEIGHT,
    }
}

/// Malicious flagged clauses partitioned by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl SeverityCounts {
    pub fn tally(flagged: &[FlaggedClause]) -> Self {
        let mut counts = Self::default();
        for f in flagged.iter().filter(|f| f.clause.is_malicious) {
            let slot = match f.clause.severity {
                Severity::High => &mut counts.high,
                Severity::Medium => &mut counts.medium,
                Severity::Low => &mut counts.low,
            };
            *slot = slot.saturating_add(1);
        }
        counts
    }

    pub fn malicious(&self) -> u32 {
        self.high.saturating_add(self.medium).saturating_add(self.low)
    }

    pub fn score(&self) -> u32 {
        let raw = self
            .high
            .saturating_mul(HIGH_SEVERITY_WEIGHT)
            .saturating_add(self.medium.saturating_mul(MEDIUM_SEVERITY_WEIGHT))
            .saturating_add(self.low.saturating_mul(LOW_SEVERITY_WEIGHT));
        raw.min(MAX_RISK_SCORE)
    }
}

/// `min(100, 30*high + 15*medium + 5*low)` over malicious clauses
pub fn risk_score(flagged: &[FlaggedClause]) -> u32 {
    SeverityCounts::tally(flagged).score()
}
