//! Rental contract clause matching and risk scoring
//!
//! [`analyze`] is a pure function of (contract text, clause catalog). It
//! never fails: empty text, an empty catalog, or text in any script all
//! produce a well-formed [`AnalysisResult`].
//!
//! Pipeline:
//! 1. keyword scan per catalog entry ([`flag_clauses`])
//! 2. labeled key-fact extraction ([`extractors`])
//! 3. weighted risk score ([`scoring`])
//! 4. summary and recommendations ([`narrative`])

pub mod catalog;
pub mod extractors;
pub mod narrative;
pub mod patterns;
pub mod scoring;

use std::sync::Arc;

use shared_types::{AnalysisResult, ClausePattern, FlaggedClause};
use tracing::debug;

pub use catalog::{category_label, default_catalog, severity_style, Catalog, CatalogError};
pub use patterns::{KeywordMatch, NormalizedText};

/// Analyze contract text against a clause catalog
pub fn analyze(text: &str, catalog: &[ClausePattern]) -> AnalysisResult {
    let flagged_clauses = flag_clauses(text, catalog);
    let key_details = extractors::extract_key_details(text);
    let overall_risk_score = scoring::risk_score(&flagged_clauses);

    let summary = narrative::build_summary(&key_details, &flagged_clauses, overall_risk_score);
    let recommendations = narrative::build_recommendations(&flagged_clauses);

    debug!(
        flagged = flagged_clauses.len(),
        key_details = key_details.len(),
        score = overall_risk_score,
        "contract analyzed"
    );

    AnalysisResult {
        summary,
        key_details,
        flagged_clauses,
        overall_risk_score,
        recommendations,
    }
}

/// Scan the text for every catalog entry, in catalog order.
///
/// An entry is flagged at most once, at the first occurrence of its first
/// declared keyword that appears in the text.
pub fn flag_clauses(text: &str, catalog: &[ClausePattern]) -> Vec<FlaggedClause> {
    let normalized = NormalizedText::new(text);
    let mut flagged: Vec<FlaggedClause> = Vec::new();

    for clause in catalog {
        let Some(found) = patterns::first_keyword_match(&normalized, &clause.keywords) else {
            continue;
        };

        // Catalog ids are unique once validated, but raw slices may repeat them
        if flagged.iter().any(|f| f.clause.id == clause.id) {
            continue;
        }

        debug!(
            clause = %clause.id,
            keyword = %clause.keywords[found.keyword_index],
            position = found.start,
            "clause flagged"
        );

        flagged.push(FlaggedClause {
            clause: clause.clone(),
            matched_text: patterns::extract_context(&normalized, &found),
            position: found.start,
        });
    }

    flagged
}

/// Analyzer bound to a shared, read-only catalog
#[derive(Debug, Clone)]
pub struct ClauseEngine {
    catalog: Arc<Catalog>,
}

impl ClauseEngine {
    /// Engine over the built-in BC catalog
    pub fn new() -> Self {
        Self::with_catalog(default_catalog().clone())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        analyze(text, self.catalog.patterns())
    }
}

impl Default for ClauseEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{ClauseCategory, Severity};

    fn clause(id: &str, keywords: &[&str], severity: Severity) -> ClausePattern {
        ClausePattern {
            id: id.to_string(),
            category: ClauseCategory::Other,
            name: id.to_string(),
            description: String::new(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            is_malicious: true,
            severity,
            legal_reference: None,
            explanation: String::new(),
        }
    }

    fn ids(result: &AnalysisResult) -> Vec<&str> {
        result
            .flagged_clauses
            .iter()
            .map(|f| f.clause.id.as_str())
            .collect()
    }

    #[test]
    fn test_empty_text_takes_no_concerns_branch() {
        let engine = ClauseEngine::new();
        let result = engine.analyze("");

        assert_eq!(result.overall_risk_score, 0);
        assert!(result.flagged_clauses.is_empty());
        assert!(result.key_details.is_empty());
        assert!(result.summary.ends_with(
            "No concerning clauses were detected in this contract. However, always read the full document carefully."
        ));
        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(
            result.recommendations[0],
            "This contract appears to follow BC tenancy laws, but always read everything carefully before signing."
        );
    }

    #[test]
    fn test_empty_catalog_never_flags() {
        let result = analyze("Security deposit: $3000, non-refundable. Rent: $1200", &[]);
        assert!(result.flagged_clauses.is_empty());
        assert_eq!(result.overall_risk_score, 0);
        assert_eq!(result.key_details.len(), 2);
    }

    #[test]
    fn test_deposit_scenario_reaches_warning_band() {
        let text = "The security deposit is $3000 and is non-refundable. rent: $1200";
        let result = ClauseEngine::new().analyze(text);

        assert_eq!(ids(&result), vec!["excessive-deposit", "non-refundable-deposit"]);
        assert_eq!(result.overall_risk_score, 60);

        let rent = result.key_detail("Monthly Rent").unwrap();
        assert_eq!(rent.value, "1200");

        assert!(result
            .summary
            .contains("The monthly rent is listed as $1200. "));
        assert!(result
            .summary
            .contains("WARNING: This contract contains 2 highly problematic clause(s)"));

        assert_eq!(
            result.recommendations,
            vec![
                "Consider negotiating the removal of problematic clauses before signing.",
                "Contact the BC Residential Tenancy Branch (RTB) for free advice: 1-800-665-8779",
                "Consult your university's student legal services or tenant advocacy group.",
                "Pay special attention to the Security Deposit section of this contract.",
                "Keep a signed copy of your lease in a safe place.",
            ]
        );
    }

    #[test]
    fn test_flagged_entries_report_their_own_first_occurrence() {
        let text = format!(
            "{}non-refundable{}security deposit",
            "x".repeat(10),
            "y".repeat(26)
        );
        let result = ClauseEngine::new().analyze(&text);

        let deposit = &result.flagged_clauses[0];
        assert_eq!(deposit.clause.id, "excessive-deposit");
        assert_eq!(deposit.position, 50);

        let refundable = &result.flagged_clauses[1];
        assert_eq!(refundable.clause.id, "non-refundable-deposit");
        assert_eq!(refundable.position, 10);
    }

    #[test]
    fn test_declared_keyword_order_decides_match() {
        let catalog = vec![clause("entry", &["second", "first"], Severity::Low)];
        let result = analyze("first comes before second", &catalog);

        assert_eq!(result.flagged_clauses.len(), 1);
        assert_eq!(result.flagged_clauses[0].position, 19);
    }

    #[test]
    fn test_repeated_ids_flag_once() {
        let catalog = vec![
            clause("dup", &["penalty"], Severity::High),
            clause("dup", &["late fee"], Severity::High),
        ];
        let result = analyze("A late fee and a penalty apply.", &catalog);
        assert_eq!(ids(&result), vec!["dup"]);
        assert_eq!(result.overall_risk_score, 30);
    }

    #[test]
    fn test_overlapping_matches_are_independent() {
        let catalog = vec![
            clause("a", &["penalty"], Severity::Low),
            clause("b", &["penalty"], Severity::Low),
        ];
        let result = analyze("penalty", &catalog);
        assert_eq!(ids(&result), vec!["a", "b"]);
        assert_eq!(result.flagged_clauses[0].matched_text, "...penalty...");
        assert_eq!(result.overall_risk_score, 10);
    }

    #[test]
    fn test_flagged_clauses_follow_catalog_order() {
        let text = "Landlord may enter at any time. No pets. Hydro is extra.";
        let result = ClauseEngine::new().analyze(text);
        assert_eq!(
            ids(&result),
            vec!["unrestricted-entry", "no-pets-strata", "utility-responsibility"]
        );
        assert_eq!(result.overall_risk_score, 30);
        assert_eq!(result.problematic_clauses().count(), 1);
        assert_eq!(result.notable_clauses().count(), 2);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = "Late fee of $50. Tenant must vacate at end of term. Rent: $1,500.00";
        let engine = ClauseEngine::new();
        assert_eq!(engine.analyze(text), engine.analyze(text));
    }

    #[test]
    fn test_custom_catalog_changes_behavior() {
        let catalog = Catalog::new(vec![clause("smoking", &["no smoking"], Severity::Medium)]).unwrap();
        let engine = ClauseEngine::with_catalog(catalog);
        let result = engine.analyze("Absolutely NO SMOKING on the premises.");
        assert_eq!(ids(&result), vec!["smoking"]);
        assert_eq!(result.overall_risk_score, 15);
        assert_eq!(engine.catalog().len(), 1);
    }
}
