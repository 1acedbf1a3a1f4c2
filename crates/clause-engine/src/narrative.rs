//! Summary and recommendation text
//!
//! Wording is fixed so results stay testable byte for byte. The closing
//! summary sentence is chosen by score band (see [`crate::scoring`]).

use std::collections::HashSet;

use shared_types::{FlaggedClause, KeyDetail};

use crate::catalog::category_label;
use crate::extractors::{DEPOSIT_LABEL, RENT_LABEL};
use crate::scoring::{CAUTION_THRESHOLD, WARNING_THRESHOLD};

pub const MAX_RECOMMENDATIONS: usize = 5;

const SUMMARY_OPENING: &str =
    "This appears to be a residential tenancy agreement for a property in British Columbia. ";

const NO_CONCERNS_ADVICE: [&str; 3] = [
    "This contract appears to follow BC tenancy laws, but always read everything carefully before signing.",
    "Complete a thorough move-in inspection and keep a copy of the report.",
    "Take photos of the unit's condition before moving in.",
];

const CONCERNS_ADVICE: [&str; 3] = [
    "Consider negotiating the removal of problematic clauses before signing.",
    "Contact the BC Residential Tenancy Branch (RTB) for free advice: 1-800-665-8779",
    "Consult your university's student legal services or tenant advocacy group.",
];

const SIGNED_COPY_REMINDER: &str = "Keep a signed copy of your lease in a safe place.";

fn find_detail<'a>(key_details: &'a [KeyDetail], label: &str) -> Option<&'a KeyDetail> {
    key_details.iter().find(|d| d.label == label)
}

/// Narrative summary: opening, optional rent and deposit sentences, and a
/// closing sentence selected by score band.
pub fn build_summary(key_details: &[KeyDetail], flagged: &[FlaggedClause], score: u32) -> String {
    let malicious_count = flagged.iter().filter(|f| f.clause.is_malicious).count();

    let mut summary = String::from(SUMMARY_OPENING);

    if let Some(rent) = find_detail(key_details, RENT_LABEL) {
        summary.push_str(&format!("The monthly rent is listed as ${}. ", rent.value));
    }

    if let Some(deposit) = find_detail(key_details, DEPOSIT_LABEL) {
        summary.push_str(&format!(
            "A security deposit of ${} is required. ",
            deposit.value
        ));
    }

    let closing = if score == 0 {
        "No concerning clauses were detected in this contract. However, always read the full document carefully.".to_string()
    } else if score < CAUTION_THRESHOLD {
        format!(
            "We found {} potentially concerning clause(s). These may warrant further review.",
            malicious_count
        )
    } else if score < WARNING_THRESHOLD {
        format!(
            "We identified {} problematic clause(s) that may violate BC tenancy laws. We recommend seeking advice before signing.",
            malicious_count
        )
    } else {
        format!(
            "WARNING: This contract contains {} highly problematic clause(s) that likely violate BC tenancy laws. We strongly recommend consulting with a tenant rights organization before signing.",
            malicious_count
        )
    };
    summary.push_str(&closing);

    summary
}

/// Advice list, truncated to [`MAX_RECOMMENDATIONS`] from the end.
///
/// With malicious clauses present, one sentence per distinct category is
/// added in first-seen order. Truncation can drop those sentences and the
/// final signed-copy reminder when many categories are involved.
pub fn build_recommendations(flagged: &[FlaggedClause]) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();
    let mut malicious = flagged.iter().filter(|f| f.clause.is_malicious).peekable();

    if malicious.peek().is_none() {
        recommendations.extend(NO_CONCERNS_ADVICE.iter().map(|s| s.to_string()));
    } else {
        recommendations.extend(CONCERNS_ADVICE.iter().map(|s| s.to_string()));

        let mut seen = HashSet::new();
        for f in malicious {
            if seen.insert(f.clause.category) {
                recommendations.push(format!(
                    "Pay special attention to the {} section of this contract.",
                    category_label(f.clause.category)
                ));
            }
        }
    }

    recommendations.push(SIGNED_COPY_REMINDER.to_string());
    recommendations.truncate(MAX_RECOMMENDATIONS);

    recommendations
}
