// Labeled key-fact extraction (rent, deposit, dates, parties)
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ClauseCategory, KeyDetail};

pub const RENT_LABEL: &str = "Monthly Rent";
pub const DEPOSIT_LABEL: &str = "Security Deposit";

struct KeyDetailRule {
    label: &'static str,
    pattern: Regex,
    category: ClauseCategory,
}

impl KeyDetailRule {
    fn new(label: &'static str, pattern: &str, category: ClauseCategory) -> Self {
        Self {
            label,
            pattern: Regex::new(pattern).unwrap(),
            category,
        }
    }
}

lazy_static! {
    /// Extraction rules in output order. Each has exactly one capture group.
    static ref KEY_DETAIL_RULES: Vec<KeyDetailRule> = vec![
        KeyDetailRule::new(
            RENT_LABEL,
            r"(?i)(?:monthly\s+)?rent[:\s]+\$?([0-9,]+(?:\.[0-9]{2})?)",
            ClauseCategory::Rent,
        ),
        KeyDetailRule::new(
            DEPOSIT_LABEL,
            r"(?i)(?:security|damage)\s+deposit[:\s]+\$?([0-9,]+(?:\.[0-9]{2})?)",
            ClauseCategory::SecurityDeposit,
        ),
        KeyDetailRule::new(
            "Lease Start Date",
            r"(?i)(?:start|commencement|beginning)\s+date[:\s]+([A-Za-z]+\s+[0-9]{1,2},?\s+[0-9]{4}|[0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{2,4})",
            ClauseCategory::Termination,
        ),
        KeyDetailRule::new(
            "Lease End Date",
            r"(?i)(?:end|termination|expiry)\s+date[:\s]+([A-Za-z]+\s+[0-9]{1,2},?\s+[0-9]{4}|[0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{2,4})",
            ClauseCategory::Termination,
        ),
        KeyDetailRule::new(
            "Property Address",
            r"(?i)(?:premises|property|address)[:\s]+([^\n]{10,100})",
            ClauseCategory::Other,
        ),
        KeyDetailRule::new(
            "Landlord Name",
            r"(?i)(?:landlord|owner|lessor)[:\s]+([A-Za-z\s]{3,50})",
            ClauseCategory::Other,
        ),
        KeyDetailRule::new(
            "Notice Period",
            r"(?i)([0-9]+)\s*(?:days?|months?)\s+(?:written\s+)?notice",
            ClauseCategory::Termination,
        ),
    ];
}

/// Apply every extraction rule to the text.
///
/// Each rule contributes at most one detail, taken from its first match in
/// the text. An empty capture is skipped; otherwise the trimmed capture is
/// kept even if trimming leaves it empty.
pub fn extract_key_details(text: &str) -> Vec<KeyDetail> {
    KEY_DETAIL_RULES
        .iter()
        .filter_map(|rule| {
            let captured = rule.pattern.captures(text)?.get(1)?.as_str();
            if captured.is_empty() {
                return None;
            }
            Some(KeyDetail {
                label: rule.label.to_string(),
                value: captured.trim().to_string(),
                category: rule.category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn value_of(text: &str, label: &str) -> Option<String> {
        extract_key_details(text)
            .into_iter()
            .find(|d| d.label == label)
            .map(|d| d.value)
    }

    #[test]
    fn test_extracts_rent() {
        assert_eq!(value_of("rent: $1200", RENT_LABEL).as_deref(), Some("1200"));
        assert_eq!(
            value_of("Monthly Rent: $1,850.00 due on the first", RENT_LABEL).as_deref(),
            Some("1,850.00")
        );
        assert_eq!(value_of("RENT 950", RENT_LABEL).as_deref(), Some("950"));
    }

    #[test]
    fn test_rent_needs_an_amount() {
        assert_eq!(value_of("The rent is due monthly", RENT_LABEL), None);
    }

    #[test]
    fn test_extracts_deposit() {
        assert_eq!(
            value_of("Security Deposit: $925", DEPOSIT_LABEL).as_deref(),
            Some("925")
        );
        assert_eq!(
            value_of("damage deposit $500.50", DEPOSIT_LABEL).as_deref(),
            Some("500.50")
        );
        // A verb between "deposit" and the amount defeats the rule
        assert_eq!(value_of("The security deposit is $3000", DEPOSIT_LABEL), None);
    }

    #[test]
    fn test_extracts_dates() {
        let text = "Start date: September 1, 2024\nEnd Date: 08/31/2025";
        assert_eq!(
            value_of(text, "Lease Start Date").as_deref(),
            Some("September 1, 2024")
        );
        assert_eq!(value_of(text, "Lease End Date").as_deref(), Some("08/31/2025"));

        assert_eq!(
            value_of("Commencement date 1-15-24", "Lease Start Date").as_deref(),
            Some("1-15-24")
        );
    }

    #[test]
    fn test_extracts_address_up_to_line_end() {
        let text = "Premises: 1234 Main Street, Vancouver, BC\nTenant: Jane Doe";
        assert_eq!(
            value_of(text, "Property Address").as_deref(),
            Some("1234 Main Street, Vancouver, BC")
        );
    }

    #[test]
    fn test_short_address_is_ignored() {
        assert_eq!(value_of("Address: Unit 4\n", "Property Address"), None);
    }

    #[test]
    fn test_extracts_landlord_name() {
        assert_eq!(
            value_of("Landlord: John Smith, 42 Oak Road", "Landlord Name").as_deref(),
            Some("John Smith")
        );
    }

    #[test]
    fn test_extracts_notice_period() {
        assert_eq!(
            value_of("Tenant must give 30 days written notice", "Notice Period").as_deref(),
            Some("30")
        );
        assert_eq!(
            value_of("2 months notice is required", "Notice Period").as_deref(),
            Some("2")
        );
    }

    #[test]
    fn test_details_follow_rule_order() {
        let text = "Notice: 60 days notice. Security deposit: $600. Rent: $1200.";
        let labels: Vec<_> = extract_key_details(text)
            .into_iter()
            .map(|d| d.label)
            .collect();
        assert_eq!(labels, vec![RENT_LABEL, DEPOSIT_LABEL, "Notice Period"]);
    }

    #[test]
    fn test_categories_are_attached() {
        let details = extract_key_details("Rent: $1200. Security deposit: $600.");
        assert_eq!(details[0].category, ClauseCategory::Rent);
        assert_eq!(details[1].category, ClauseCategory::SecurityDeposit);
    }

    #[test]
    fn test_empty_text_has_no_details() {
        assert!(extract_key_details("").is_empty());
    }
}
