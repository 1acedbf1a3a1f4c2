//! British Columbia residential tenancy clause patterns
//!
//! Residential Tenancy Act (RTA) and Strata Property Act references.
//! Malicious entries describe terms that are unenforceable or disadvantageous
//! to the tenant; the rest are informational.

use shared_types::{ClauseCategory, ClausePattern, Severity};

struct BuiltinClause {
    id: &'static str,
    category: ClauseCategory,
    name: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    is_malicious: bool,
    severity: Severity,
    legal_reference: Option<&'static str>,
    explanation: &'static str,
}

impl From<&BuiltinClause> for ClausePattern {
    fn from(c: &BuiltinClause) -> Self {
        ClausePattern {
            id: c.id.to_string(),
            category: c.category,
            name: c.name.to_string(),
            description: c.description.to_string(),
            keywords: c.keywords.iter().map(|k| k.to_string()).collect(),
            is_malicious: c.is_malicious,
            severity: c.severity,
            legal_reference: c.legal_reference.map(str::to_string),
            explanation: c.explanation.to_string(),
        }
    }
}

pub(super) fn clauses() -> Vec<ClausePattern> {
    BC_RENTAL_CLAUSES.iter().map(ClausePattern::from).collect()
}

const BC_RENTAL_CLAUSES: &[BuiltinClause] = &[
    // ========================================================================
    // Security deposit
    // ========================================================================
    BuiltinClause {
        id: "excessive-deposit",
        category: ClauseCategory::SecurityDeposit,
        name: "Excessive Security Deposit",
        description: "Deposit exceeding half month's rent",
        keywords: &[
            "security deposit",
            "damage deposit",
            "first and last",
            "two months",
            "1.5 months",
        ],
        is_malicious: true,
        severity: Severity::High,
        legal_reference: Some("BC RTA Section 19"),
        explanation: "In BC, landlords can only collect a security deposit equal to half a month's rent. Any amount exceeding this is illegal.",
    },
    BuiltinClause {
        id: "non-refundable-deposit",
        category: ClauseCategory::SecurityDeposit,
        name: "Non-Refundable Deposit",
        description: "Deposit marked as non-refundable",
        keywords: &[
            "non-refundable",
            "non refundable",
            "will not be returned",
            "forfeited",
        ],
        is_malicious: true,
        severity: Severity::High,
        legal_reference: Some("BC RTA Section 38"),
        explanation: "Security deposits must be refundable. Landlords cannot keep deposits without proper justification and documentation.",
    },
    BuiltinClause {
        id: "pet-deposit-excessive",
        category: ClauseCategory::SecurityDeposit,
        name: "Excessive Pet Deposit",
        description: "Pet deposit exceeding half month's rent",
        keywords: &["pet deposit", "pet damage deposit", "animal deposit"],
        is_malicious: true,
        severity: Severity::Medium,
        legal_reference: Some("BC RTA Section 19"),
        explanation: "Pet deposits in BC are also limited to half a month's rent, separate from the security deposit.",
    },
    // ========================================================================
    // Rent
    // ========================================================================
    BuiltinClause {
        id: "illegal-rent-increase",
        category: ClauseCategory::Rent,
        name: "Unauthorized Rent Increase",
        description: "Rent increase exceeding legal limits or without proper notice",
        keywords: &[
            "rent increase",
            "increase rent",
            "raise rent",
            "new rent amount",
        ],
        is_malicious: true,
        severity: Severity::High,
        legal_reference: Some("BC RTA Section 42"),
        explanation: "Landlords can only increase rent once per year with 3 months notice, and only by the amount set by the BC government.",
    },
    BuiltinClause {
        id: "late-fees-excessive",
        category: ClauseCategory::Rent,
        name: "Excessive Late Fees",
        description: "Late fees that may be unenforceable",
        keywords: &["late fee", "late payment", "penalty", "interest on late"],
        is_malicious: true,
        severity: Severity::Medium,
        legal_reference: Some("BC RTA"),
        explanation: "While landlords can charge reasonable late fees, excessive penalties may not be enforceable under BC law.",
    },
    BuiltinClause {
        id: "post-dated-cheques",
        category: ClauseCategory::Rent,
        name: "Required Post-Dated Cheques",
        description: "Requirement to provide post-dated cheques",
        keywords: &[
            "post-dated",
            "postdated",
            "cheques in advance",
            "year of cheques",
        ],
        is_malicious: true,
        severity: Severity::Low,
        legal_reference: Some("BC RTA Section 22"),
        explanation: "Landlords cannot require tenants to provide post-dated cheques or automatic payment authorization.",
    },
    // ========================================================================
    // Termination
    // ========================================================================
    BuiltinClause {
        id: "illegal-eviction-clause",
        category: ClauseCategory::Termination,
        name: "Illegal Eviction Terms",
        description: "Terms allowing eviction without proper process",
        keywords: &[
            "immediate eviction",
            "evict without notice",
            "terminate immediately",
            "vacate within 24",
        ],
        is_malicious: true,
        severity: Severity::High,
        legal_reference: Some("BC RTA Section 45-55"),
        explanation: "Landlords must follow proper eviction procedures. Clauses allowing immediate eviction are unenforceable.",
    },
    BuiltinClause {
        id: "waiving-notice-period",
        category: ClauseCategory::Termination,
        name: "Waived Notice Period",
        description: "Tenant waiving right to proper notice",
        keywords: &["waive notice", "no notice required", "forfeit notice period"],
        is_malicious: true,
        severity: Severity::High,
        legal_reference: Some("BC RTA Section 45"),
        explanation: "Tenants cannot waive their right to proper notice periods as defined by the RTA.",
    },
    BuiltinClause {
        id: "fixed-term-vacate",
        category: ClauseCategory::Termination,
        name: "Fixed Term Vacate Clause",
        description: "Requiring tenant to move at end of fixed term",
        keywords: &[
            "must vacate",
            "vacate clause",
            "move out at end",
            "fixed term ending",
        ],
        is_malicious: true,
        severity: Severity::High,
        legal_reference: Some("BC RTA Section 44"),
        explanation: "As of 2017, vacate clauses in fixed-term leases are no longer enforceable in BC unless specific conditions are met.",
    },
    // ========================================================================
    // Maintenance
    // ========================================================================
    BuiltinClause {
        id: "tenant-major-repairs",
        category: ClauseCategory::Maintenance,
        name: "Tenant Responsible for Major Repairs",
        description: "Making tenant responsible for structural repairs",
        keywords: &[
            "tenant responsible for repairs",
            "all repairs",
            "maintain at own expense",
            "fix at tenant cost",
        ],
        is_malicious: true,
        severity: Severity::High,
        legal_reference: Some("BC RTA Section 32"),
        explanation: "Landlords are responsible for maintaining the rental unit. Clauses shifting major repair responsibilities to tenants may be unenforceable.",
    },
    // ========================================================================
    // Privacy
    // ========================================================================
    BuiltinClause {
        id: "unrestricted-entry",
        category: ClauseCategory::Privacy,
        name: "Unrestricted Landlord Entry",
        description: "Allowing landlord entry without proper notice",
        keywords: &[
            "enter at any time",
            "access without notice",
            "right to inspect",
            "enter without permission",
        ],
        is_malicious: true,
        severity: Severity::High,
        legal_reference: Some("BC RTA Section 29"),
        explanation: "Landlords must give 24 hours written notice before entering, except in emergencies. Clauses allowing unlimited access are illegal.",
    },
    // ========================================================================
    // Pets, subletting, utilities (informational)
    // ========================================================================
    BuiltinClause {
        id: "no-pets-strata",
        category: ClauseCategory::Pets,
        name: "No Pets Clause (Strata)",
        description: "Pet restriction in strata properties",
        keywords: &["no pets", "pets not allowed", "pet free", "no animals"],
        is_malicious: false,
        severity: Severity::Low,
        legal_reference: Some("BC Strata Property Act"),
        explanation: "In strata properties, no-pet rules may be enforceable if part of strata bylaws. In non-strata rentals, landlords generally cannot prohibit pets.",
    },
    BuiltinClause {
        id: "no-subletting",
        category: ClauseCategory::Subletting,
        name: "Subletting Restrictions",
        description: "Prohibition on subletting or assignment",
        keywords: &[
            "no subletting",
            "cannot sublet",
            "no assignment",
            "cannot assign",
        ],
        is_malicious: false,
        severity: Severity::Low,
        legal_reference: Some("BC RTA Section 34"),
        explanation: "While landlords can restrict subletting, they cannot unreasonably refuse. This is important for students who may need to sublet during summer.",
    },
    BuiltinClause {
        id: "utility-responsibility",
        category: ClauseCategory::Utilities,
        name: "Utility Responsibilities",
        description: "Unclear utility payment terms",
        keywords: &[
            "utilities included",
            "tenant pays utilities",
            "hydro",
            "electricity",
            "gas",
            "water",
        ],
        is_malicious: false,
        severity: Severity::Low,
        legal_reference: None,
        explanation: "Make sure you understand which utilities you are responsible for. This should be clearly stated in the lease.",
    },
    // ========================================================================
    // Standard terms
    // ========================================================================
    BuiltinClause {
        id: "standard-notice",
        category: ClauseCategory::Termination,
        name: "Standard Notice Period",
        description: "One month notice requirement",
        keywords: &[
            "one month notice",
            "30 days notice",
            "notice to end tenancy",
        ],
        is_malicious: false,
        severity: Severity::Low,
        legal_reference: Some("BC RTA Section 45"),
        explanation: "Standard notice period for month-to-month tenancies is one month. This is a normal clause.",
    },
    BuiltinClause {
        id: "condition-inspection",
        category: ClauseCategory::Maintenance,
        name: "Move-in/Move-out Inspection",
        description: "Requirement for condition inspection",
        keywords: &[
            "condition inspection",
            "move-in inspection",
            "move-out inspection",
            "inspection report",
        ],
        is_malicious: false,
        severity: Severity::Low,
        legal_reference: Some("BC RTA Section 23"),
        explanation: "Condition inspections are required by law and protect both landlord and tenant. Make sure to complete these.",
    },
    BuiltinClause {
        id: "guest-restrictions",
        category: ClauseCategory::Other,
        name: "Excessive Guest Restrictions",
        description: "Unreasonable limits on having guests",
        keywords: &[
            "no overnight guests",
            "guest limit",
            "visitors must",
            "register guests",
        ],
        is_malicious: true,
        severity: Severity::Medium,
        legal_reference: None,
        explanation: "While landlords can set reasonable rules, overly restrictive guest policies may infringe on your right to quiet enjoyment.",
    },
    BuiltinClause {
        id: "waiving-rights",
        category: ClauseCategory::Other,
        name: "Waiving Tenant Rights",
        description: "Clauses attempting to waive RTA protections",
        keywords: &["waive rights", "give up rights", "not covered by", "exempt from"],
        is_malicious: true,
        severity: Severity::High,
        legal_reference: Some("BC RTA Section 5"),
        explanation: "Any clause that attempts to waive your rights under the Residential Tenancy Act is void and unenforceable.",
    },
];
