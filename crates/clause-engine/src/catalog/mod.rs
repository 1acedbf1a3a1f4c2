//! Clause catalog
//!
//! An ordered, read-only list of [`ClausePattern`] records. Catalog order is
//! scan order, so it decides which entries appear first in an analysis.
//!
//! Catalogs come from two places:
//! - the built-in British Columbia catalog ([`default_catalog`])
//! - a JSON array of clause patterns loaded at startup ([`Catalog::from_path`])
//!
//! Validation happens once at load time. The analysis itself never checks
//! catalog shape.

mod british_columbia;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use serde::Serialize;
use shared_types::{ClauseCategory, ClausePattern, Severity};
use thiserror::Error;

lazy_static! {
    static ref DEFAULT_CATALOG: Catalog = Catalog {
        patterns: british_columbia::clauses(),
    };
}

/// Errors raised while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog entry #{0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate clause id '{0}'")]
    DuplicateId(String),

    #[error("Clause '{0}' has no usable keywords")]
    NoKeywords(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    patterns: Vec<ClausePattern>,
}

impl Catalog {
    /// Build a catalog from patterns, rejecting empty ids, duplicate ids, and
    /// entries without a non-empty keyword.
    pub fn new(patterns: Vec<ClausePattern>) -> Result<Self, CatalogError> {
        validate(&patterns)?;
        Ok(Self { patterns })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of clause patterns
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let patterns: Vec<ClausePattern> = serde_json::from_str(json)?;
        Self::new(patterns)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn patterns(&self) -> &[ClausePattern] {
        &self.patterns
    }

    pub fn get(&self, id: &str) -> Option<&ClausePattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl AsRef<[ClausePattern]> for Catalog {
    fn as_ref(&self) -> &[ClausePattern] {
        &self.patterns
    }
}

fn validate(patterns: &[ClausePattern]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for (index, pattern) in patterns.iter().enumerate() {
        if pattern.id.trim().is_empty() {
            return Err(CatalogError::EmptyId(index));
        }
        if !seen.insert(pattern.id.as_str()) {
            return Err(CatalogError::DuplicateId(pattern.id.clone()));
        }
        if pattern.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(CatalogError::NoKeywords(pattern.id.clone()));
        }
    }

    Ok(())
}

/// The built-in BC residential tenancy catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Display label for a category
pub fn category_label(category: ClauseCategory) -> &'static str {
    match category {
        ClauseCategory::SecurityDeposit => "Security Deposit",
        ClauseCategory::Rent => "Rent & Payments",
        ClauseCategory::Termination => "Termination & Eviction",
        ClauseCategory::Maintenance => "Maintenance & Repairs",
        ClauseCategory::Privacy => "Privacy & Access",
        ClauseCategory::Pets => "Pets",
        ClauseCategory::Subletting => "Subletting",
        ClauseCategory::Utilities => "Utilities",
        ClauseCategory::Other => "Other Terms",
    }
}

/// Badge style classes used by the presentation layer
pub fn severity_style(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300",
        Severity::Medium => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300"
        }
        Severity::High => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(id: &str, keywords: &[&str]) -> ClausePattern {
        ClausePattern {
            id: id.to_string(),
            category: ClauseCategory::Other,
            name: id.to_string(),
            description: String::new(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            is_malicious: false,
            severity: Severity::Low,
            legal_reference: None,
            explanation: String::new(),
        }
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 18);
        assert!(validate(catalog.patterns()).is_ok());
    }

    #[test]
    fn test_default_catalog_order_starts_with_deposits() {
        let ids: Vec<_> = default_catalog()
            .patterns()
            .iter()
            .take(3)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["excessive-deposit", "non-refundable-deposit", "pet-deposit-excessive"]
        );
    }

    #[test]
    fn test_get_by_id() {
        let catalog = default_catalog();
        let clause = catalog.get("unrestricted-entry").unwrap();
        assert_eq!(clause.category, ClauseCategory::Privacy);
        assert_eq!(clause.severity, Severity::High);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(vec![pattern("a", &["x"]), pattern("a", &["y"])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_rejects_empty_id() {
        let err = Catalog::new(vec![pattern("ok", &["x"]), pattern("  ", &["y"])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId(1)));
    }

    #[test]
    fn test_rejects_entry_without_keywords() {
        let err = Catalog::new(vec![pattern("a", &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::NoKeywords(_)));

        let err = Catalog::new(vec![pattern("b", &["", " "])]).unwrap_err();
        assert!(matches!(err, CatalogError::NoKeywords(_)));
    }

    #[test]
    fn test_json_round_trip_through_default_catalog() {
        let json = serde_json::to_string(default_catalog()).unwrap();
        let parsed = Catalog::from_json_str(&json).unwrap();
        assert_eq!(&parsed, default_catalog());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::from_path(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }

    #[test]
    fn test_every_category_has_a_label() {
        for category in ClauseCategory::ALL {
            assert!(!category_label(category).is_empty());
        }
        assert_eq!(category_label(ClauseCategory::Rent), "Rent & Payments");
    }

    #[test]
    fn test_severity_styles_differ() {
        assert!(severity_style(Severity::High).contains("red"));
        assert!(severity_style(Severity::Medium).contains("yellow"));
        assert!(severity_style(Severity::Low).contains("blue"));
    }
}
