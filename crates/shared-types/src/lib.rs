//! Data types shared between the clause engine, document intake, and the
//! review server.

pub mod types;

pub use types::{
    AnalysisResult, ClauseCategory, ClausePattern, FlaggedClause, KeyDetail, RiskLevel, Severity,
};
