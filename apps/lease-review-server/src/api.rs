//! API handlers for the lease review server
//!
//! Provides REST endpoints for:
//! - Contract analysis (pasted text and uploaded documents)
//! - Clause catalog listing
//! - Category listing

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use clause_engine::{category_label, severity_style};
use document_text::{extract_document, validate_text, DocumentKind};
use serde::{Deserialize, Serialize};
use shared_types::{AnalysisResult, ClauseCategory, ClausePattern, RiskLevel};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "lease-review-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Catalog entry with its display metadata
#[derive(Serialize)]
pub struct ClauseInfo {
    #[serde(flatten)]
    pub pattern: ClausePattern,
    pub category_label: &'static str,
    pub severity_style: &'static str,
}

/// Clause catalog response
#[derive(Serialize)]
pub struct ClauseListResponse {
    pub success: bool,
    pub clauses: Vec<ClauseInfo>,
    pub count: usize,
}

/// Handler: GET /api/clauses
pub async fn handle_list_clauses(State(state): State<AppState>) -> Json<ClauseListResponse> {
    let clauses: Vec<ClauseInfo> = state
        .engine
        .catalog()
        .patterns()
        .iter()
        .map(|p| ClauseInfo {
            category_label: category_label(p.category),
            severity_style: severity_style(p.severity),
            pattern: p.clone(),
        })
        .collect();

    let count = clauses.len();

    Json(ClauseListResponse {
        success: true,
        clauses,
        count,
    })
}

#[derive(Serialize)]
pub struct CategoryInfo {
    pub category: ClauseCategory,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<CategoryInfo>,
}

/// Handler: GET /api/categories
pub async fn handle_list_categories() -> Json<CategoryListResponse> {
    let categories = ClauseCategory::ALL
        .iter()
        .map(|&category| CategoryInfo {
            category,
            label: category_label(category),
        })
        .collect();

    Json(CategoryListResponse {
        success: true,
        categories,
    })
}

/// Request body for text analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    /// Full contract text
    pub text: String,
}

/// Request body for document analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeDocumentRequest {
    /// Original file name, used for format detection
    pub filename: String,
    /// Base64-encoded file contents
    pub data_base64: String,
}

/// Where an uploaded contract's text came from
#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    pub filename: String,
    pub kind: DocumentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    pub characters: usize,
}

/// Analysis response envelope
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub risk_level: &'static str,
    /// Flagged clauses marked malicious
    pub problematic_count: usize,
    /// Flagged clauses that are informational only
    pub notable_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentInfo>,
    pub result: AnalysisResult,
}

impl AnalysisResponse {
    pub(crate) fn new(result: AnalysisResult, document: Option<DocumentInfo>) -> Self {
        Self {
            success: true,
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            risk_level: RiskLevel::from_score(result.overall_risk_score).label(),
            problematic_count: result.problematic_clauses().count(),
            notable_count: result.notable_clauses().count(),
            document,
            result,
        }
    }
}

/// Handler: POST /api/analyze
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResponse>, ServerError> {
    // Length is checked on the trimmed text; positions refer to the text as sent
    validate_text(&req.text, state.min_text_length)?;

    let result = state.engine.analyze(&req.text);
    info!(
        "Analyzed {} characters of text: score {}, {} clause(s) flagged",
        req.text.chars().count(),
        result.overall_risk_score,
        result.flagged_clauses.len()
    );

    Ok(Json(AnalysisResponse::new(result, None)))
}

/// Handler: POST /api/analyze/document
pub async fn handle_analyze_document(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeDocumentRequest>,
) -> Result<Json<AnalysisResponse>, ServerError> {
    if req.filename.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "filename must not be empty".to_string(),
        ));
    }

    let data = BASE64.decode(req.data_base64.trim()).map_err(|e| {
        warn!("Rejected upload '{}': invalid base64: {}", req.filename, e);
        ServerError::InvalidRequest(format!("data_base64 is not valid base64: {}", e))
    })?;

    let extracted = extract_document(&req.filename, &data).map_err(|e| {
        warn!("Rejected upload '{}': {}", req.filename, e);
        ServerError::from(e)
    })?;

    validate_text(&extracted.text, state.min_text_length)?;
    let characters = extracted.text.chars().count();

    let result = state.engine.analyze(&extracted.text);
    info!(
        "Analyzed '{}' ({:?}, {} characters): score {}, {} clause(s) flagged",
        req.filename,
        extracted.kind,
        characters,
        result.overall_risk_score,
        result.flagged_clauses.len()
    );

    let document = DocumentInfo {
        filename: req.filename,
        kind: extracted.kind,
        page_count: extracted.page_count,
        characters,
    };

    Ok(Json(AnalysisResponse::new(result, Some(document))))
}
