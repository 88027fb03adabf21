//! HTTP handlers
//!
//! Request and response bodies use snake_case field names, the shape existing
//! callers of the classify endpoint already consume.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::chunk::classify_document;
use crate::error::{Result, ScanError};
use crate::rules::{evaluate_policy, RuleViolation, UserRule, Verdict};
use crate::types::{ClassificationRecord, ClassificationRequest};

// =============================================================================
// Request / Response types
// =============================================================================

/// Response from the classify endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub classifications: Vec<ClassificationRecord>,
    pub section_id: String,
    pub total_found: usize,
}

/// Request body for whole-document analysis
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rules: Vec<UserRule>,
}

/// Response from the analyze endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub verdict: Verdict,
    pub risk_score: u32,
    pub violations: Vec<RuleViolation>,
    pub sections: usize,
    pub analyzed_at: DateTime<Utc>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /classify: classify a single section
pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassificationRequest>,
) -> Result<Json<ClassifyResponse>> {
    request.validate()?;

    let classifications = state
        .classifier
        .classify(&request.text, &request.section_id)?;

    Ok(Json(ClassifyResponse {
        total_found: classifications.len(),
        section_id: request.section_id,
        classifications,
    }))
}

/// POST /analyze: chunk a document, classify every section, apply user rules
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    if request.text.is_empty() {
        return Err(ScanError::InvalidInput("Missing text".to_string()));
    }

    let records = classify_document(&state.classifier, &request.text, &state.config.chunk)?;
    let sections = records
        .iter()
        .map(|r| r.section_id.as_str())
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    let evaluation = evaluate_policy(&records, &request.rules);

    tracing::info!(
        sections,
        verdict = %evaluation.verdict,
        risk_score = evaluation.risk_score,
        "Document analyzed"
    );

    Ok(Json(AnalyzeResponse {
        verdict: evaluation.verdict,
        risk_score: evaluation.risk_score,
        violations: evaluation.violations,
        sections,
        analyzed_at: Utc::now(),
    }))
}
