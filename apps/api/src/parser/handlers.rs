use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::{self, AtsScoreResult};
use crate::errors::AppError;
use crate::parser::models::StructuredResume;
use crate::parser::segment;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseTextRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub resume: StructuredResume,
    /// Filename of the uploaded document, or "text" for raw-text requests.
    pub source: String,
    pub parsed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub resume: StructuredResume,
    pub score: AtsScoreResult,
    pub analyzed_at: DateTime<Utc>,
}

/// POST /api/v1/resumes/parse
/// Multipart upload (`file` field) → extracted text → structured resume.
pub async fn handle_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::Validation("uploaded file has no filename".to_string()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?
            .to_vec();

        info!("Parsing upload {filename} ({} bytes)", bytes.len());
        let raw_text = state.extractor.extract(&filename, bytes).await?;
        let resume = segment(&raw_text);

        return Ok(Json(ParseResponse {
            resume,
            source: filename,
            parsed_at: Utc::now(),
        }));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}

/// POST /api/v1/resumes/parse-text
/// Pre-extracted text → structured resume. For callers that own their own
/// document decoding.
pub async fn handle_parse_text(
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    let resume = segment(&req.raw_text);
    Ok(Json(ParseResponse {
        resume,
        source: "text".to_string(),
        parsed_at: Utc::now(),
    }))
}

/// POST /api/v1/resumes/analyze
/// Text → structured resume → compatibility score, in one round trip.
pub async fn handle_analyze(
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let resume = segment(&req.raw_text);
    let score = ats::score(&resume);
    info!(
        "Analyzed text resume: {}% grade {}",
        score.percentage, score.grade
    );
    Ok(Json(AnalyzeResponse {
        resume,
        score,
        analyzed_at: Utc::now(),
    }))
}
