use axum::Json;

use crate::ats::{self, AtsScoreResult};
use crate::errors::AppError;
use crate::parser::models::StructuredResume;

/// POST /api/v1/resumes/score
/// Scores a structured resume directly — parsed from a document or built in
/// a form, the scorer does not care where it came from.
pub async fn handle_score(
    Json(resume): Json<StructuredResume>,
) -> Result<Json<AtsScoreResult>, AppError> {
    Ok(Json(ats::score(&resume)))
}
