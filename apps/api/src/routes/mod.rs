pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::ats;
use crate::parser;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_mb * 1024 * 1024;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume intake API
        .route("/api/v1/resumes/parse", post(parser::handlers::handle_parse))
        .route(
            "/api/v1/resumes/parse-text",
            post(parser::handlers::handle_parse_text),
        )
        .route("/api/v1/resumes/analyze", post(parser::handlers::handle_analyze))
        .route("/api/v1/resumes/score", post(ats::handlers::handle_score))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
