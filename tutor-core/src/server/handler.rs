use super::types::{ApiError, HealthResponse};
use crate::answer::{AnswerResponse, Query};
use crate::assistant::Assistant;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// `POST /api/`: answers a student question.
pub async fn answer_question(
    State(assistant): State<Arc<Assistant>>,
    Json(query): Json<Query>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let response = assistant.answer(&query).await?;
    Ok(Json(response))
}

/// `GET /health`: liveness plus corpus sizes.
pub async fn health(State(assistant): State<Arc<Assistant>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        course_records: assistant.store().course().len(),
        forum_records: assistant.store().forum().len(),
    })
}
