//! Axum route handlers for the Bias Detection API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::bias::models::BiasCheckResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BiasCheckRequest {
    /// Missing or empty text scores as zero bias.
    #[serde(default)]
    pub description: String,
    /// When set and issues are found, a "Bias Detected" event is recorded.
    #[serde(default)]
    pub job_id: Option<String>,
}

/// POST /api/v1/jobs/bias-check
///
/// Scores a job description for discriminatory language. Never rejects
/// the text itself; an empty description is simply compliant.
pub async fn handle_bias_check(
    State(state): State<AppState>,
    Json(request): Json<BiasCheckRequest>,
) -> Json<BiasCheckResult> {
    let result = state
        .bias_checker
        .check_job_description(&request.description)
        .await;

    info!(
        "Bias check: score {} ({} issues, compliant={})",
        result.score,
        result.issues.len(),
        result.compliant
    );

    if let Some(job_id) = request.job_id.as_deref() {
        if !result.issues.is_empty() {
            state
                .analytics
                .track_bias_detected(job_id, result.score, &result.categories())
                .await;
        }
    }

    Json(result)
}
