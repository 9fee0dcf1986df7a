//! Axum route handlers for the Candidate Feedback API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::feedback::models::{CandidateProfile, FeedbackResult, JobRequirements};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub candidate: CandidateProfile,
    pub job: JobRequirements,
    #[serde(default)]
    pub rejection_reason: String,
    // Analytics correlation. "Feedback Generated" is recorded only when all three are set.
    #[serde(default)]
    pub candidate_id: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub feedback_quality: Option<f64>,
}

/// POST /api/v1/candidates/feedback
///
/// Produces structured rejection feedback for a candidate against a job.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Json<FeedbackResult> {
    let result = state
        .feedback
        .generate_feedback(&request.candidate, &request.job, &request.rejection_reason)
        .await;

    info!(
        "Feedback generated for '{}': {} strengths, {} improvements",
        request.job.title,
        result.strengths.len(),
        result.improvements.len()
    );

    if let (Some(candidate_id), Some(job_id), Some(quality)) = (
        request.candidate_id.as_deref(),
        request.job_id.as_deref(),
        request.feedback_quality,
    ) {
        state
            .analytics
            .track_feedback_generated(candidate_id, job_id, quality)
            .await;
    }

    Json(result)
}
