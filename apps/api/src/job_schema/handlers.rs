//! Axum route handlers for the Job Posting Schema API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::job_schema::generator::generate_job_posting_schema;
use crate::job_schema::models::{JobData, JobPostingSchema};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSchemaRequest {
    pub job: JobData,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub company_id: Option<String>,
}

/// POST /api/v1/jobs/schema
///
/// Returns the schema.org JobPosting JSON-LD for a job record.
/// Records "Job Posted" when both `job_id` and `company_id` are supplied.
pub async fn handle_job_schema(
    State(state): State<AppState>,
    Json(request): Json<JobSchemaRequest>,
) -> Result<Json<JobPostingSchema>, AppError> {
    let job = &request.job;
    if job.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if job.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }
    if job.valid_through < job.date_posted {
        return Err(AppError::Validation(
            "valid_through must not precede date_posted".to_string(),
        ));
    }

    let schema = generate_job_posting_schema(job);
    info!("Job schema generated: {}", schema.identifier.value);

    if let (Some(job_id), Some(company_id)) =
        (request.job_id.as_deref(), request.company_id.as_deref())
    {
        state.analytics.track_job_posted(job_id, company_id).await;
    }

    Ok(Json(schema))
}
