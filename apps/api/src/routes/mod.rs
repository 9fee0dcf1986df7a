pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::bias::handlers::handle_bias_check;
use crate::feedback::handlers::handle_feedback;
use crate::job_schema::handlers::handle_job_schema;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job posting API
        .route("/api/v1/jobs/bias-check", post(handle_bias_check))
        .route("/api/v1/jobs/schema", post(handle_job_schema))
        // Candidate API
        .route("/api/v1/candidates/feedback", post(handle_feedback))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analytics::tests::RecordingSink;
    use crate::analytics::Analytics;
    use crate::bias::detector::RuleBasedBiasDetector;
    use crate::config::{AppEnvironment, Config};
    use crate::feedback::generator::FeedbackGenerator;

    fn test_state(sink: Arc<RecordingSink>) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                environment: AppEnvironment::Development,
                mixpanel_token: None,
            },
            bias_checker: Arc::new(RuleBasedBiasDetector::new()),
            feedback: FeedbackGenerator::new(),
            analytics: Analytics::new(sink),
        }
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_environment() {
        let router = build_router(test_state(Arc::new(RecordingSink::default())));
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["environment"], "development");
    }

    #[tokio::test]
    async fn test_bias_check_endpoint_scores_and_tracks() {
        let sink = Arc::new(RecordingSink::default());
        let router = build_router(test_state(sink.clone()));

        let (status, body) = post_json(
            router,
            "/api/v1/jobs/bias-check",
            json!({
                "description": "We need an aggressive rockstar ninja, must have vehicle",
                "job_id": "job-42"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 75);
        assert_eq!(body["compliant"], false);
        assert_eq!(body["issues"].as_array().unwrap().len(), 4);
        assert_eq!(body["issues"][0]["category"], "gender");
        assert_eq!(body["issues"][0]["matched_text"], "rockstar");

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Bias Detected");
        assert_eq!(events[0].properties["bias_types"], json!(["gender", "socioeconomic"]));
    }

    #[tokio::test]
    async fn test_clean_description_records_no_event() {
        let sink = Arc::new(RecordingSink::default());
        let router = build_router(test_state(sink.clone()));

        let (status, body) = post_json(
            router,
            "/api/v1/jobs/bias-check",
            json!({ "description": "We welcome all qualified applicants", "job_id": "job-1" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["compliant"], true);
        assert!(sink.names().is_empty());
    }

    #[tokio::test]
    async fn test_missing_description_is_zero_bias() {
        let router = build_router(test_state(Arc::new(RecordingSink::default())));
        let (status, body) = post_json(router, "/api/v1/jobs/bias-check", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_feedback_endpoint_returns_gaps_and_tracks_quality() {
        let sink = Arc::new(RecordingSink::default());
        let router = build_router(test_state(sink.clone()));

        let (status, body) = post_json(
            router,
            "/api/v1/candidates/feedback",
            json!({
                "candidate": {
                    "name": "Sam Rivera",
                    "email": "sam@example.com",
                    "experience_years": 0,
                    "skills": ["Illustrator"],
                    "education": "BA Design"
                },
                "job": {
                    "title": "Data Engineer",
                    "required_skills": ["Spark", "SQL"],
                    "experience_required_years": 5,
                    "industry": "healthcare"
                },
                "rejection_reason": "Skills mismatch",
                "candidate_id": "cand-7",
                "job_id": "job-3",
                "feedback_quality": 0.5
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["improvements"],
            json!([
                "Additional experience needed in: Spark, SQL",
                "Role requires 5 more years of relevant experience"
            ])
        );
        assert_eq!(body["strengths"], json!(["Clear interest in the role and industry"]));
        assert!(body["message"].as_str().unwrap().starts_with("Dear Sam Rivera,"));
        assert_eq!(
            body["suggestions"].as_array().unwrap().last().unwrap(),
            "Set up job alerts for similar healthcare positions"
        );
        assert_eq!(sink.names(), vec!["Feedback Generated"]);
    }

    #[tokio::test]
    async fn test_schema_endpoint_rejects_blank_title() {
        let router = build_router(test_state(Arc::new(RecordingSink::default())));
        let mut job = serde_json::to_value(
            crate::job_schema::generator::tests::make_job_data(),
        )
        .unwrap();
        job["title"] = json!("   ");

        let (status, body) = post_json(router, "/api/v1/jobs/schema", json!({ "job": job })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_schema_endpoint_returns_json_ld_and_tracks_posting() {
        let sink = Arc::new(RecordingSink::default());
        let router = build_router(test_state(sink.clone()));
        let job = serde_json::to_value(crate::job_schema::generator::tests::make_job_data())
            .unwrap();

        let (status, body) = post_json(
            router,
            "/api/v1/jobs/schema",
            json!({ "job": job, "job_id": "job-5", "company_id": "acme" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["@type"], "JobPosting");
        assert!(body["identifier"]["value"].as_str().unwrap().starts_with("job_"));
        assert_eq!(sink.names(), vec!["Job Posted"]);
    }
}
