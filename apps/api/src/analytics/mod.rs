//! Analytics: forwards named product events to an external collector.
//!
//! `Analytics` wraps an `Arc<dyn AnalyticsSink>` chosen at startup:
//! `LogSink` in development or when no token is configured, `MixpanelSink`
//! otherwise. Tracking is fire-and-report: sinks log failures and never
//! propagate them to the request that triggered the event.

pub mod mixpanel;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::analytics::mixpanel::MixpanelSink;
use crate::bias::models::BiasCategory;
use crate::config::{AppEnvironment, Config};

pub const JOB_POSTED: &str = "Job Posted";
pub const BIAS_DETECTED: &str = "Bias Detected";
pub const FEEDBACK_GENERATED: &str = "Feedback Generated";

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub properties: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>, properties: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            properties,
            timestamp: Utc::now(),
        }
    }
}

#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn track(&self, event: AnalyticsEvent);
}

/// Development backend: events go to the log only.
pub struct LogSink;

#[async_trait]
impl AnalyticsSink for LogSink {
    async fn track(&self, event: AnalyticsEvent) {
        let properties = Value::Object(event.properties);
        info!("Analytics event: {} {}", event.name, properties);
    }
}

#[derive(Clone)]
pub struct Analytics {
    sink: Arc<dyn AnalyticsSink>,
}

impl Analytics {
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { sink }
    }

    pub fn from_config(config: &Config) -> Self {
        match (&config.environment, &config.mixpanel_token) {
            (AppEnvironment::Development, _) | (_, None) => {
                info!("Analytics: log-only sink ({})", config.environment.as_str());
                Self::new(Arc::new(LogSink))
            }
            (environment, Some(token)) => {
                match MixpanelSink::new(token.clone(), environment.as_str()) {
                    Ok(sink) => {
                        info!("Analytics: Mixpanel sink ({})", environment.as_str());
                        Self::new(Arc::new(sink))
                    }
                    Err(e) => {
                        warn!("Analytics: Mixpanel client unavailable, logging only: {e}");
                        Self::new(Arc::new(LogSink))
                    }
                }
            }
        }
    }

    pub async fn track_event(&self, event: AnalyticsEvent) {
        self.sink.track(event).await;
    }

    pub async fn track_job_posted(&self, job_id: &str, company_id: &str) {
        self.track_event(AnalyticsEvent::new(
            JOB_POSTED,
            properties(json!({ "job_id": job_id, "company_id": company_id })),
        ))
        .await;
    }

    pub async fn track_bias_detected(&self, job_id: &str, score: u32, categories: &[BiasCategory]) {
        let bias_types: Vec<&str> = categories.iter().map(BiasCategory::as_str).collect();
        self.track_event(AnalyticsEvent::new(
            BIAS_DETECTED,
            properties(json!({
                "job_id": job_id,
                "bias_score": score,
                "bias_types": bias_types,
            })),
        ))
        .await;
    }

    /// `feedback_quality` is computed by the caller.
    pub async fn track_feedback_generated(
        &self,
        candidate_id: &str,
        job_id: &str,
        feedback_quality: f64,
    ) {
        self.track_event(AnalyticsEvent::new(
            FEEDBACK_GENERATED,
            properties(json!({
                "candidate_id": candidate_id,
                "job_id": job_id,
                "feedback_quality": feedback_quality,
            })),
        ))
        .await;
    }
}

fn properties(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
