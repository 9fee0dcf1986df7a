//! Mixpanel backend for `AnalyticsSink`. One POST per event, no retries.

use std::time::Duration;

use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::analytics::{AnalyticsEvent, AnalyticsSink};

const MIXPANEL_TRACK_URL: &str = "https://api.mixpanel.com/track";
/// Tracking is awaited inside request handlers, so a stalled collector
/// must not hold the response for longer than this.
const TRACK_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Collector error (status {status}): {message}")]
    Api { status: u16, message: String },
}

pub struct MixpanelSink {
    client: Client,
    endpoint: String,
    token: String,
    environment: String,
}

impl MixpanelSink {
    pub fn new(token: String, environment: &str) -> Result<Self, AnalyticsError> {
        Self::with_endpoint(MIXPANEL_TRACK_URL, TRACK_TIMEOUT, token, environment)
    }

    pub(crate) fn with_endpoint(
        endpoint: &str,
        timeout: Duration,
        token: String,
        environment: &str,
    ) -> Result<Self, AnalyticsError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.to_string(),
            token,
            environment: environment.to_string(),
        })
    }

    /// Request body. Event properties may shadow `token`, but `timestamp`
    /// and `environment` always win.
    fn payload(&self, event: &AnalyticsEvent) -> Value {
        let mut properties = serde_json::Map::new();
        properties.insert("token".to_string(), Value::String(self.token.clone()));
        properties.extend(event.properties.clone());
        properties.insert(
            "timestamp".to_string(),
            Value::String(event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        properties.insert(
            "environment".to_string(),
            Value::String(self.environment.clone()),
        );

        json!({
            "event": event.name,
            "properties": properties,
        })
    }

    async fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        let response = self
            .client
            .post(self.endpoint.as_str())
            .header("content-type", "application/json")
            .json(&self.payload(event))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnalyticsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Analytics event '{}' delivered", event.name);
        Ok(())
    }
}

#[async_trait]
impl AnalyticsSink for MixpanelSink {
    async fn track(&self, event: AnalyticsEvent) {
        if let Err(e) = self.send(&event).await {
            warn!("Failed to track analytics event '{}': {e}", event.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::time::Instant;
    use tokio::net::TcpListener;

    fn sink(environment: &str) -> MixpanelSink {
        MixpanelSink::new("tok_abc".to_string(), environment).unwrap()
    }

    fn event() -> AnalyticsEvent {
        let mut properties = serde_json::Map::new();
        properties.insert("job_id".to_string(), json!("job-1"));
        properties.insert("environment".to_string(), json!("spoofed"));
        AnalyticsEvent {
            name: "Job Posted".to_string(),
            properties,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_payload_merges_token_properties_and_metadata() {
        let sink = sink("production");
        let body = sink.payload(&event());

        assert_eq!(body["event"], "Job Posted");
        assert_eq!(body["properties"]["token"], "tok_abc");
        assert_eq!(body["properties"]["job_id"], "job-1");
        assert_eq!(body["properties"]["timestamp"], "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn test_environment_cannot_be_overridden_by_event() {
        let sink = sink("staging");
        let body = sink.payload(&event());
        assert_eq!(body["properties"]["environment"], "staging");
    }

    #[test]
    fn test_api_error_display() {
        let err = AnalyticsError::Api {
            status: 401,
            message: "bad token".to_string(),
        };
        assert_eq!(err.to_string(), "Collector error (status 401): bad token");
    }

    #[tokio::test]
    async fn test_stalled_collector_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept connections and hold them open without ever answering.
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let sink = MixpanelSink::with_endpoint(
            &format!("http://{addr}/track"),
            Duration::from_millis(200),
            "tok_abc".to_string(),
            "production",
        )
        .unwrap();

        let started = Instant::now();
        let result = sink.send(&event()).await;
        assert!(matches!(result, Err(AnalyticsError::Http(_))));
        assert!(started.elapsed() < Duration::from_secs(5));

        // The trait entry point swallows the failure.
        sink.track(event()).await;
    }
}
