use std::sync::Arc;

use crate::analytics::Analytics;
use crate::bias::detector::{BiasChecker, RuleBasedBiasDetector};
use crate::config::Config;
use crate::feedback::generator::FeedbackGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable bias checker. Default: RuleBasedBiasDetector.
    pub bias_checker: Arc<dyn BiasChecker>,
    pub feedback: FeedbackGenerator,
    pub analytics: Analytics,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let analytics = Analytics::from_config(&config);
        Self {
            config,
            bias_checker: Arc::new(RuleBasedBiasDetector::new()),
            feedback: FeedbackGenerator::new(),
            analytics,
        }
    }
}
