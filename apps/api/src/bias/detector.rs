//! Bias Detector: pluggable, trait-based scanner over job description text.
//!
//! Default: `RuleBasedBiasDetector` (regex category tables, deterministic).
//! `AppState` holds an `Arc<dyn BiasChecker>`.
//!
//! Scoring:
//! 1. Every non-overlapping match of every pattern becomes one `BiasIssue`.
//! 2. Each match adds its category weight; repeats are NOT deduplicated.
//! 3. score = min(total, 100); compliant = score < 30.

use async_trait::async_trait;
use tracing::debug;

use crate::bias::models::{BiasCheckResult, BiasIssue};
use crate::bias::patterns::{PatternCategory, DEFAULT_CATEGORIES, GENERAL_SUGGESTIONS};

/// Scores at or above this are non-compliant.
pub const COMPLIANCE_THRESHOLD: u32 = 30;
pub const MAX_SCORE: u32 = 100;

/// The bias checker trait. Async only for call-site uniformity with
/// I/O-bound collaborators; implementations must not fail.
#[async_trait]
pub trait BiasChecker: Send + Sync {
    async fn check_job_description(&self, description: &str) -> BiasCheckResult;
}

pub struct RuleBasedBiasDetector {
    categories: Vec<&'static dyn PatternCategory>,
}

impl Default for RuleBasedBiasDetector {
    fn default() -> Self {
        Self::with_categories(
            DEFAULT_CATEGORIES
                .iter()
                .map(|c| c as &'static dyn PatternCategory)
                .collect(),
        )
    }
}

impl RuleBasedBiasDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan with a custom category set, in the given order.
    pub fn with_categories(categories: Vec<&'static dyn PatternCategory>) -> Self {
        Self { categories }
    }

    /// Synchronous core of `check_job_description`.
    pub fn analyze(&self, description: &str) -> BiasCheckResult {
        let mut issues = Vec::new();
        let mut total: u32 = 0;

        for category in &self.categories {
            for pattern in category.patterns() {
                for found in pattern.find_iter(description) {
                    let matched = found.as_str();
                    issues.push(BiasIssue {
                        category: category.category(),
                        matched_text: matched.to_string(),
                        suggested_replacement: category.suggest_replacement(matched),
                        severity: category.severity(),
                    });
                    total = total.saturating_add(category.weight());
                }
            }
        }

        let score = total.min(MAX_SCORE);
        let suggestions = self.build_suggestions(&issues);

        debug!(
            "Bias scan: {} issues, raw total {}, score {}",
            issues.len(),
            total,
            score
        );

        BiasCheckResult {
            score,
            issues,
            suggestions,
            compliant: score < COMPLIANCE_THRESHOLD,
        }
    }

    /// General tips, then one tip per flagged category that defines one.
    fn build_suggestions(&self, issues: &[BiasIssue]) -> Vec<String> {
        let mut suggestions: Vec<String> =
            GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()).collect();

        for category in &self.categories {
            let Some(tip) = category.guidance() else {
                continue;
            };
            if issues.iter().any(|i| i.category == category.category()) {
                suggestions.push(tip.to_string());
            }
        }

        suggestions
    }
}

#[async_trait]
impl BiasChecker for RuleBasedBiasDetector {
    async fn check_job_description(&self, description: &str) -> BiasCheckResult {
        self.analyze(description)
    }
}
