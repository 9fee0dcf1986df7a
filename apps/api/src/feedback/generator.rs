//! Feedback Generator: assembles rejection feedback from strengths, gaps and fixed templates.
//!
//! Flow: identify_strengths → identify_gaps → suggestions (keyed off gap text)
//!       → message / encouragement / next steps.

use tracing::debug;

use crate::feedback::analysis::{identify_gaps, identify_strengths};
use crate::feedback::models::{CandidateProfile, FeedbackResult, JobRequirements};
use crate::feedback::templates::{
    ENCOURAGEMENT, EXPERIENCE_GAP_MARKER, EXPERIENCE_GAP_SUGGESTIONS, GAP_NEXT_STEPS,
    JOB_ALERT_TEMPLATE, PROFILE_REMINDER, REJECTION_MESSAGE_TEMPLATE, RELATIONSHIP_NEXT_STEPS,
    SKILL_GAP_MARKER, SKILL_GAP_SUGGESTIONS,
};

/// Stateless; one instance can serve any number of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct FeedbackGenerator;

impl FeedbackGenerator {
    pub fn new() -> Self {
        Self
    }

    /// `rejection_reason` is accepted for interface stability but does not
    /// influence the output yet.
    pub async fn generate_feedback(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
        _rejection_reason: &str,
    ) -> FeedbackResult {
        self.build(candidate, job)
    }

    fn build(&self, candidate: &CandidateProfile, job: &JobRequirements) -> FeedbackResult {
        let strengths = identify_strengths(candidate, job);
        let improvements = identify_gaps(candidate, job);
        let suggestions = build_suggestions(&improvements, job);
        let next_steps = build_next_steps(&improvements);

        debug!(
            "Feedback for '{}': {} strengths, {} gaps",
            job.title,
            strengths.len(),
            improvements.len()
        );

        FeedbackResult {
            message: personalized_message(candidate, job),
            strengths,
            improvements,
            suggestions,
            encouragement: ENCOURAGEMENT.to_string(),
            next_steps,
        }
    }
}

/// `{title}` is filled before `{name}` so placeholder text inside caller
/// input is never expanded.
fn personalized_message(candidate: &CandidateProfile, job: &JobRequirements) -> String {
    REJECTION_MESSAGE_TEMPLATE
        .replace("{title}", &job.title)
        .replace("{name}", &candidate.name)
}

/// Suggestions are chosen by scanning the gap lines for their markers,
/// not by re-deriving the gap conditions.
fn build_suggestions(gaps: &[String], job: &JobRequirements) -> Vec<String> {
    let mut suggestions = Vec::new();

    if gaps.iter().any(|gap| gap.contains(SKILL_GAP_MARKER)) {
        suggestions.extend(SKILL_GAP_SUGGESTIONS.iter().map(|s| s.to_string()));
    }

    if gaps.iter().any(|gap| gap.contains(EXPERIENCE_GAP_MARKER)) {
        suggestions.extend(EXPERIENCE_GAP_SUGGESTIONS.iter().map(|s| s.to_string()));
    }

    suggestions.push(PROFILE_REMINDER.to_string());
    suggestions.push(JOB_ALERT_TEMPLATE.replace("{industry}", &job.industry));

    suggestions
}

fn build_next_steps(gaps: &[String]) -> Vec<String> {
    let mut steps = Vec::new();
    if !gaps.is_empty() {
        steps.extend(GAP_NEXT_STEPS.iter().map(|s| s.to_string()));
    }
    steps.extend(RELATIONSHIP_NEXT_STEPS.iter().map(|s| s.to_string()));
    steps
}
