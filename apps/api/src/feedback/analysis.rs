//! Strength and gap identification: compares a candidate against a job's requirements.
//!
//! Skill matching is deliberately loose: two skills match when either
//! lower-cased string contains the other. "Python" matches "Python 3",
//! but short names over-match too ("R" matches "Ruby").
//!
//! The strength and gap experience rules use different thresholds
//! (≥ 80% of required vs. < 100% of required), so a candidate between the
//! two shows up in BOTH lists. That co-occurrence is expected output.

use crate::feedback::models::{CandidateProfile, JobRequirements};
use crate::feedback::templates::{
    EDUCATION_STRENGTH, EXPERIENCE_GAP_TEMPLATE, EXPERIENCE_STRENGTH_TEMPLATE, FALLBACK_STRENGTH,
    SKILL_GAP_TEMPLATE, SKILL_STRENGTH_TEMPLATE,
};

/// Symmetric, case-insensitive substring containment.
pub fn skills_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// `actual >= 0.8 * required`, evaluated exactly in integers.
pub fn meets_experience_threshold(actual: u32, required: u32) -> bool {
    5 * u64::from(actual) >= 4 * u64::from(required)
}

/// Candidate skills matching at least one required skill, in candidate order.
pub fn matching_skills<'a>(candidate: &'a CandidateProfile, job: &JobRequirements) -> Vec<&'a str> {
    candidate
        .skills
        .iter()
        .filter(|skill| job.required_skills.iter().any(|req| skills_match(skill, req)))
        .map(String::as_str)
        .collect()
}

/// Required skills no candidate skill matches, in job order.
pub fn missing_skills<'a>(candidate: &CandidateProfile, job: &'a JobRequirements) -> Vec<&'a str> {
    job.required_skills
        .iter()
        .filter(|req| !candidate.skills.iter().any(|skill| skills_match(skill, req)))
        .map(String::as_str)
        .collect()
}

/// Never empty: falls back to a generic strength when no rule fires.
pub fn identify_strengths(candidate: &CandidateProfile, job: &JobRequirements) -> Vec<String> {
    let mut strengths = Vec::new();

    let matched = matching_skills(candidate, job);
    if !matched.is_empty() {
        strengths.push(SKILL_STRENGTH_TEMPLATE.replace("{skills}", &matched.join(", ")));
    }

    if meets_experience_threshold(candidate.experience_years, job.experience_required_years) {
        strengths.push(
            EXPERIENCE_STRENGTH_TEMPLATE
                .replace("{years}", &candidate.experience_years.to_string()),
        );
    }

    let education_aligned = job
        .education_required
        .as_deref()
        .filter(|required| !required.is_empty())
        .map(|required| {
            candidate
                .education
                .to_lowercase()
                .contains(&required.to_lowercase())
        })
        .unwrap_or(false);
    if education_aligned {
        strengths.push(EDUCATION_STRENGTH.to_string());
    }

    if strengths.is_empty() {
        strengths.push(FALLBACK_STRENGTH.to_string());
    }

    strengths
}

/// Only missing skills and an experience shortfall count as gaps;
/// education is never flagged.
pub fn identify_gaps(candidate: &CandidateProfile, job: &JobRequirements) -> Vec<String> {
    let mut gaps = Vec::new();

    let missing = missing_skills(candidate, job);
    if !missing.is_empty() {
        gaps.push(SKILL_GAP_TEMPLATE.replace("{skills}", &missing.join(", ")));
    }

    if candidate.experience_years < job.experience_required_years {
        let shortfall = job.experience_required_years - candidate.experience_years;
        gaps.push(EXPERIENCE_GAP_TEMPLATE.replace("{years}", &shortfall.to_string()));
    }

    gaps
}
