use serde::{Deserialize, Serialize};

/// Candidate data supplied by the caller. Read-only to the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub experience_years: u32,
    /// Ordered so feedback lists come out in the candidate's own order.
    pub skills: Vec<String>,
    pub education: String,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirements {
    pub title: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub experience_required_years: u32,
    #[serde(default)]
    pub education_required: Option<String>,
    pub industry: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub message: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
    pub encouragement: String,
    pub next_steps: Vec<String>,
}
