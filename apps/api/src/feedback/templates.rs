// Fixed feedback prose. `{name}`, `{title}`, `{skills}`, `{years}` and
// `{industry}` are substituted by the generator.

pub const REJECTION_MESSAGE_TEMPLATE: &str = "Dear {name},

Thank you for your interest in the {title} position. We appreciate the time and effort you put into your application and the opportunity to learn about your background.

After careful consideration, we have decided to move forward with candidates whose experience more closely aligns with our current requirements. This decision was not easy, as we received many qualified applications.";

pub const ENCOURAGEMENT: &str = "We encourage you to continue developing your skills and applying for opportunities that match your growing expertise. Your background shows promise, and we believe you'll find the right fit with continued effort and development.

Please don't hesitate to apply for future positions with us that better align with your evolving skillset. We wish you the best of luck in your career journey.";

// ── Strengths ───────────────────────────────────────────────────────────────

pub const SKILL_STRENGTH_TEMPLATE: &str = "Strong background in {skills}";
pub const EXPERIENCE_STRENGTH_TEMPLATE: &str = "Relevant professional experience ({years} years)";
pub const EDUCATION_STRENGTH: &str = "Educational background aligns with requirements";
pub const FALLBACK_STRENGTH: &str = "Clear interest in the role and industry";

// ── Gaps ────────────────────────────────────────────────────────────────────
// Suggestion synthesis keys off the markers below, so each gap template
// must keep its marker verbatim.

pub const SKILL_GAP_TEMPLATE: &str = "Additional experience needed in: {skills}";
pub const SKILL_GAP_MARKER: &str = "experience needed";
pub const EXPERIENCE_GAP_TEMPLATE: &str = "Role requires {years} more years of relevant experience";
pub const EXPERIENCE_GAP_MARKER: &str = "more years";

// ── Suggestions ─────────────────────────────────────────────────────────────

pub const SKILL_GAP_SUGGESTIONS: &[&str] = &[
    "Consider taking online courses or certifications in the required technologies",
    "Build portfolio projects that demonstrate these skills",
    "Look for volunteer or freelance opportunities to gain experience",
];

pub const EXPERIENCE_GAP_SUGGESTIONS: &[&str] = &[
    "Apply for roles with lower experience requirements to build your background",
    "Highlight transferable skills from other industries or roles",
    "Consider internship or mentorship opportunities in this field",
];

pub const PROFILE_REMINDER: &str =
    "Keep your LinkedIn profile and resume updated with recent accomplishments";
pub const JOB_ALERT_TEMPLATE: &str = "Set up job alerts for similar {industry} positions";

// ── Next steps ──────────────────────────────────────────────────────────────

pub const GAP_NEXT_STEPS: &[&str] = &[
    "Focus on developing the specific skills mentioned in the improvement areas",
    "Update your resume to better highlight relevant experience",
    "Consider informational interviews with professionals in this field",
];

pub const RELATIONSHIP_NEXT_STEPS: &[&str] = &[
    "Follow our company page for future opportunities",
    "Continue building your professional network in the industry",
];
