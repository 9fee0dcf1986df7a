use serde::{Deserialize, Serialize};

/// A discrimination concern shared by a group of language patterns.
///
/// `Race` and `Disability` carry no patterns yet; they exist so callers
/// and stored results share one category vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasCategory {
    Gender,
    Age,
    Race,
    Disability,
    Socioeconomic,
    Education,
}

impl BiasCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasCategory::Gender => "gender",
            BiasCategory::Age => "age",
            BiasCategory::Race => "race",
            BiasCategory::Disability => "disability",
            BiasCategory::Socioeconomic => "socioeconomic",
            BiasCategory::Education => "education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// One flagged match in a job description. Created per match, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasIssue {
    pub category: BiasCategory,
    /// The text exactly as it appeared in the description.
    pub matched_text: String,
    pub suggested_replacement: String,
    pub severity: Severity,
}

/// Outcome of a single description scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasCheckResult {
    /// 0 – 100, saturating sum of per-issue weights.
    pub score: u32,
    pub issues: Vec<BiasIssue>,
    pub suggestions: Vec<String>,
    /// `score < COMPLIANCE_THRESHOLD`
    pub compliant: bool,
}

impl BiasCheckResult {
    /// Distinct flagged categories, in the order they were first seen.
    pub fn categories(&self) -> Vec<BiasCategory> {
        let mut seen = Vec::new();
        for issue in &self.issues {
            if !seen.contains(&issue.category) {
                seen.push(issue.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(category: BiasCategory) -> BiasIssue {
        BiasIssue {
            category,
            matched_text: "x".to_string(),
            suggested_replacement: "y".to_string(),
            severity: Severity::Medium,
        }
    }

    #[test]
    fn test_categories_are_distinct_in_first_seen_order() {
        let result = BiasCheckResult {
            score: 70,
            issues: vec![
                issue(BiasCategory::Age),
                issue(BiasCategory::Gender),
                issue(BiasCategory::Age),
            ],
            suggestions: vec![],
            compliant: false,
        };
        assert_eq!(
            result.categories(),
            vec![BiasCategory::Age, BiasCategory::Gender]
        );
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&BiasCategory::Socioeconomic).unwrap();
        assert_eq!(json, r#""socioeconomic""#);
        let sev: Severity = serde_json::from_str(r#""critical""#).unwrap();
        assert_eq!(sev, Severity::Critical);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for category in [
            BiasCategory::Gender,
            BiasCategory::Age,
            BiasCategory::Race,
            BiasCategory::Disability,
            BiasCategory::Socioeconomic,
            BiasCategory::Education,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
