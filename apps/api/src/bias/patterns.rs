//! Bias pattern tables: one declarative record per category.
//!
//! Each `CategoryRules` row carries everything the detector needs about a
//! category: regex sources, fixed severity, fixed weight, how to propose a
//! replacement, and an optional category tip for the suggestion list.
//! Rows are compiled once per process into `CompiledCategory` and exposed
//! through the `PatternCategory` trait, so adding a category means adding
//! a row, not touching the detector.

use std::sync::LazyLock;

use regex::Regex;

use crate::bias::models::{BiasCategory, Severity};

/// How an issue's `suggested_replacement` is derived from the matched text.
#[derive(Debug)]
pub enum Replacement {
    /// Lower-cased exact lookup; unmatched words get `fallback`.
    Synonyms {
        table: &'static [(&'static str, &'static str)],
        fallback: &'static str,
    },
    /// One remediation sentence for every match in the category.
    Remediation(&'static str),
}

impl Replacement {
    pub fn for_match(&self, matched: &str) -> String {
        match self {
            Replacement::Synonyms { table, fallback } => {
                let key = matched.to_lowercase();
                table
                    .iter()
                    .find(|(word, _)| *word == key)
                    .map(|(_, alt)| *alt)
                    .unwrap_or(*fallback)
                    .to_string()
            }
            Replacement::Remediation(text) => text.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct CategoryRules {
    pub category: BiasCategory,
    pub severity: Severity,
    pub weight: u32,
    /// Alternations wrapped as `(?i)\b(?:…)\b` at compile time.
    pub sources: &'static [&'static str],
    pub replacement: Replacement,
    /// Extra tip appended to the suggestions when the category is flagged.
    pub guidance: Option<&'static str>,
}

/// Capability view of a bias category, as consumed by the detector.
pub trait PatternCategory: Send + Sync {
    fn category(&self) -> BiasCategory;
    fn severity(&self) -> Severity;
    fn weight(&self) -> u32;
    fn patterns(&self) -> &[Regex];
    fn suggest_replacement(&self, matched: &str) -> String;
    fn guidance(&self) -> Option<&'static str>;
}

// ────────────────────────────────────────────────────────────────────────────
// Category tables
// ────────────────────────────────────────────────────────────────────────────

const GENDER_SYNONYMS: &[(&str, &str)] = &[
    ("guys", "team members"),
    ("ninja", "expert"),
    ("rockstar", "talented professional"),
    ("guru", "specialist"),
    ("aggressive", "results-driven"),
    ("competitive", "goal-oriented"),
];

const AGE_SYNONYMS: &[(&str, &str)] = &[
    ("young", "motivated"),
    ("energetic", "enthusiastic"),
    ("fresh", "innovative"),
    ("digital native", "tech-savvy"),
    ("recent graduate", "entry-level professional"),
];

pub const GENDER_RULES: CategoryRules = CategoryRules {
    category: BiasCategory::Gender,
    severity: Severity::Medium,
    weight: 15,
    sources: &[
        r"guys?|dudes?|bros?|ninjas?|rockstars?|gurus?",
        r"aggressive|competitive|dominant",
        r"nurturing|supportive|collaborative",
    ],
    replacement: Replacement::Synonyms {
        table: GENDER_SYNONYMS,
        fallback: "professional",
    },
    guidance: Some("Review language for gender-coded words that may deter candidates"),
};

pub const AGE_RULES: CategoryRules = CategoryRules {
    category: BiasCategory::Age,
    severity: Severity::High,
    weight: 25,
    sources: &[
        r"young|youthful|energetic|fresh|recent graduate",
        r"digital native|millennial|gen z",
        r"experienced|mature|seasoned|senior",
    ],
    replacement: Replacement::Synonyms {
        table: AGE_SYNONYMS,
        fallback: "qualified professional",
    },
    guidance: Some("Avoid age-related terms that could be seen as discriminatory"),
};

pub const EDUCATION_RULES: CategoryRules = CategoryRules {
    category: BiasCategory::Education,
    severity: Severity::Medium,
    weight: 20,
    sources: &[
        r"ivy league|prestigious university|top tier",
        r"must have degree|degree required|bachelor's required",
    ],
    replacement: Replacement::Remediation(
        "Consider \"relevant experience or equivalent education\"",
    ),
    guidance: None,
};

pub const SOCIOECONOMIC_RULES: CategoryRules = CategoryRules {
    category: BiasCategory::Socioeconomic,
    severity: Severity::High,
    weight: 30,
    sources: &[
        r"unpaid|volunteer|passion project|side hustle",
        r"own transportation|reliable car|must have vehicle",
    ],
    replacement: Replacement::Remediation("Remove barriers that may exclude qualified candidates"),
    guidance: None,
};

/// Scan order. Issues come out grouped in this order.
pub static RULES: [CategoryRules; 4] = [GENDER_RULES, AGE_RULES, EDUCATION_RULES, SOCIOECONOMIC_RULES];

/// Always-present writing tips, ahead of any category guidance.
pub const GENERAL_SUGGESTIONS: &[&str] = &[
    "Use inclusive language that welcomes all qualified candidates",
    "Focus on skills and competencies rather than personal characteristics",
    "Consider if educational requirements are truly necessary for the role",
];

// ────────────────────────────────────────────────────────────────────────────
// Compiled form
// ────────────────────────────────────────────────────────────────────────────

/// A `CategoryRules` row with its regex sources compiled.
#[derive(Debug)]
pub struct CompiledCategory {
    rules: &'static CategoryRules,
    patterns: Vec<Regex>,
}

impl CompiledCategory {
    pub fn compile(rules: &'static CategoryRules) -> Result<Self, regex::Error> {
        let patterns = rules
            .sources
            .iter()
            .map(|source| Regex::new(&format!(r"(?i)\b(?:{source})\b")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules, patterns })
    }
}

impl PatternCategory for CompiledCategory {
    fn category(&self) -> BiasCategory {
        self.rules.category
    }

    fn severity(&self) -> Severity {
        self.rules.severity
    }

    fn weight(&self) -> u32 {
        self.rules.weight
    }

    fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    fn suggest_replacement(&self, matched: &str) -> String {
        self.rules.replacement.for_match(matched)
    }

    fn guidance(&self) -> Option<&'static str> {
        self.rules.guidance
    }
}

/// Built-in categories, compiled on first use and shared for the process lifetime.
pub static DEFAULT_CATEGORIES: LazyLock<Vec<CompiledCategory>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rules| CompiledCategory::compile(rules).expect("built-in bias pattern must compile"))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_compile() {
        assert_eq!(DEFAULT_CATEGORIES.len(), 4);
        for compiled in DEFAULT_CATEGORIES.iter() {
            assert!(!compiled.patterns().is_empty());
        }
    }

    #[test]
    fn test_weights_and_severities_fixed_per_category() {
        let table: Vec<_> = DEFAULT_CATEGORIES
            .iter()
            .map(|c| (c.category(), c.weight(), c.severity()))
            .collect();
        assert_eq!(
            table,
            vec![
                (BiasCategory::Gender, 15, Severity::Medium),
                (BiasCategory::Age, 25, Severity::High),
                (BiasCategory::Education, 20, Severity::Medium),
                (BiasCategory::Socioeconomic, 30, Severity::High),
            ]
        );
    }

    #[test]
    fn test_patterns_are_case_insensitive_and_word_bounded() {
        let gender = &DEFAULT_CATEGORIES[0];
        let hits: Vec<&str> = gender.patterns()[0]
            .find_iter("Calling all GUYS and Gurus, not guyson")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(hits, vec!["GUYS", "Gurus"]);
    }

    #[test]
    fn test_synonym_lookup_is_lowercased() {
        assert_eq!(GENDER_RULES.replacement.for_match("RockStar"), "talented professional");
        assert_eq!(AGE_RULES.replacement.for_match("Digital Native"), "tech-savvy");
    }

    #[test]
    fn test_synonym_lookup_falls_back_for_unlisted_forms() {
        // Plural forms are matched by the regex but absent from the table.
        assert_eq!(GENDER_RULES.replacement.for_match("ninjas"), "professional");
        assert_eq!(GENDER_RULES.replacement.for_match("dude"), "professional");
        assert_eq!(AGE_RULES.replacement.for_match("seasoned"), "qualified professional");
    }

    #[test]
    fn test_remediation_ignores_matched_text() {
        assert_eq!(
            SOCIOECONOMIC_RULES.replacement.for_match("unpaid"),
            "Remove barriers that may exclude qualified candidates"
        );
        assert_eq!(
            EDUCATION_RULES.replacement.for_match("Ivy League"),
            "Consider \"relevant experience or equivalent education\""
        );
    }

    #[test]
    fn test_only_gender_and_age_carry_guidance() {
        let with_guidance: Vec<_> = RULES
            .iter()
            .filter(|r| r.guidance.is_some())
            .map(|r| r.category)
            .collect();
        assert_eq!(with_guidance, vec![BiasCategory::Gender, BiasCategory::Age]);
    }
}
