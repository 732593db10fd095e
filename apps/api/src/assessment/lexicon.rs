//! Keyword lexicon — static category → seed keyword mapping, and the
//! morphological pattern each keyword compiles to.
//!
//! Single words tolerate a fixed set of English endings after their stem
//! ("create" matches "creative", "creating", "creativity"). Phrases match
//! exactly. Patterns compile once per process.

use std::sync::LazyLock;

use regex::Regex;

use crate::assessment::category::Category;

/// Endings accepted after a single-word stem. The empty ending is implied by `?`.
const SUFFIX_GROUP: &str = "(?:e|es|ed|er|ers|ing|ive|ivity|al|ally|is|tics|tical)?";

const SEED_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::LogicalReasoning,
        &["logic", "puzzle", "reason", "pattern", "analytical", "algorithm", "deduction"],
    ),
    (
        Category::Creativity,
        &[
            "creative", "design", "idea", "invent", "innovate", "imagine", "prototype", "art", "ui",
            "ux", "story", "concept",
        ],
    ),
    (
        Category::TechnicalKnowledge,
        &[
            "code",
            "coding",
            "program",
            "python",
            "java",
            "javascript",
            "sql",
            "algorithms",
            "systems",
            "backend",
            "frontend",
            "api",
            "database",
            "Machine Learning",
            "Artificial Intelligence",
        ],
    ),
    (
        Category::CommunicationSkills,
        &[
            "communicate",
            "communication",
            "present",
            "presentation",
            "explain",
            "write",
            "writing",
            "document",
            "documentation",
            "collaborate",
            "team",
            "stakeholder",
            "negotiate",
            "speak",
            "meeting",
            "feedback",
        ],
    ),
    (
        Category::TimeManagement,
        &[
            "deadline", "schedule", "prioritize", "priority", "plan", "planning", "organize", "time",
            "multitask", "productivity",
        ],
    ),
    (
        Category::ProblemSolving,
        &[
            "solve", "solution", "troubleshoot", "debug", "issue", "fix", "root cause", "analysis",
            "approach", "strategy", "optimize",
        ],
    ),
];

/// A seed keyword with its compiled match pattern.
#[derive(Debug)]
pub struct Keyword {
    pub text: String,
    pub is_phrase: bool,
    pattern: Regex,
}

impl Keyword {
    pub fn compile(raw: &str) -> Result<Self, regex::Error> {
        let text = raw.trim().to_lowercase();
        let is_phrase = text.contains(char::is_whitespace);
        let pattern = Regex::new(&keyword_pattern(&text))?;
        Ok(Self {
            text,
            is_phrase,
            pattern,
        })
    }

    /// Phrase hits count double.
    pub fn weight(&self) -> u32 {
        if self.is_phrase {
            2
        } else {
            1
        }
    }

    /// Non-overlapping matches in already-sanitised text.
    pub fn count_matches(&self, sanitized: &str) -> u32 {
        self.pattern.find_iter(sanitized).count() as u32
    }
}

/// Builds the match pattern source for a keyword.
pub fn keyword_pattern(keyword: &str) -> String {
    let keyword = keyword.trim().to_lowercase();
    if keyword.contains(char::is_whitespace) {
        return format!(r"\b{}\b", regex::escape(&keyword));
    }

    // "create" → "creat" so "creating"/"creative" share the stem
    let stem = keyword.strip_suffix('e').unwrap_or(keyword.as_str());
    format!(r"\b{}{}\b", regex::escape(stem), SUFFIX_GROUP)
}

static LEXICON: LazyLock<Vec<(Category, Vec<Keyword>)>> = LazyLock::new(|| {
    SEED_KEYWORDS
        .iter()
        .map(|(category, seeds)| {
            let keywords = seeds
                .iter()
                .filter(|seed| !seed.trim().is_empty())
                .map(|seed| Keyword::compile(seed).expect("escaped keyword pattern is valid"))
                .collect();
            (*category, keywords)
        })
        .collect()
});

/// The compiled lexicon, one entry per category in canonical order.
pub fn lexicon() -> &'static [(Category, Vec<Keyword>)] {
    &LEXICON
}
