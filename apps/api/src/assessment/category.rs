use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The six trait dimensions shared by questions, keywords and careers.
/// Declaration order is the canonical order used to break score ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Logical Reasoning")]
    LogicalReasoning,
    #[serde(rename = "Creativity")]
    Creativity,
    #[serde(rename = "Technical Knowledge")]
    TechnicalKnowledge,
    #[serde(rename = "Communication Skills")]
    CommunicationSkills,
    #[serde(rename = "Time Management")]
    TimeManagement,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::LogicalReasoning,
        Category::Creativity,
        Category::TechnicalKnowledge,
        Category::CommunicationSkills,
        Category::TimeManagement,
        Category::ProblemSolving,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LogicalReasoning => "Logical Reasoning",
            Category::Creativity => "Creativity",
            Category::TechnicalKnowledge => "Technical Knowledge",
            Category::CommunicationSkills => "Communication Skills",
            Category::TimeManagement => "Time Management",
            Category::ProblemSolving => "Problem Solving",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive; surrounding whitespace from CSV imports is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Per-category values, iterated in canonical category order.
pub type CategoryMap<T> = BTreeMap<Category, T>;

/// A map covering every category, each set to `value`.
pub fn full_map<T: Copy>(value: T) -> CategoryMap<T> {
    Category::ALL.into_iter().map(|c| (c, value)).collect()
}

/// Sorts `(category, value)` pairs by value descending.
/// The sort is stable, so equal values keep canonical category order.
pub fn ranked<T: PartialOrd + Copy>(scores: &CategoryMap<T>) -> Vec<(Category, T)> {
    let mut pairs: Vec<(Category, T)> = scores.iter().map(|(c, v)| (*c, *v)).collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            " technical knowledge ".parse::<Category>(),
            Ok(Category::TechnicalKnowledge)
        );
        assert_eq!("Creativity".parse::<Category>(), Ok(Category::Creativity));
    }

    #[test]
    fn test_parse_unknown_category_fails() {
        assert_eq!(
            "Leadership".parse::<Category>(),
            Err(UnknownCategory("Leadership".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::TimeManagement).unwrap();
        assert_eq!(json, r#""Time Management""#);
    }

    #[test]
    fn test_ranked_sorts_descending_with_stable_ties() {
        let mut scores = full_map(0.0);
        scores.insert(Category::ProblemSolving, 0.5);
        scores.insert(Category::Creativity, 0.5);
        scores.insert(Category::TimeManagement, 0.9);

        let order: Vec<Category> = ranked(&scores).into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Category::TimeManagement,
                Category::Creativity,
                Category::ProblemSolving,
                Category::LogicalReasoning,
                Category::TechnicalKnowledge,
                Category::CommunicationSkills,
            ]
        );
    }
}
