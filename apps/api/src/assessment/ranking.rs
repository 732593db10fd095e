//! Career ranking — turns blended category scores into career suggestions.
//!
//! Algorithm:
//! 1. Take the top-N categories by blended score, dropping any ≤ 0.
//! 2. Every career mapped to a selected category accumulates that category's score
//!    (a career mapped to both selected categories gets both).
//! 3. Sort careers by accumulated score, descending. The sort is stable, so equal
//!    scores keep discovery order (the order mapping rows were loaded in).
//! 4. Keep the top `limit`, attach resources ordered by (type, name).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::assessment::category::{ranked, Category, CategoryMap};
use crate::catalog::snapshot::{CatalogSnapshot, Career, ResourceRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOptions {
    pub top_categories: usize,
    pub limit: usize,
    pub include_resources: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            top_categories: 2,
            limit: 5,
            include_resources: true,
        }
    }
}

/// A ranked career with its learning resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub career_id: String,
    pub name: String,
    pub description: String,
    /// Sum of the selected category scores, rounded to 3 decimals.
    pub score: f64,
    pub resources: Vec<ResourceRef>,
}

/// Highest-scoring categories, at most `n`, all strictly positive.
pub fn select_top_categories(scores: &CategoryMap<f64>, n: usize) -> Vec<(Category, f64)> {
    ranked(scores)
        .into_iter()
        .take(n)
        .filter(|(_, score)| *score > 0.0)
        .collect()
}

pub fn rank_careers(
    scores: &CategoryMap<f64>,
    catalog: &CatalogSnapshot,
    options: &RankOptions,
) -> Vec<CareerSuggestion> {
    let selected = select_top_categories(scores, options.top_categories);
    if selected.is_empty() {
        return Vec::new();
    }
    let wanted: HashSet<Category> = selected.iter().map(|(c, _)| *c).collect();

    let mut accumulated: Vec<(&Career, f64)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for (career, category) in catalog.mappings_in(&wanted) {
        let score = scores.get(&category).copied().unwrap_or(0.0);
        match slots.get(career.career_id.as_str()) {
            Some(&slot) => accumulated[slot].1 += score,
            None => {
                slots.insert(career.career_id.as_str(), accumulated.len());
                accumulated.push((career, score));
            }
        }
    }

    accumulated.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    accumulated.truncate(options.limit);

    accumulated
        .into_iter()
        .map(|(career, score)| CareerSuggestion {
            career_id: career.career_id.clone(),
            name: career.name.clone(),
            description: career.description.clone(),
            score: round3(score),
            resources: if options.include_resources {
                catalog.resources_for(&career.career_id).to_vec()
            } else {
                Vec::new()
            },
        })
        .collect()
}

/// Rounds on the exact binary value: `{:.3}` formatting is correctly rounded,
/// unlike `(x * 1000).round()` whose multiply can itself round.
fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}
