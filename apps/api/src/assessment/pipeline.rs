use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::assessment::blend::{blend, BlendWeights};
use crate::assessment::category::{ranked, Category};
use crate::assessment::quiz::{aggregate_answers, normalize};
use crate::assessment::ranking::{rank_careers, CareerSuggestion, RankOptions};
use crate::assessment::text::{score_text, TextScores};
use crate::catalog::snapshot::CatalogSnapshot;
use crate::config::ScoringConfig;

/// Full scoring result. Score lists are `(category, value)` pairs, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub quiz_scores: Vec<(Category, u32)>,
    pub quiz_norm: Vec<(Category, f64)>,
    pub nlp_scores: Vec<(Category, f64)>,
    pub final_scores: Vec<(Category, f64)>,
    pub careers: Vec<String>,
    pub career_details: Vec<CareerSuggestion>,
    pub nlp_used: bool,
    pub weights: BlendWeights,
}

/// Quiz aggregation → text scoring → blend → career ranking.
/// Pure over its inputs; identical inputs give identical reports.
pub fn score_and_rank(
    answers: &Map<String, Value>,
    free_text: Option<&str>,
    catalog: &CatalogSnapshot,
    config: &ScoringConfig,
) -> AssessmentReport {
    let quiz_raw = aggregate_answers(answers, catalog, config);
    let quiz_norm = normalize(&quiz_raw, config);

    let text = free_text.map(str::trim).unwrap_or_default();
    let text_scores = if text.is_empty() {
        TextScores::empty()
    } else {
        score_text(text)
    };
    let nlp_used = !text.is_empty() && text_scores.has_signal();

    let weights = BlendWeights::select(nlp_used, config.text_weight);
    let final_scores = blend(&quiz_norm, &text_scores.normalized, weights);

    let options = RankOptions {
        top_categories: config.top_categories,
        limit: config.career_limit,
        include_resources: true,
    };
    let career_details = rank_careers(&final_scores, catalog, &options);

    debug!(
        answered = answers.len(),
        text_hits = text_scores.raw.values().sum::<u32>(),
        nlp_used,
        careers = career_details.len(),
        "Assessment scored"
    );

    AssessmentReport {
        quiz_scores: ranked(&quiz_raw),
        quiz_norm: ranked(&quiz_norm),
        nlp_scores: ranked(&text_scores.normalized),
        final_scores: ranked(&final_scores),
        careers: career_details.iter().map(|c| c.name.clone()).collect(),
        career_details,
        nlp_used,
        weights,
    }
}
