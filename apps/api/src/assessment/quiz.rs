use serde_json::{Map, Value};

use crate::assessment::category::{full_map, CategoryMap};
use crate::catalog::snapshot::CatalogSnapshot;
use crate::config::ScoringConfig;

/// Coerces a client-supplied score to an integer.
/// Integers pass through, floats truncate, numeric strings parse, booleans are 1/0,
/// anything else is 0.
pub fn coerce_score(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// Sums selected option scores per category.
///
/// Unknown question ids are skipped. Each score is clamped to
/// `[0, max_score_per_question]`, so totals never go negative or past the
/// category ceiling. Only categories with a contributing answer appear.
pub fn aggregate_answers(
    answers: &Map<String, Value>,
    catalog: &CatalogSnapshot,
    config: &ScoringConfig,
) -> CategoryMap<u32> {
    let max = i64::from(config.max_score_per_question);
    let mut totals = CategoryMap::new();

    for (question_id, selected) in answers {
        let Some(category) = catalog.question_category(question_id) else {
            continue;
        };
        let score = coerce_score(selected).clamp(0, max) as u32;
        *totals.entry(category).or_insert(0) += score;
    }

    totals
}

/// Divides raw totals by the fixed per-category maximum.
/// Covers all categories; unanswered ones are 0.
pub fn normalize(raw: &CategoryMap<u32>, config: &ScoringConfig) -> CategoryMap<f64> {
    let max = f64::from(config.quiz_max_per_category().max(1));
    let mut normalized = full_map(0.0);
    for (category, total) in raw {
        normalized.insert(*category, (f64::from(*total) / max).min(1.0));
    }
    normalized
}
