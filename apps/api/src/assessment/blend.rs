use serde::{Deserialize, Serialize};

use crate::assessment::category::CategoryMap;

/// Weights of the two signals. Always sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub quiz: f64,
    pub nlp: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self::with_text_weight(0.3)
    }
}

impl BlendWeights {
    pub fn with_text_weight(text_weight: f64) -> Self {
        let nlp = text_weight.clamp(0.0, 1.0);
        Self {
            quiz: 1.0 - nlp,
            nlp,
        }
    }

    pub fn quiz_only() -> Self {
        Self { quiz: 1.0, nlp: 0.0 }
    }

    /// Drops the text weight entirely when the text produced nothing.
    pub fn select(text_has_signal: bool, text_weight: f64) -> Self {
        if text_has_signal {
            Self::with_text_weight(text_weight)
        } else {
            Self::quiz_only()
        }
    }
}

/// `quiz_weight * quiz + nlp_weight * text` over the union of categories;
/// a category missing from one side counts as 0 there.
pub fn blend(
    quiz: &CategoryMap<f64>,
    text: &CategoryMap<f64>,
    weights: BlendWeights,
) -> CategoryMap<f64> {
    quiz.keys()
        .chain(text.keys())
        .map(|c| {
            let q = quiz.get(c).copied().unwrap_or(0.0);
            let t = text.get(c).copied().unwrap_or(0.0);
            (*c, weights.quiz * q + weights.nlp * t)
        })
        .collect()
}
