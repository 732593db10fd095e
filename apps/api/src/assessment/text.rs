use tracing::trace;

use crate::assessment::category::{full_map, Category, CategoryMap};
use crate::assessment::lexicon::lexicon;

/// Per-category keyword evidence found in free text.
#[derive(Debug, Clone)]
pub struct TextScores {
    /// Weighted match counts (phrase hits count double).
    pub raw: CategoryMap<u32>,
    /// `raw / max(raw)`, all zero when nothing matched.
    pub normalized: CategoryMap<f64>,
}

impl TextScores {
    pub fn empty() -> Self {
        Self {
            raw: full_map(0),
            normalized: full_map(0.0),
        }
    }

    pub fn has_signal(&self) -> bool {
        self.normalized.values().any(|v| *v > 0.0)
    }
}

/// Lower-cases and replaces everything but ASCII letters, digits and whitespace with a space.
pub fn sanitize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Scores free text against the keyword lexicon.
pub fn score_text(text: &str) -> TextScores {
    if text.trim().is_empty() {
        return TextScores::empty();
    }

    let sanitized = sanitize(text);
    let raw: CategoryMap<u32> = lexicon()
        .iter()
        .map(|(category, keywords)| {
            let hits = keywords
                .iter()
                .map(|kw| {
                    let count = kw.count_matches(&sanitized);
                    if count > 0 {
                        trace!(keyword = %kw.text, count, %category, "keyword matched");
                    }
                    count * kw.weight()
                })
                .sum::<u32>();
            (*category, hits)
        })
        .collect();

    let max = raw.values().copied().max().filter(|m| *m > 0).unwrap_or(1);
    let normalized = Category::ALL
        .into_iter()
        .map(|c| {
            let hits = raw.get(&c).copied().unwrap_or(0);
            (c, f64::from(hits) / f64::from(max))
        })
        .collect();

    TextScores { raw, normalized }
}
