//! Category classifier
//!
//! Picks the category whose keywords appear most often (distinct keywords,
//! substring containment). The first category in lexicon order wins ties.

use crate::lexicon::{normalize, CategoryLexicon};
use campuswatch_core::{Category, CategoryPrediction};
use std::sync::Arc;

/// Confidence added per matched keyword
pub const CONFIDENCE_PER_MATCH: usize = 25;

/// Confidence never exceeds this, however many keywords match
pub const MAX_CONFIDENCE: usize = 95;

/// Weighted keyword-count category classifier
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    lexicon: Arc<CategoryLexicon>,
}

impl CategoryClassifier {
    pub fn new(lexicon: Arc<CategoryLexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify raw text. Never fails; empty text yields `general`.
    pub fn classify(&self, text: &str) -> CategoryPrediction {
        self.classify_normalized(&normalize(text))
    }

    /// Classify text already passed through [`normalize`]
    pub fn classify_normalized(&self, normalized: &str) -> CategoryPrediction {
        let mut best: Option<(Category, Vec<&str>)> = None;

        for (category, keywords) in self.lexicon.iter() {
            let matched = keywords.matches_in(normalized);
            let best_count = best.as_ref().map_or(0, |(_, m)| m.len());
            // Strictly greater: an equal count never displaces an earlier category.
            if matched.len() > best_count {
                best = Some((category, matched));
            }
        }

        match best {
            None => CategoryPrediction::general(),
            Some((category, matched)) => CategoryPrediction {
                category,
                confidence: confidence_for(matched.len()),
                matched_keywords: matched.into_iter().map(str::to_string).collect(),
            },
        }
    }

    pub fn lexicon(&self) -> &CategoryLexicon {
        &self.lexicon
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(CategoryLexicon::builtin())
    }
}

/// `min(count * 25, 95)`
pub fn confidence_for(match_count: usize) -> u8 {
    match_count
        .saturating_mul(CONFIDENCE_PER_MATCH)
        .min(MAX_CONFIDENCE) as u8
}
