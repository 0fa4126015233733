//! Combined category + urgency analysis

use crate::category::CategoryClassifier;
use crate::lexicon::{normalize, CategoryLexicon, UrgencyLexicon};
use crate::urgency::UrgencyClassifier;
use campuswatch_core::PredictionSnapshot;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Runs both classifiers over one text and assembles a snapshot.
///
/// Cheap to clone; the lexicons are shared.
#[derive(Debug, Clone, Default)]
pub struct IssueAnalyzer {
    category: CategoryClassifier,
    urgency: UrgencyClassifier,
}

impl IssueAnalyzer {
    pub fn new(category: Arc<CategoryLexicon>, urgency: Arc<UrgencyLexicon>) -> Self {
        Self {
            category: CategoryClassifier::new(category),
            urgency: UrgencyClassifier::new(urgency),
        }
    }

    /// Classify `text`. Pure apart from logging and metrics.
    pub fn analyze(&self, text: &str) -> PredictionSnapshot {
        let start = Instant::now();

        let normalized = normalize(text);
        let category = self.category.classify_normalized(&normalized);
        let urgency = self.urgency.classify_normalized(&normalized);

        let latency_us = start.elapsed().as_micros() as u64;
        metrics::counter!(
            "campuswatch_classifications_total",
            "category" => category.category.as_str(),
            "urgency" => urgency.urgency.as_str()
        )
        .increment(1);
        metrics::histogram!("campuswatch_classification_latency_us").record(latency_us as f64);

        debug!(
            category = %category.category,
            confidence = category.confidence,
            urgency = %urgency.urgency,
            score = urgency.score,
            latency_us,
            "Classified issue text"
        );

        PredictionSnapshot::new(text, category, urgency)
    }
}
