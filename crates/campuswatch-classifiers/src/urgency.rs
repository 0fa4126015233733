//! Urgency classifier
//!
//! A strict decision ladder over two keyword tiers. Evidence of danger
//! dominates regardless of how much mild-concern language accompanies it.

use crate::lexicon::{normalize, trim_input, UrgencyLexicon};
use campuswatch_core::{UrgencyLevel, UrgencyPrediction};
use std::sync::Arc;

const HIGH_SCORE_PER_MATCH: usize = 20;
const HIGH_SCORE_CAP: usize = 95;
/// Flat score for exactly one high-tier match
const SINGLE_HIGH_SCORE: u8 = 50;
const MEDIUM_SCORE_PER_MATCH: usize = 30;
const MEDIUM_SCORE_CAP: usize = 80;
/// Flat score for non-empty text with no tier match
const LOW_SCORE: u8 = 30;

/// Tiered keyword urgency classifier
#[derive(Debug, Clone)]
pub struct UrgencyClassifier {
    lexicon: Arc<UrgencyLexicon>,
}

impl UrgencyClassifier {
    pub fn new(lexicon: Arc<UrgencyLexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify raw text. Never fails.
    pub fn classify(&self, text: &str) -> UrgencyPrediction {
        self.classify_normalized(&normalize(text))
    }

    /// Classify text already passed through [`normalize`]
    pub fn classify_normalized(&self, normalized: &str) -> UrgencyPrediction {
        let high = self.lexicon.high().count_in(normalized);

        if high >= 2 {
            return UrgencyPrediction {
                urgency: UrgencyLevel::High,
                score: scaled(high, HIGH_SCORE_PER_MATCH, HIGH_SCORE_CAP),
            };
        }
        if high == 1 {
            return UrgencyPrediction {
                urgency: UrgencyLevel::High,
                score: SINGLE_HIGH_SCORE,
            };
        }

        let medium = self.lexicon.medium().count_in(normalized);
        if medium >= 1 {
            return UrgencyPrediction {
                urgency: UrgencyLevel::Medium,
                score: scaled(medium, MEDIUM_SCORE_PER_MATCH, MEDIUM_SCORE_CAP),
            };
        }

        let score = if trim_input(normalized).is_empty() {
            0
        } else {
            LOW_SCORE
        };
        UrgencyPrediction {
            urgency: UrgencyLevel::Low,
            score,
        }
    }

    pub fn lexicon(&self) -> &UrgencyLexicon {
        &self.lexicon
    }
}

impl Default for UrgencyClassifier {
    fn default() -> Self {
        Self::new(UrgencyLexicon::builtin())
    }
}

fn scaled(count: usize, per_match: usize, cap: usize) -> u8 {
    count.saturating_mul(per_match).min(cap) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> UrgencyPrediction {
        UrgencyClassifier::default().classify(text)
    }

    #[test]
    fn test_single_high_is_flat_fifty() {
        let result = classify("there is a fire and sparks near the outlet, evacuate now");
        assert_eq!(result.urgency, UrgencyLevel::High);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_single_high_ignores_medium_volume() {
        let result = classify("urgent issue, problem, concern, need a fix");
        assert_eq!(result.urgency, UrgencyLevel::High);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_multiple_high_scales() {
        // broken, dangerous
        let result = classify("Broken railing, dangerous");
        assert_eq!(result.urgency, UrgencyLevel::High);
        assert_eq!(result.score, 40);

        // broken, dangerous, hazard
        let result = classify("broken and dangerous hazard");
        assert_eq!(result.score, 60);
    }

    #[test]
    fn test_high_score_capped() {
        let result = classify("urgent emergency: fire, flood, injury, people trapped");
        assert_eq!(result.urgency, UrgencyLevel::High);
        assert_eq!(result.score, 95);
    }

    #[test]
    fn test_medium_tier() {
        let result = classify("the fan is noisy");
        assert_eq!(result.urgency, UrgencyLevel::Medium);
        assert_eq!(result.score, 30);

        // noisy, slow, sometimes
        let result = classify("noisy and slow, sometimes");
        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_low_for_plain_text() {
        let result = classify("light bulb flickering in room 204");
        assert_eq!(result.urgency, UrgencyLevel::Low);
        assert_eq!(result.score, 30);
    }

    #[test]
    fn test_low_zero_for_empty_or_whitespace() {
        assert_eq!(
            classify(""),
            UrgencyPrediction {
                urgency: UrgencyLevel::Low,
                score: 0
            }
        );
        assert_eq!(classify("   \n\t").score, 0);
        assert_eq!(classify("\u{FEFF} ").score, 0);
    }

    #[test]
    fn test_sparks_is_not_sparking() {
        let result = classify("sparks");
        assert_eq!(result.urgency, UrgencyLevel::Low);
    }
}
