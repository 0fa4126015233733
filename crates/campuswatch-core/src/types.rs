//! Core types for CampusWatch

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue class predicted for a report description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sanitation,
    Infrastructure,
    Electrical,
    Security,
    /// Fallback when no keyword matches; never carries keywords of its own
    General,
}

impl Category {
    /// Categories that can own lexicon keywords, in default registration order
    pub const KEYWORD_BEARING: [Category; 4] = [
        Self::Sanitation,
        Self::Infrastructure,
        Self::Electrical,
        Self::Security,
    ];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sanitation => "sanitation",
            Self::Infrastructure => "infrastructure",
            Self::Electrical => "electrical",
            Self::Security => "security",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    High,
    Medium,
    Low,
}

impl UrgencyLevel {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the category classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPrediction {
    pub category: Category,

    /// Heuristic strength, 0-95
    pub confidence: u8,

    /// Matched keywords of the winning category, in lexicon order
    pub matched_keywords: Vec<String>,
}

impl CategoryPrediction {
    /// The "no keyword matched" result
    pub fn general() -> Self {
        Self {
            category: Category::General,
            confidence: 0,
            matched_keywords: Vec::new(),
        }
    }
}

/// Output of the urgency classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyPrediction {
    pub urgency: UrgencyLevel,

    /// Heuristic strength, 0-95
    pub score: u8,
}

/// Immutable classification result bound to one input text.
///
/// A snapshot is a preview only. The server computes the authoritative
/// category and urgency on submission, and those may differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSnapshot {
    /// The text the snapshot was computed from
    pub text: String,

    pub category: Category,
    pub category_confidence: u8,
    pub matched_keywords: Vec<String>,

    pub urgency: UrgencyLevel,
    pub urgency_score: u8,
}

impl PredictionSnapshot {
    /// Assemble a snapshot from the two classifier outputs
    pub fn new(
        text: impl Into<String>,
        category: CategoryPrediction,
        urgency: UrgencyPrediction,
    ) -> Self {
        Self {
            text: text.into(),
            category: category.category,
            category_confidence: category.confidence,
            matched_keywords: category.matched_keywords,
            urgency: urgency.urgency,
            urgency_score: urgency.score,
        }
    }

    /// Serialize to the JSON shape a host UI consumes
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Observable phase of the live analysis controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisPhase {
    /// No snapshot, nothing scheduled
    Idle,
    /// Debounce window open; the previous snapshot is hidden
    Thinking,
    /// Snapshot available
    Ready,
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Thinking => "thinking",
            Self::Ready => "ready",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_display_wire_names() {
        assert_eq!(Category::Infrastructure.to_string(), "infrastructure");
        assert_eq!(UrgencyLevel::Medium.to_string(), "medium");
        assert_eq!(AnalysisPhase::Thinking.to_string(), "thinking");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = PredictionSnapshot::new(
            "light bulb out",
            CategoryPrediction {
                category: Category::Electrical,
                confidence: 50,
                matched_keywords: vec!["light".to_string(), "bulb".to_string()],
            },
            UrgencyPrediction {
                urgency: UrgencyLevel::Low,
                score: 30,
            },
        );

        let value: serde_json::Value =
            serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["category"], "electrical");
        assert_eq!(value["categoryConfidence"], 50);
        assert_eq!(value["matchedKeywords"][1], "bulb");
        assert_eq!(value["urgency"], "low");
        assert_eq!(value["urgencyScore"], 30);
    }
}
