//! CampusWatch Core
//!
//! Core types and error handling shared across CampusWatch components.
//!
//! This crate provides:
//! - The closed category and urgency vocabularies
//! - Per-classifier predictions and the combined `PredictionSnapshot`
//! - The live-analysis phase enum published to host forms
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    AnalysisPhase, Category, CategoryPrediction, PredictionSnapshot, UrgencyLevel,
    UrgencyPrediction,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        AnalysisPhase, Category, CategoryPrediction, PredictionSnapshot, UrgencyLevel,
        UrgencyPrediction,
    };
}
