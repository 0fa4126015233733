//! CampusWatch Classifiers
//!
//! Keyword classifiers that preview how a campus issue report will be
//! triaged while the reporter is still typing.
//!
//! Two classifiers share one matching model (lowercase, substring
//! containment) but use disjoint vocabularies:
//! - Category: weighted keyword counting over an ordered category lexicon
//! - Urgency: a tiered decision ladder (high, then medium, then low)
//!
//! Both are pure and total. `IssueAnalyzer` runs them together and produces
//! a `PredictionSnapshot`.

pub mod analyzer;
pub mod category;
pub mod config;
pub mod lexicon;
pub mod urgency;

pub use analyzer::IssueAnalyzer;
pub use category::CategoryClassifier;
pub use config::{CategoryEntrySpec, LexiconConfig, UrgencyTiersSpec};
pub use lexicon::{
    input_length, normalize, trim_input, CategoryLexicon, KeywordSet, UrgencyLexicon,
};
pub use urgency::UrgencyClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::IssueAnalyzer;
    pub use crate::category::CategoryClassifier;
    pub use crate::lexicon::{CategoryLexicon, UrgencyLexicon};
    pub use crate::urgency::UrgencyClassifier;
    pub use campuswatch_core::prelude::*;
}
