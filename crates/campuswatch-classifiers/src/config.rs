//! Lexicon configuration
//!
//! Lexicons can be overridden from YAML. Omitted sections fall back to the
//! built-in vocabulary.
//!
//! ```yaml
//! categories:
//!   - category: electrical
//!     keywords: [light, bulb, socket]
//!   - category: security
//!     keywords: [lock, cctv]
//! urgency:
//!   high: [fire, flood]
//!   medium: [noisy, slow]
//! ```

use crate::lexicon::{CategoryLexicon, UrgencyLexicon};
use campuswatch_core::{Category, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Lexicon overrides. `None` keeps the built-in lexicon for that part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    /// Categories in priority order (earlier wins ties)
    #[serde(default)]
    pub categories: Option<Vec<CategoryEntrySpec>>,

    /// Urgency tiers
    #[serde(default)]
    pub urgency: Option<UrgencyTiersSpec>,
}

/// One category and its keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryEntrySpec {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// High and medium urgency keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrgencyTiersSpec {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
}

impl LexiconConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Build the category lexicon described by this config
    pub fn category_lexicon(&self) -> Result<Arc<CategoryLexicon>> {
        match &self.categories {
            None => Ok(CategoryLexicon::builtin()),
            Some(entries) => {
                let lexicon = CategoryLexicon::new(
                    entries
                        .iter()
                        .map(|e| (e.category, e.keywords.clone()))
                        .collect(),
                )?;
                info!(categories = lexicon.len(), "Loaded custom category lexicon");
                Ok(Arc::new(lexicon))
            }
        }
    }

    /// Build the urgency lexicon described by this config
    pub fn urgency_lexicon(&self) -> Result<Arc<UrgencyLexicon>> {
        match &self.urgency {
            None => Ok(UrgencyLexicon::builtin()),
            Some(tiers) => {
                let lexicon = UrgencyLexicon::new(tiers.high.clone(), tiers.medium.clone())?;
                info!(
                    high = lexicon.high().len(),
                    medium = lexicon.medium().len(),
                    "Loaded custom urgency lexicon"
                );
                Ok(Arc::new(lexicon))
            }
        }
    }

    /// Build an analyzer over the configured lexicons
    pub fn build_analyzer(&self) -> Result<crate::IssueAnalyzer> {
        Ok(crate::IssueAnalyzer::new(
            self.category_lexicon()?,
            self.urgency_lexicon()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campuswatch_core::{Error, UrgencyLevel};
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_builtin() {
        let config = LexiconConfig::from_yaml("{}").unwrap();

        assert!(Arc::ptr_eq(&config.category_lexicon().unwrap(), &CategoryLexicon::builtin()));
        assert!(Arc::ptr_eq(&config.urgency_lexicon().unwrap(), &UrgencyLexicon::builtin()));
    }

    #[test]
    fn test_custom_categories_from_yaml() {
        let yaml = r#"
categories:
  - category: security
    keywords: [Lock, cctv]
  - category: electrical
    keywords: [lock]
"#;
        let config = LexiconConfig::from_yaml(yaml).unwrap();
        let analyzer = config.build_analyzer().unwrap();

        let snapshot = analyzer.analyze("lock jammed");
        assert_eq!(snapshot.category, Category::Security);
        assert_eq!(snapshot.matched_keywords, vec!["lock"]);
    }

    #[test]
    fn test_custom_urgency_from_yaml() {
        let yaml = r#"
urgency:
  high: [gas smell]
"#;
        let config = LexiconConfig::from_yaml(yaml).unwrap();
        let analyzer = config.build_analyzer().unwrap();

        assert_eq!(analyzer.analyze("gas smell in lab").urgency, UrgencyLevel::High);
        // no medium tier configured
        assert_eq!(analyzer.analyze("slow wifi").urgency, UrgencyLevel::Low);
    }

    #[test]
    fn test_general_category_rejected() {
        let yaml = r#"
categories:
  - category: general
    keywords: [misc]
"#;
        let config = LexiconConfig::from_yaml(yaml).unwrap();
        assert!(matches!(config.category_lexicon(), Err(Error::Lexicon(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            LexiconConfig::from_yaml("colours: [red]"),
            Err(Error::Yaml(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "urgency:\n  high: [fire]\n  medium: [noisy]").unwrap();

        let config = LexiconConfig::from_file(file.path()).unwrap();
        let lexicon = config.urgency_lexicon().unwrap();
        assert_eq!(lexicon.high().keywords(), &["fire".to_string()]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = LexiconConfig::from_file("/nonexistent/campuswatch/lexicon.yaml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
