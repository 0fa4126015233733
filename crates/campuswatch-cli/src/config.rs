//! CLI configuration

use campuswatch_classifiers::LexiconConfig;
use campuswatch_live::LiveConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampusWatchConfig {
    /// Lexicon overrides
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Debounce settings
    #[serde(default)]
    pub live: LiveConfig,
}

impl CampusWatchConfig {
    /// Load configuration from file, or defaults when the file is absent
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config = serde_yaml::from_str(&content)?;
            debug!(path = config_path, "Loaded configuration file");
            Ok(config)
        } else {
            debug!(path = config_path, "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply CLI overrides for the live controller
    pub fn with_live_overrides(mut self, delay_ms: Option<u64>, min_chars: Option<usize>) -> Self {
        if let Some(delay_ms) = delay_ms {
            self.live.delay_ms = delay_ms;
        }
        if let Some(min_chars) = min_chars {
            self.live.min_chars = min_chars;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = CampusWatchConfig::load("/nonexistent/campuswatch.yaml").unwrap();
        assert_eq!(config.live, LiveConfig::default());
        assert!(config.lexicon.categories.is_none());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "live:\n  delay_ms: 300\nlexicon:\n  urgency:\n    high: [fire]\n    medium: [slow]"
        )
        .unwrap();

        let config = CampusWatchConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.live.delay_ms, 300);
        assert_eq!(config.live.min_chars, 3);
        assert_eq!(config.lexicon.urgency.unwrap().high, vec!["fire"]);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "live: [not, a, map]").unwrap();

        assert!(CampusWatchConfig::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = CampusWatchConfig::default().with_live_overrides(Some(100), None);
        assert_eq!(config.live.delay_ms, 100);
        assert_eq!(config.live.min_chars, 3);
    }
}
