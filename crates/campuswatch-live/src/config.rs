//! Live controller configuration

use campuswatch_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Debounce parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LiveConfig {
    /// Quiet period after the last qualifying edit, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Minimum trimmed length before analysis starts, in UTF-16 code units
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

impl LiveConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Reject settings that would analyze empty input
    pub fn validate(&self) -> Result<()> {
        if self.min_chars == 0 {
            return Err(Error::config("live.min_chars must be at least 1"));
        }
        Ok(())
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            min_chars: default_min_chars(),
        }
    }
}

fn default_delay_ms() -> u64 {
    800
}

fn default_min_chars() -> usize {
    3
}
