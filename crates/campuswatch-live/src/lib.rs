//! CampusWatch Live Analysis
//!
//! Runs the issue classifiers while a reporter types. Input is debounced:
//! only a quiet period after the last qualifying edit triggers a
//! classification pass, and at most one timer is pending per controller.

pub mod config;
pub mod controller;
pub mod timer;

pub use config::LiveConfig;
pub use controller::{AnalysisState, LiveAnalysisController};
pub use timer::DebounceTimer;
