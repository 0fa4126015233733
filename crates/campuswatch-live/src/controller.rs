//! Live analysis controller
//!
//! State machine behind the report form's "AI Analysis" preview:
//!
//! - `Idle`: trimmed input shorter than `min_chars`; nothing scheduled
//! - `Thinking`: a qualifying edit opened the debounce window
//! - `Ready`: the window closed and a snapshot was published
//!
//! Subscribers receive every transition through a `watch` channel.

use crate::config::LiveConfig;
use crate::timer::DebounceTimer;
use campuswatch_classifiers::{input_length, trim_input, IssueAnalyzer};
use campuswatch_core::{AnalysisPhase, Error, PredictionSnapshot, Result};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, info};

/// Published controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisState {
    pub phase: AnalysisPhase,

    /// Latest snapshot. Kept (but not visible) while `Thinking` until the
    /// next pass supersedes it; cleared on `Idle`.
    pub snapshot: Option<PredictionSnapshot>,
}

impl AnalysisState {
    pub fn idle() -> Self {
        Self {
            phase: AnalysisPhase::Idle,
            snapshot: None,
        }
    }

    /// Snapshot a host should render: only when `Ready`
    pub fn visible_snapshot(&self) -> Option<&PredictionSnapshot> {
        match self.phase {
            AnalysisPhase::Ready => self.snapshot.as_ref(),
            _ => None,
        }
    }

    pub fn is_thinking(&self) -> bool {
        self.phase == AnalysisPhase::Thinking
    }
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self::idle()
    }
}

struct Shared {
    analyzer: IssueAnalyzer,
    config: LiveConfig,
    state_tx: watch::Sender<AnalysisState>,
    inner: Mutex<Inner>,
}

struct Inner {
    current_text: String,
    timer: DebounceTimer,
    closed: bool,
    passes: u64,
}

/// Debounced classifier driver owned by one report form.
///
/// Timers run on the Tokio runtime that was current when the controller was
/// created; `update` itself is synchronous and may be called from any
/// thread.
pub struct LiveAnalysisController {
    shared: Arc<Shared>,
}

impl LiveAnalysisController {
    /// Create a controller on the current Tokio runtime
    pub fn new(analyzer: IssueAnalyzer, config: LiveConfig) -> Result<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| Error::controller(format!("no Tokio runtime available: {e}")))?;
        Self::with_runtime(analyzer, config, runtime)
    }

    /// Create a controller whose timers run on `runtime`
    pub fn with_runtime(
        analyzer: IssueAnalyzer,
        config: LiveConfig,
        runtime: Handle,
    ) -> Result<Self> {
        config.validate()?;
        let (state_tx, _) = watch::channel(AnalysisState::idle());

        info!(
            delay_ms = config.delay_ms,
            min_chars = config.min_chars,
            "Live analysis controller started"
        );

        Ok(Self {
            shared: Arc::new(Shared {
                analyzer,
                config,
                state_tx,
                inner: Mutex::new(Inner {
                    current_text: String::new(),
                    timer: DebounceTimer::new(runtime),
                    closed: false,
                    passes: 0,
                }),
            }),
        })
    }

    /// Feed the full field content after an edit. Returns the new phase.
    pub fn update(&self, text: impl Into<String>) -> Result<AnalysisPhase> {
        let shared = &self.shared;
        let mut inner = shared.inner.lock();
        if inner.closed {
            return Err(Error::controller("controller has been shut down"));
        }

        inner.current_text = text.into();
        let length = input_length(&inner.current_text);

        if length < shared.config.min_chars {
            if inner.timer.cancel() {
                metrics::counter!("campuswatch_debounce_cancelled_total").increment(1);
            }
            shared.state_tx.send_replace(AnalysisState::idle());
            return Ok(AnalysisPhase::Idle);
        }

        // Cancel and reschedule happen under the same lock, so no other
        // update or firing timer can interleave.
        if inner.timer.is_pending() {
            metrics::counter!("campuswatch_debounce_cancelled_total").increment(1);
        }
        let weak = Arc::downgrade(shared);
        let generation = inner
            .timer
            .schedule(shared.config.delay(), move |generation| fire(weak, generation));
        debug!(generation, length, "Debounce window opened");

        shared.state_tx.send_modify(|state| state.phase = AnalysisPhase::Thinking);
        Ok(AnalysisPhase::Thinking)
    }

    /// Classify immediately if a debounce window is open.
    ///
    /// Returns the visible snapshot afterwards, if any. Used by a host form
    /// on submit so the preview reflects the final text.
    pub fn flush(&self) -> Option<PredictionSnapshot> {
        let shared = &self.shared;
        let mut inner = shared.inner.lock();
        if !inner.closed && inner.timer.cancel() {
            debug!("Flushing pending analysis");
            run_pass(shared, &mut inner);
        }
        shared.state_tx.borrow().visible_snapshot().cloned()
    }

    /// Tear down: cancel any pending timer and publish `Idle`.
    ///
    /// Idempotent. No snapshot is published after this returns.
    pub fn shutdown(&self) {
        let mut inner = self.shared.inner.lock();
        if inner.closed {
            return;
        }
        inner.closed = true;
        if inner.timer.cancel() {
            debug!("Cancelled pending analysis on shutdown");
        }
        self.shared.state_tx.send_replace(AnalysisState::idle());
        info!(passes = inner.passes, "Live analysis controller shut down");
    }

    /// Subscribe to phase and snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<AnalysisState> {
        self.shared.state_tx.subscribe()
    }

    /// Current published state
    pub fn state(&self) -> AnalysisState {
        self.shared.state_tx.borrow().clone()
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.shared.state_tx.borrow().phase
    }

    /// Number of classification passes run so far
    pub fn classification_count(&self) -> u64 {
        self.shared.inner.lock().passes
    }

    pub fn is_shut_down(&self) -> bool {
        self.shared.inner.lock().closed
    }
}

impl Drop for LiveAnalysisController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn fire(shared: Weak<Shared>, generation: u64) {
    let Some(shared) = shared.upgrade() else {
        return;
    };
    let mut inner = shared.inner.lock();

    if inner.closed || !inner.timer.complete(generation) {
        debug!(generation, "Discarding stale debounce fire");
        return;
    }

    run_pass(&shared, &mut inner);
}

/// Classify the text as it is now, not as it was when the timer was set
fn run_pass(shared: &Shared, inner: &mut Inner) {
    let snapshot = shared.analyzer.analyze(trim_input(&inner.current_text));
    inner.passes += 1;

    shared.state_tx.send_replace(AnalysisState {
        phase: AnalysisPhase::Ready,
        snapshot: Some(snapshot),
    });
}
