//! Single-slot cancellable debounce timer

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Holds at most one pending delayed task.
///
/// Every `schedule` cancels the previous task before spawning the next one
/// and bumps a generation counter. A task that has already woken when it is
/// cancelled can still run its callback, so callbacks must confirm their
/// generation with [`DebounceTimer::complete`] (under the owner's lock)
/// before acting.
#[derive(Debug)]
pub struct DebounceTimer {
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

impl DebounceTimer {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: None,
            generation: 0,
        }
    }

    /// Cancel any pending task and run `task(generation)` after `delay`.
    ///
    /// Returns the generation handed to `task`.
    pub fn schedule<F>(&mut self, delay: Duration, task: F) -> u64
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task(generation);
        }));

        generation
    }

    /// Cancel the pending task, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Claim the slot for a firing task.
    ///
    /// Returns `true` only for the generation currently pending; the slot is
    /// then empty. Stale or cancelled generations get `false`.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.pending.is_some() && self.generation == generation {
            // The task is the caller; dropping the handle detaches it.
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_schedule_fires_after_delay() {
        let fired = Arc::new(AtomicU64::new(0));
        let mut timer = DebounceTimer::new(Handle::current());

        let f = fired.clone();
        let generation = timer.schedule(Duration::from_millis(100), move |g| {
            f.store(g, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), generation);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_cancels_previous() {
        let fired = Arc::new(AtomicU64::new(0));
        let mut timer = DebounceTimer::new(Handle::current());

        for _ in 0..5 {
            let f = fired.clone();
            timer.schedule(Duration::from_millis(100), move |_| {
                f.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(timer.generation(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_fire() {
        let fired = Arc::new(AtomicU64::new(0));
        let mut timer = DebounceTimer::new(Handle::current());

        let f = fired.clone();
        timer.schedule(Duration::from_millis(100), move |_| {
            f.fetch_add(1, Ordering::SeqCst);
        });
        assert!(timer.is_pending());
        assert!(timer.cancel());
        assert!(!timer.is_pending());
        assert!(!timer.cancel());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_complete_rejects_stale_generation() {
        let mut timer = DebounceTimer::new(Handle::current());

        let first = timer.schedule(Duration::from_secs(60), |_| {});
        let second = timer.schedule(Duration::from_secs(60), |_| {});

        assert!(!timer.complete(first));
        assert!(timer.complete(second));
        // slot already claimed
        assert!(!timer.complete(second));
        assert!(!timer.is_pending());
    }
}
