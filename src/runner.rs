//! Offloading a search to a background thread. The chooser itself is a plain
//! single-threaded computation; this module supplies the two signals it polls
//! once per iteration: a last-write-wins progress slot and a cancellation
//! token. The host is expected to keep at most one run live per session,
//! cancelling the old run before starting a new one.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

use crate::chooser::{choose_units, ChooserConfig};
use crate::model::mini::{ForceUnit, Mini};
use crate::score::scorer::ForceScorer;

/// Single-value progress channel, last write wins. Stores the f32 fraction
/// as its bit pattern; no queue, no backpressure.
#[derive(Debug, Clone, Default)]
pub struct ProgressSlot(Arc<AtomicU32>);

impl ProgressSlot {
    pub fn set(&self, fraction: f32) {
        self.0.store(fraction.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }
}

/// Cooperative cancellation flag, checked once per chooser iteration.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The signals a running search polls. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    pub progress: ProgressSlot,
    pub cancel: CancelToken,
}

impl SearchContext {
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn report_progress(&self, fraction: f32) {
        self.progress.set(fraction);
    }
}

/// Handle to a search running on a background thread.
pub struct SearchHandle {
    ctx: SearchContext,
    thread: thread::JoinHandle<BTreeSet<ForceUnit>>,
}

impl SearchHandle {
    /// Latest reported progress fraction in [0, 1].
    pub fn progress(&self) -> f32 {
        self.ctx.progress.get()
    }

    pub fn cancel(&self) {
        self.ctx.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the search and returns its best force. Cancellation still
    /// yields the best force found before the token was observed.
    pub fn join(self) -> BTreeSet<ForceUnit> {
        // The chooser never panics on well-formed inputs; an empty force is
        // the only sensible answer if the thread died anyway.
        self.thread.join().unwrap_or_default()
    }
}

/// Runs the chooser on a fresh thread. Inputs are owned copies, so the caller
/// is free to mutate its own catalog or settings while the search runs.
pub fn spawn_search(
    scorer: ForceScorer,
    minis: Vec<Mini>,
    initial: BTreeSet<ForceUnit>,
    config: ChooserConfig,
) -> SearchHandle {
    let ctx = SearchContext::default();
    let thread_ctx = ctx.clone();
    let thread = thread::spawn(move || {
        let best = choose_units(&scorer, &minis, &initial, &config, &thread_ctx);
        if !thread_ctx.is_cancelled() {
            thread_ctx.report_progress(1.0);
        }
        best
    });
    SearchHandle { ctx, thread }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_slot_is_last_write_wins() {
        let slot = ProgressSlot::default();
        assert_eq!(slot.get(), 0.0);
        slot.set(0.25);
        slot.set(0.75);
        assert_eq!(slot.get(), 0.75);
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::default();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
