//! Execution trace builder shared by every strategy.

use tracing::trace;

use crate::models::{ExecutionSlice, Process};

/// Appends slices to a timeline while tracking the simulation clock.
///
/// The clock only moves forward through [`Trace::run`] and
/// [`Trace::idle_until`], so emitted slices are contiguous from time 0.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    slices: Vec<ExecutionSlice>,
    now: i64,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current simulation time.
    #[inline]
    pub(crate) fn now(&self) -> i64 {
        self.now
    }

    /// Covers `[now, t)` with an idle slice. No-op if `t <= now`.
    pub(crate) fn idle_until(&mut self, t: i64) {
        if t > self.now {
            trace!(start = self.now, stop = t, "idle");
            self.slices.push(ExecutionSlice::idle(self.now, t));
            self.now = t;
        }
    }

    /// Runs `process` for up to `amount` units starting now.
    ///
    /// Returns the time actually executed.
    pub(crate) fn run(&mut self, process: &mut Process, amount: i64) -> i64 {
        let ran = process.execute(amount);
        if ran > 0 {
            let stop = self.now + ran;
            trace!(process = %process.id, start = self.now, stop, remaining = process.remaining, "run");
            self.slices.push(ExecutionSlice::new(process.id, self.now, stop));
            self.now = stop;
        }
        ran
    }

    pub(crate) fn into_slices(self) -> Vec<ExecutionSlice> {
        self.slices
    }
}
