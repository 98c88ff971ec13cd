//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit every process arrived at time 0 into a FIFO ready queue.
//! 2. Pop the head and run it for `min(remaining, quantum)`.
//! 3. Append processes that arrived up to and including the slice stop,
//!    in arrival order (ties by id).
//! 4. Re-append the process just run if it still owes work. Arrivals from
//!    step 3 are therefore ahead of it.
//! 5. With an empty queue, idle until the next arrival and admit it.
//!
//! One raw slice is emitted per turn; consecutive turns by the same process
//! only happen when nothing else is waiting.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;
use std::iter::Peekable;
use std::vec;

use super::trace::Trace;
use crate::models::{ExecutionSlice, ProcessId};
use crate::registry::ProcessRegistry;

/// Simulates Round-Robin with time quantum `quantum` (must be positive).
pub fn round_robin(registry: &mut ProcessRegistry, quantum: i64) -> Vec<ExecutionSlice> {
    debug_assert!(quantum > 0, "quantum must be positive");

    let mut pending = registry.arrival_order().into_iter().peekable();
    let mut ready: VecDeque<ProcessId> = VecDeque::with_capacity(registry.len());
    let mut trace = Trace::new();

    admit_arrived(&mut pending, &mut ready, registry, trace.now());

    loop {
        let Some(id) = ready.pop_front() else {
            match pending.peek().copied() {
                Some(next) => {
                    trace.idle_until(registry[next].arrival);
                    admit_arrived(&mut pending, &mut ready, registry, trace.now());
                    continue;
                }
                None => break,
            }
        };

        trace.run(&mut registry[id], quantum);
        admit_arrived(&mut pending, &mut ready, registry, trace.now());

        if !registry[id].is_complete() {
            ready.push_back(id);
        }
    }

    trace.into_slices()
}

/// Moves every pending process with `arrival <= now` to the ready queue.
///
/// `pending` is in arrival order, so admission stops at the first process
/// that has not yet arrived.
fn admit_arrived(
    pending: &mut Peekable<vec::IntoIter<ProcessId>>,
    ready: &mut VecDeque<ProcessId>,
    registry: &ProcessRegistry,
    now: i64,
) {
    while let Some(id) = pending.next_if(|&id| registry[id].arrival <= now) {
        ready.push_back(id);
    }
}
