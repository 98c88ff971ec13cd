//! Non-preemptive selection loop and Shortest-Job-First.
//!
//! # Algorithm
//!
//! 1. When the CPU frees, rank every arrived, incomplete process with a
//!    [`SelectionRule`].
//! 2. Run the winner to completion.
//! 3. If nothing is ready, idle until the next arrival.
//!
//! # Complexity
//! O(n²) for n processes.

use tracing::debug;

use super::trace::Trace;
use crate::dispatching::SelectionRule;
use crate::models::ExecutionSlice;
use crate::registry::ProcessRegistry;

/// Runs processes to completion, choosing the next one by `rule`.
pub fn run_to_completion(registry: &mut ProcessRegistry, rule: SelectionRule) -> Vec<ExecutionSlice> {
    debug!(rule = rule.name(), "dispatching until completion");
    let mut trace = Trace::new();

    loop {
        let now = trace.now();
        match rule.select(registry.processes(), now) {
            Some(id) => {
                let process = &mut registry[id];
                let remaining = process.remaining;
                trace.run(process, remaining);
            }
            None => match registry.next_arrival_after(now) {
                Some(next) => trace.idle_until(next),
                None => break,
            },
        }
    }

    trace.into_slices()
}

/// Simulates non-preemptive SJF: smallest burst, then arrival, then id.
pub fn shortest_job_first(registry: &mut ProcessRegistry) -> Vec<ExecutionSlice> {
    run_to_completion(registry, SelectionRule::ShortestJob)
}
