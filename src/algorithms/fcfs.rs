//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order, ties by input order.
//! The CPU idles whenever the next process has not yet arrived.

use super::trace::Trace;
use crate::models::ExecutionSlice;
use crate::registry::ProcessRegistry;

/// Simulates FCFS over the registry.
pub fn first_come_first_served(registry: &mut ProcessRegistry) -> Vec<ExecutionSlice> {
    let mut trace = Trace::new();

    for id in registry.arrival_order() {
        let process = &mut registry[id];
        trace.idle_until(process.arrival);
        let burst = process.remaining;
        trace.run(process, burst);
    }

    trace.into_slices()
}
