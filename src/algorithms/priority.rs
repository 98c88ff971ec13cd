//! Priority scheduling, non-preemptive and preemptive.
//!
//! Lower priority numbers are more important. Equal priorities fall back
//! to arrival time, then input order.
//!
//! # Preemption
//!
//! The preemptive variant re-evaluates at every event boundary: a process
//! start, a completion, or an arrival. A running process is only displaced
//! by a strictly more important one; an equal priority never preempts.
//! Between two events nothing changes, so slices are cut at arrivals only.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use tracing::debug;

use super::non_preemptive::run_to_completion;
use super::trace::Trace;
use crate::dispatching::SelectionRule;
use crate::models::{ExecutionSlice, ProcessId};
use crate::registry::ProcessRegistry;

/// Simulates non-preemptive priority scheduling.
pub fn non_preemptive_priority(registry: &mut ProcessRegistry) -> Vec<ExecutionSlice> {
    run_to_completion(registry, SelectionRule::Priority)
}

/// Simulates preemptive priority scheduling.
pub fn preemptive_priority(registry: &mut ProcessRegistry) -> Vec<ExecutionSlice> {
    let mut trace = Trace::new();
    let mut running: Option<ProcessId> = None;

    loop {
        let now = trace.now();
        let Some(best) = SelectionRule::Priority.select(registry.processes(), now) else {
            match registry.next_arrival_after(now) {
                Some(next) => {
                    trace.idle_until(next);
                    continue;
                }
                None => break,
            }
        };

        let chosen = match running {
            Some(current) if registry[current].priority <= registry[best].priority => current,
            Some(current) => {
                debug!(at = now, preempted = %current, by = %best, "preemption");
                best
            }
            None => best,
        };

        let until_next_event = registry
            .next_arrival_after(now)
            .map_or(i64::MAX, |next| next - now);
        let process = &mut registry[chosen];
        let amount = process.remaining.min(until_next_event);
        trace.run(process, amount);

        running = (!registry[chosen].is_complete()).then_some(chosen);
    }

    trace.into_slices()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;

    fn spans(slices: &[ExecutionSlice]) -> Vec<(Owner, i64, i64)> {
        slices.iter().map(|s| (s.owner, s.start, s.stop)).collect()
    }

    fn p(i: usize) -> Owner {
        Owner::Process(ProcessId::from_index(i))
    }

    #[test]
    fn test_npp_picks_lowest_number() {
        let mut reg = ProcessRegistry::new(&[0, 0, 0], &[2, 3, 1], Some(&[3, 1, 2])).unwrap();
        let slices = non_preemptive_priority(&mut reg);
        assert_eq!(spans(&slices), vec![(p(1), 0, 3), (p(2), 3, 4), (p(0), 4, 6)]);
    }

    #[test]
    fn test_npp_does_not_preempt() {
        let mut reg = ProcessRegistry::new(&[0, 1], &[5, 2], Some(&[2, 1])).unwrap();
        let slices = non_preemptive_priority(&mut reg);
        assert_eq!(spans(&slices), vec![(p(0), 0, 5), (p(1), 5, 7)]);
    }

    #[test]
    fn test_npp_tie_by_arrival_then_id() {
        let mut reg = ProcessRegistry::new(&[0, 2, 1, 1], &[3, 1, 1, 1], Some(&[0, 1, 1, 1])).unwrap();
        let slices = non_preemptive_priority(&mut reg);
        assert_eq!(
            spans(&slices),
            vec![(p(0), 0, 3), (p(2), 3, 4), (p(3), 4, 5), (p(1), 5, 6)]
        );
    }

    #[test]
    fn test_pp_preempts_on_arrival() {
        let mut reg = ProcessRegistry::new(&[0, 1], &[5, 2], Some(&[2, 1])).unwrap();
        let slices = preemptive_priority(&mut reg);
        // Raw slices before compaction.
        assert_eq!(spans(&slices), vec![(p(0), 0, 1), (p(1), 1, 3), (p(0), 3, 7)]);
    }

    #[test]
    fn test_pp_equal_priority_does_not_preempt() {
        let mut reg = ProcessRegistry::new(&[0, 1], &[4, 2], Some(&[1, 1])).unwrap();
        let slices = preemptive_priority(&mut reg);
        assert_eq!(spans(&slices), vec![(p(0), 0, 1), (p(0), 1, 4), (p(1), 4, 6)]);
    }

    #[test]
    fn test_pp_less_important_arrival_does_not_preempt() {
        let mut reg = ProcessRegistry::new(&[0, 2], &[4, 1], Some(&[1, 5])).unwrap();
        let slices = preemptive_priority(&mut reg);
        assert_eq!(spans(&slices), vec![(p(0), 0, 2), (p(0), 2, 4), (p(1), 4, 5)]);
    }

    #[test]
    fn test_pp_resumes_after_completion_by_priority() {
        // P3 preempts P1 at 2; when P3 finishes, P2 (priority 2) beats P1 (3).
        let mut reg = ProcessRegistry::new(&[0, 1, 2], &[4, 2, 1], Some(&[3, 2, 1])).unwrap();
        let slices = preemptive_priority(&mut reg);
        assert_eq!(
            spans(&slices),
            vec![(p(0), 0, 1), (p(1), 1, 2), (p(2), 2, 3), (p(1), 3, 4), (p(0), 4, 7)]
        );
    }

    #[test]
    fn test_pp_idle_then_start() {
        let mut reg = ProcessRegistry::new(&[2, 2], &[1, 1], Some(&[1, 0])).unwrap();
        let slices = preemptive_priority(&mut reg);
        assert_eq!(
            spans(&slices),
            vec![(Owner::Idle, 0, 2), (p(1), 2, 3), (p(0), 3, 4)]
        );
    }

    #[test]
    fn test_pp_equal_priority_fresh_start_by_arrival() {
        let mut reg = ProcessRegistry::new(&[1, 0], &[1, 3], Some(&[1, 1])).unwrap();
        let slices = preemptive_priority(&mut reg);
        assert_eq!(spans(&slices), vec![(p(1), 0, 1), (p(1), 1, 3), (p(0), 3, 4)]);
    }
}
