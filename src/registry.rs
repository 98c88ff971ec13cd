//! Process registry.
//!
//! Normalizes the caller's parallel input arrays into [`Process`] records.
//! Input position is the permanent identity of each process and the last
//! tie-breaker of every strategy, so the registry never reorders its
//! records; orderings such as [`ProcessRegistry::arrival_order`] are
//! returned as id lists.

use std::ops::{Index, IndexMut};

use crate::error::SimulationError;
use crate::models::{Process, ProcessId};
use crate::validation::validate_input;

/// The processes of one simulation, indexed by [`ProcessId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Builds a registry from parallel arrays.
    ///
    /// `priorities` defaults to all zero when absent or empty.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInput`] listing every length mismatch,
    /// non-positive burst and negative arrival found.
    pub fn new(
        arrivals: &[i64],
        bursts: &[i64],
        priorities: Option<&[i32]>,
    ) -> Result<Self, SimulationError> {
        validate_input(arrivals, bursts, priorities)?;

        let priorities = priorities.filter(|p| !p.is_empty());
        let processes = arrivals
            .iter()
            .zip(bursts)
            .enumerate()
            .map(|(index, (&arrival, &burst))| {
                let priority = priorities.map_or(0, |p| p[index]);
                Process::new(ProcessId::from_index(index), arrival, burst).with_priority(priority)
            })
            .collect();

        Ok(Self { processes })
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether there are no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Processes in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    /// Looks up a process.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(id.index())
    }

    /// Ids sorted by arrival time, ties by input order.
    pub fn arrival_order(&self) -> Vec<ProcessId> {
        let mut ids: Vec<ProcessId> = self.processes.iter().map(|p| p.id).collect();
        ids.sort_by_key(|&id| (self[id].arrival, id));
        ids
    }

    /// Earliest arrival strictly after `t` among incomplete processes.
    pub fn next_arrival_after(&self, t: i64) -> Option<i64> {
        self.processes
            .iter()
            .filter(|p| !p.is_complete() && p.arrival > t)
            .map(|p| p.arrival)
            .min()
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst).sum()
    }

    /// Whether every process has finished.
    pub fn all_complete(&self) -> bool {
        self.processes.iter().all(Process::is_complete)
    }
}

impl Index<ProcessId> for ProcessRegistry {
    type Output = Process;

    fn index(&self, id: ProcessId) -> &Process {
        &self.processes[id.index()]
    }
}

impl IndexMut<ProcessId> for ProcessRegistry {
    fn index_mut(&mut self, id: ProcessId) -> &mut Process {
        &mut self.processes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn pid(i: usize) -> ProcessId {
        ProcessId::from_index(i)
    }

    #[test]
    fn test_registry_ids_follow_input_order() {
        let reg = ProcessRegistry::new(&[4, 0, 2], &[1, 2, 3], None).unwrap();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg[pid(0)].arrival, 4);
        assert_eq!(reg[pid(1)].burst, 2);
        assert_eq!(reg[pid(2)].id.label(), "P3");
        assert!(reg.iter().all(|p| p.remaining == p.burst));
    }

    #[test]
    fn test_registry_default_priorities() {
        let reg = ProcessRegistry::new(&[0, 1], &[1, 2], None).unwrap();
        assert!(reg.iter().all(|p| p.priority == 0));

        let reg = ProcessRegistry::new(&[0, 1], &[1, 2], Some(&[])).unwrap();
        assert!(reg.iter().all(|p| p.priority == 0));
    }

    #[test]
    fn test_registry_priorities() {
        let reg = ProcessRegistry::new(&[0, 1], &[1, 2], Some(&[3, -1])).unwrap();
        assert_eq!(reg[pid(0)].priority, 3);
        assert_eq!(reg[pid(1)].priority, -1);
    }

    #[test]
    fn test_registry_rejects_invalid() {
        let err = ProcessRegistry::new(&[0, 1], &[1], None).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::LengthMismatch));

        let err = ProcessRegistry::new(&[0], &[0], None).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::NonPositiveBurst));

        let err = ProcessRegistry::new(&[0, 1], &[1, 1], Some(&[1, 2, 3])).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::LengthMismatch));
    }

    #[test]
    fn test_registry_empty() {
        let reg = ProcessRegistry::new(&[], &[], None).unwrap();
        assert!(reg.is_empty());
        assert!(reg.arrival_order().is_empty());
        assert!(reg.all_complete());
        assert_eq!(reg.next_arrival_after(0), None);
    }

    #[test]
    fn test_arrival_order_ties_by_id() {
        let reg = ProcessRegistry::new(&[2, 0, 2, 0], &[1, 1, 1, 1], None).unwrap();
        assert_eq!(reg.arrival_order(), vec![pid(1), pid(3), pid(0), pid(2)]);
    }

    #[test]
    fn test_next_arrival_after() {
        let mut reg = ProcessRegistry::new(&[0, 3, 7], &[1, 1, 1], None).unwrap();
        assert_eq!(reg.next_arrival_after(0), Some(3));
        assert_eq!(reg.next_arrival_after(3), Some(7));
        assert_eq!(reg.next_arrival_after(7), None);

        reg[pid(1)].execute(1);
        assert_eq!(reg.next_arrival_after(0), Some(7));
    }

    #[test]
    fn test_total_burst_and_completion() {
        let mut reg = ProcessRegistry::new(&[0, 0], &[2, 3], None).unwrap();
        assert_eq!(reg.total_burst(), 5);
        assert!(!reg.all_complete());
        reg[pid(0)].execute(2);
        reg[pid(1)].execute(3);
        assert!(reg.all_complete());
        assert_eq!(reg.get(pid(2)), None);
    }
}
