//! Selection rules for dispatching the CPU.
//!
//! Whenever the CPU becomes free, a discipline picks one process among
//! those that have arrived and still owe work. The rules here rank those
//! candidates; each ranking ends with arrival time and input order so the
//! choice is always unique.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::SelectionRule;
//! use cpu_schedule::models::{Process, ProcessId};
//!
//! let processes = vec![
//!     Process::new(ProcessId::from_index(0), 0, 6),
//!     Process::new(ProcessId::from_index(1), 0, 2),
//! ];
//! let next = SelectionRule::ShortestJob.select(&processes, 0);
//! assert_eq!(next, Some(ProcessId::from_index(1)));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod rules;

pub use rules::SelectionRule;
