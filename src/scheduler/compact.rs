//! Timeline compaction.
//!
//! Merges consecutive execution slices with the same owner into one
//! Gantt segment. Coverage is preserved exactly: slices are only merged
//! when they touch, so a gap in the input stays a gap in the output.

use crate::models::{ExecutionSlice, GanttSegment};

/// Compacts a raw trace into maximal Gantt segments.
pub fn compact(slices: &[ExecutionSlice]) -> Vec<GanttSegment> {
    let mut segments: Vec<GanttSegment> = Vec::with_capacity(slices.len());

    for slice in slices {
        match segments.last_mut() {
            Some(last) if last.owner == slice.owner && last.stop == slice.start => {
                last.stop = slice.stop;
            }
            _ => segments.push(GanttSegment::from(*slice)),
        }
    }

    segments
}
