//! The WFH eligibility queue: round-robin fairness over under-quota employees.

use crate::types::EmployeeId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered employee ids eligible for WFH, weakest seat claim first.
///
/// Each id appears at most once. The queue never re-validates quotas
/// itself; the allocator checks every popped id and skips entries that went
/// stale since the last refill, leaving their fairness position intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityQueue {
    entries: VecDeque<EmployeeId>,
}

impl EligibilityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a freshly ranked id sequence.
    pub fn replace(&mut self, ranked: Vec<EmployeeId>) {
        self.entries = ranked.into();
    }

    pub fn pop_next(&mut self) -> Option<EmployeeId> {
        self.entries.pop_front()
    }

    /// Move today's WFH participants to the back, in selection order, so
    /// tomorrow prefers different people without a full rebuild.
    pub fn rotate_to_back(&mut self, selected: &[EmployeeId]) {
        self.entries.retain(|id| !selected.contains(id));
        self.entries.extend(selected.iter().copied());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Current ordering, front first.
    pub fn snapshot(&self) -> Vec<EmployeeId> {
        self.entries.iter().copied().collect()
    }
}
