//! Monthly and weekly WFH quota bookkeeping.

use crate::calendar::YearMonth;
use crate::roster::{Employee, Roster};
use crate::types::EmployeeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hard cap on WFH days within one caller-defined week.
pub const WEEKLY_WFH_CAP: u32 = 5;

/// Per-week WFH counters. Owned by the caller, reset at week boundaries,
/// and threaded through every daily allocation of that week.
pub type WeeklyCounts = BTreeMap<EmployeeId, u32>;

/// Tracks each employee's WFH days for the current calendar month.
///
/// The tracked month rolls lazily: the first allocation observed in a new
/// month zeroes every roster member's counter. Between rolls, counters only
/// move through `record_wfh`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotaTracker {
    current_month: Option<YearMonth>,
    counts:        BTreeMap<EmployeeId, u32>,
}

impl QuotaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter if `observed` differs from the tracked month.
    /// Idempotent within a month. Returns whether a roll happened.
    pub fn reset_if_new_month(&mut self, observed: YearMonth, roster: &Roster) -> bool {
        if self.current_month == Some(observed) {
            return false;
        }
        self.current_month = Some(observed);
        self.counts = roster.iter().map(|e| (e.id, 0)).collect();
        log::info!("month={observed} quota: monthly WFH counters reset");
        true
    }

    /// Whether `employee` may still take a WFH day this month.
    pub fn can_take_wfh(&self, employee: &Employee) -> bool {
        self.used(employee.id).unwrap_or(0) < employee.role.monthly_wfh_limit()
    }

    /// Record one WFH day. The caller must have checked `can_take_wfh` (and
    /// the weekly cap, where it applies) immediately before; violating that
    /// is a logic bug, not a runtime condition.
    pub fn record_wfh(&mut self, id: EmployeeId) {
        *self.counts.entry(id).or_insert(0) += 1;
    }

    /// Days used this month, or `None` if the employee has never been
    /// tracked in the current month.
    pub fn used(&self, id: EmployeeId) -> Option<u32> {
        self.counts.get(&id).copied()
    }

    pub fn snapshot(&self) -> BTreeMap<EmployeeId, u32> {
        self.counts.clone()
    }
}
