//! Per-cycle allocation results returned to the caller.

use crate::roster::Role;
use crate::types::{EmployeeId, Floor, SeatId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One employee seated at one seat for the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub employee_id: EmployeeId,
    pub seat_id:     SeatId,
}

/// A seated employee as shown in the per-floor report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorAssignment {
    pub employee: String,
    pub seat:     SeatId,
    pub role:     Role,
}

/// All assignments on one floor, in seat-packing order. Floors with no
/// assignments are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorSeating {
    pub floor:       Floor,
    pub assignments: Vec<FloorAssignment>,
}

/// Result of one daily allocation cycle. Weekly counters live with the
/// caller and are not echoed back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date:             NaiveDate,
    pub seat_assignments: Vec<SeatAssignment>,
    pub wfh_employees:    Vec<EmployeeId>,
    pub seating_by_floor: Vec<FloorSeating>,
    pub monthly_usage:    BTreeMap<EmployeeId, u32>,
}

/// Result of one weekly bulk allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week_start:       NaiveDate,
    pub seat_assignments: Vec<SeatAssignment>,
    pub wfh_employees:    Vec<EmployeeId>,
    pub seating_by_floor: Vec<FloorSeating>,
    pub monthly_usage:    BTreeMap<EmployeeId, u32>,
}
