//! deskplan-core: seat and work-from-home allocation for a fixed office.
//!
//! The engine rations a scarce pool of seats among a fixed roster on a
//! daily or weekly cadence. Employees who cannot be seated are drawn from a
//! priority-ordered eligibility queue and sent to work from home, with
//! per-role monthly quotas and a five-day weekly cap enforced along the
//! way. All state is in-memory and scoped to the engine's lifetime, and
//! cycles must be driven in non-decreasing calendar-date order.

pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod plan;
pub mod priority;
pub mod queue;
pub mod quota;
pub mod roster;
pub mod types;

pub use config::OfficeConfig;
pub use engine::SeatingEngine;
pub use error::{PlanError, PlanResult};
pub use layout::{FloorPlan, OfficeLayout, Seat};
pub use plan::{DayPlan, FloorAssignment, FloorSeating, SeatAssignment, WeekPlan};
pub use queue::EligibilityQueue;
pub use quota::{QuotaTracker, WeeklyCounts, WEEKLY_WFH_CAP};
pub use roster::{Employee, Role, Roster};
pub use types::{EmployeeId, Floor, SeatId};
