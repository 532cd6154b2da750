//! Shared primitive types used across the allocation engine.

/// Stable identifier for an employee. Supplied by the caller, never minted here.
pub type EmployeeId = u32;

/// Stable identifier for a physical seat.
pub type SeatId = u32;

/// Floor number used to group seats for reporting and seat enumeration order.
pub type Floor = u32;
