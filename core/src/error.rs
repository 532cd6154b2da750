use crate::types::{EmployeeId, Floor, SeatId};
use thiserror::Error;

/// Errors raised while loading configuration or constructing an engine.
///
/// Allocation itself is total: quota exhaustion, seat shortfall, and stale
/// queue entries are all handled in-band and never surface as errors.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate employee id {id} in roster")]
    DuplicateEmployee { id: EmployeeId },

    #[error("Duplicate seat id {id} in inventory")]
    DuplicateSeat { id: SeatId },

    #[error("Floor {floor} lists seat {seat} which is not in the inventory")]
    UnknownSeat { floor: Floor, seat: SeatId },

    #[error("Seat {seat} is recorded on floor {recorded} but listed under floor {listed}")]
    FloorMismatch { seat: SeatId, recorded: Floor, listed: Floor },

    #[error("Seat {seat} is missing from every floor list")]
    UnlistedSeat { seat: SeatId },
}

pub type PlanResult<T> = Result<T, PlanError>;
