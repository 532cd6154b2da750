//! Seat inventory and floor grouping.
//!
//! The layout is a read-only input apart from per-cycle occupancy, which the
//! engine clears and rewrites on every allocation. Floors are enumerated in
//! the order supplied at construction; seat packing walks floor 1's seats,
//! then floor 2's, and so on, exactly as configured.

use crate::error::{PlanError, PlanResult};
use crate::types::{EmployeeId, Floor, SeatId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id:          SeatId,
    pub floor:       Floor,
    pub occupied_by: Option<EmployeeId>,
}

/// One floor's seats in their configured packing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub floor: Floor,
    pub seats: Vec<SeatId>,
}

/// The full office: seat table plus the fixed floor enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficeLayout {
    floors: Vec<FloorPlan>,
    seats:  BTreeMap<SeatId, Seat>,
}

impl OfficeLayout {
    /// Build a layout, rejecting inventories whose floor lists and seat
    /// table disagree. Every seat must appear in exactly one floor list,
    /// under the floor recorded on the seat itself.
    pub fn new(floors: Vec<FloorPlan>, seats: Vec<Seat>) -> PlanResult<Self> {
        let mut table = BTreeMap::new();
        for seat in seats {
            let id = seat.id;
            if table.insert(id, seat).is_some() {
                return Err(PlanError::DuplicateSeat { id });
            }
        }

        let mut listed = BTreeSet::new();
        for plan in &floors {
            for &seat_id in &plan.seats {
                let Some(seat) = table.get(&seat_id) else {
                    return Err(PlanError::UnknownSeat { floor: plan.floor, seat: seat_id });
                };
                if seat.floor != plan.floor {
                    return Err(PlanError::FloorMismatch {
                        seat:     seat_id,
                        recorded: seat.floor,
                        listed:   plan.floor,
                    });
                }
                if !listed.insert(seat_id) {
                    return Err(PlanError::DuplicateSeat { id: seat_id });
                }
            }
        }
        for &seat_id in table.keys() {
            if !listed.contains(&seat_id) {
                return Err(PlanError::UnlistedSeat { seat: seat_id });
            }
        }

        Ok(Self { floors, seats: table })
    }

    pub fn total_seats(&self) -> usize {
        self.seats.len()
    }

    /// All seat ids flattened in packing order: every seat of the first
    /// configured floor, then the second, and so on.
    pub fn seat_order(&self) -> Vec<SeatId> {
        self.floors.iter().flat_map(|plan| plan.seats.iter().copied()).collect()
    }

    pub fn floors(&self) -> &[FloorPlan] {
        &self.floors
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.get(&id)
    }

    pub fn occupant(&self, id: SeatId) -> Option<EmployeeId> {
        self.seats.get(&id).and_then(|seat| seat.occupied_by)
    }

    /// Seats are not sticky across cycles; every allocation starts empty.
    pub(crate) fn clear_occupancy(&mut self) {
        for seat in self.seats.values_mut() {
            seat.occupied_by = None;
        }
    }

    pub(crate) fn set_occupant(&mut self, id: SeatId, occupant: Option<EmployeeId>) {
        if let Some(seat) = self.seats.get_mut(&id) {
            seat.occupied_by = occupant;
        }
    }
}
