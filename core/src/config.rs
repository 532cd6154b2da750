//! Office configuration: JSON loading and the built-in demo office.
//!
//! A config file is one JSON document listing employees, floors, and seats:
//!
//! ```json
//! {
//!   "employees": [{ "id": 1, "name": "Alice", "role": "manager", "distance_km": 10.0 }],
//!   "floors":    [{ "floor": 1, "seats": [101, 102] }],
//!   "seats":     [{ "id": 101, "floor": 1 }, { "id": 102, "floor": 1 }]
//! }
//! ```

use crate::{
    error::PlanResult,
    layout::{FloorPlan, OfficeLayout, Seat},
    roster::{Employee, Role, Roster},
    types::{EmployeeId, Floor, SeatId},
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct EmployeeEntry {
    id:          EmployeeId,
    name:        String,
    role:        Role,
    distance_km: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct FloorEntry {
    floor: Floor,
    seats: Vec<SeatId>,
}

#[derive(Debug, Clone, Deserialize)]
struct SeatEntry {
    id:    SeatId,
    floor: Floor,
}

#[derive(Debug, Clone, Deserialize)]
struct OfficeFile {
    employees: Vec<EmployeeEntry>,
    floors:    Vec<FloorEntry>,
    seats:     Vec<SeatEntry>,
}

/// A validated roster plus office layout, ready to build an engine from.
#[derive(Debug, Clone)]
pub struct OfficeConfig {
    pub roster: Roster,
    pub layout: OfficeLayout,
}

impl OfficeConfig {
    /// Load an office description from a JSON file at `path`.
    pub fn load(path: &str) -> PlanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: OfficeFile = serde_json::from_str(&content)?;

        let roster = Roster::new(
            file.employees
                .into_iter()
                .map(|e| Employee::new(e.id, e.name, e.role, e.distance_km))
                .collect(),
        )?;
        let layout = OfficeLayout::new(
            file.floors
                .into_iter()
                .map(|f| FloorPlan { floor: f.floor, seats: f.seats })
                .collect(),
            file.seats
                .into_iter()
                .map(|s| Seat { id: s.id, floor: s.floor, occupied_by: None })
                .collect(),
        )?;

        Ok(Self { roster, layout })
    }

    /// The ten-person, eight-seat office used by the runner when no config
    /// file is given, and by the integration tests. Two employees short of
    /// seats, so every cycle sends exactly two people home.
    pub fn demo() -> Self {
        let roster = Roster::new(vec![
            Employee::new(1, "Alice", Role::Manager, 10.0),
            Employee::new(2, "Bob", Role::Senior, 5.0),
            Employee::new(3, "Charlie", Role::Junior, 15.0),
            Employee::new(4, "David", Role::Intern, 3.0),
            Employee::new(5, "Eve", Role::Senior, 8.0),
            Employee::new(6, "Frank", Role::Senior, 12.0),
            Employee::new(7, "Grace", Role::Junior, 7.0),
            Employee::new(8, "Henry", Role::Intern, 4.0),
            Employee::new(9, "Ivy", Role::Junior, 9.0),
            Employee::new(10, "Jack", Role::Junior, 19.0),
        ])
        .expect("demo roster ids are unique");

        let floors = vec![
            FloorPlan { floor: 1, seats: vec![101, 102] },
            FloorPlan { floor: 2, seats: vec![201, 202] },
            FloorPlan { floor: 3, seats: vec![301, 302] },
            FloorPlan { floor: 4, seats: vec![401, 402] },
        ];
        let seats = floors
            .iter()
            .flat_map(|plan| plan.seats.iter().map(|&id| Seat {
                id,
                floor: plan.floor,
                occupied_by: None,
            }))
            .collect();
        let layout = OfficeLayout::new(floors, seats).expect("demo layout is consistent");

        Self { roster, layout }
    }
}
