//! The employee roster: roles, commute distances, and stable iteration order.
//!
//! The roster is a read-only input owned by the caller. Iteration order is
//! the order employees were supplied in; both ranking directions use it for
//! tie-breaks, so it must stay stable for the life of the engine.

use crate::error::{PlanError, PlanResult};
use crate::types::EmployeeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Senior,
    Junior,
    Intern,
    /// Catch-all for a role string the engine does not know. Scores zero
    /// base priority and carries no WFH quota.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Base priority contribution toward a seat claim.
    pub fn base_score(self) -> f64 {
        match self {
            Role::Manager => 5.0,
            Role::Senior  => 3.0,
            Role::Junior  => 1.0,
            Role::Intern  => 1.0,
            Role::Unknown => 0.0,
        }
    }

    /// Maximum WFH days per calendar month.
    pub fn monthly_wfh_limit(self) -> u32 {
        match self {
            Role::Manager => 4,
            Role::Senior  => 6,
            Role::Junior  => 8,
            Role::Intern  => 8,
            Role::Unknown => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Senior  => "senior",
            Role::Junior  => "junior",
            Role::Intern  => "intern",
            Role::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id:          EmployeeId,
    pub name:        String,
    pub role:        Role,
    pub distance_km: f64,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, role: Role, distance_km: f64) -> Self {
        Self { id, name: name.into(), role, distance_km }
    }
}

/// An ordered, duplicate-free employee list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> PlanResult<Self> {
        let mut seen = BTreeSet::new();
        for employee in &employees {
            if !seen.insert(employee.id) {
                return Err(PlanError::DuplicateEmployee { id: employee.id });
            }
        }
        Ok(Self { employees })
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Employees in their stable supplied order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}
