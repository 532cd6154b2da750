//! The allocation engine, tying the priority calculator, quota tracker,
//! and eligibility queue together across days, weeks, and months.
//!
//! CYCLE ORDER (fixed, documented, never reordered):
//!   1. Roll the monthly quota window if the date entered a new month.
//!   2. Clear all seat occupancy and the seating plan.
//!   3. Select WFH participants from the eligibility queue.
//!   4. Rotate the live queue (daily flow only).
//!   5. Seat the remaining employees by descending priority.
//!
//! RULES:
//!   - Cycles must be invoked in non-decreasing calendar-date order; the
//!     month roll and the caller's weekly counters both depend on it.
//!   - The roster and seat inventory are read-only inputs. The engine owns
//!     the quota counters, the queue, and the per-cycle seating state.
//!   - A cycle is not atomic internally. Anything exposing this engine as a
//!     service must hold one exclusive section around a whole cycle.

use crate::{
    calendar::YearMonth,
    layout::OfficeLayout,
    plan::{DayPlan, FloorAssignment, FloorSeating, SeatAssignment, WeekPlan},
    priority::priority_score,
    queue::EligibilityQueue,
    quota::{QuotaTracker, WeeklyCounts, WEEKLY_WFH_CAP},
    roster::{Employee, Role, Roster},
    types::{EmployeeId, SeatId},
};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

pub struct SeatingEngine {
    roster:  Roster,
    layout:  OfficeLayout,
    quota:   QuotaTracker,
    queue:   EligibilityQueue,
    seating: BTreeMap<EmployeeId, SeatId>,
    leaves:  BTreeMap<EmployeeId, NaiveDate>,
}

impl SeatingEngine {
    /// Build an engine over a validated roster and layout. Both are fixed
    /// for the engine's lifetime.
    pub fn new(roster: Roster, layout: OfficeLayout) -> Self {
        Self {
            roster,
            layout,
            quota:   QuotaTracker::new(),
            queue:   EligibilityQueue::new(),
            seating: BTreeMap::new(),
            leaves:  BTreeMap::new(),
        }
    }

    // ── Weekly bulk flow ─────────────────────────────────────────────────

    /// Allocate a whole week in one shot, ignoring the per-week cap.
    pub fn allocate_weekly(&mut self, week_start: NaiveDate) -> WeekPlan {
        if self.quota.reset_if_new_month(YearMonth::of(week_start), &self.roster) {
            // Fresh month: every counter is zero, so no quota filter yet.
            let ranked = self.rank_ascending(|_| true);
            self.queue.replace(ranked);
            log::debug!(
                "date={week_start} engine: queue rebuilt for new month ({} candidates)",
                self.queue.len()
            );
        }

        self.begin_cycle();
        let wfh_needed = self.roster.len().saturating_sub(self.layout.total_seats());

        let mut wfh: Vec<EmployeeId> = Vec::with_capacity(wfh_needed);
        for _ in 0..wfh_needed {
            if self.queue.is_empty() {
                let ranked = self.rank_ascending(|e| self.quota.can_take_wfh(e));
                self.queue.replace(ranked);
                if self.queue.is_empty() {
                    // Everyone is at quota; selection stops short.
                    break;
                }
            }
            let Some(id) = self.queue.pop_next() else { break };
            let Some(employee) = self.roster.get(id) else { continue };
            if self.quota.can_take_wfh(employee) {
                wfh.push(id);
                self.quota.record_wfh(id);
            }
            // A stale pop forfeits its attempt; callers see the shortfall
            // as wfh_employees.len() < wfh_needed.
        }

        let seat_assignments = self.seat_remainder(&wfh);
        let seating_by_floor = self.group_by_floor(&seat_assignments);
        log::info!(
            "date={week_start} engine: weekly plan, {} seated, {} wfh",
            seat_assignments.len(),
            wfh.len()
        );

        WeekPlan {
            week_start,
            seat_assignments,
            wfh_employees: wfh,
            seating_by_floor,
            monthly_usage: self.quota.snapshot(),
        }
    }

    // ── Daily flow ───────────────────────────────────────────────────────

    /// Allocate one day, additionally enforcing the weekly cap through the
    /// caller-owned counters, which persist across the days of one week.
    pub fn allocate_daily(&mut self, date: NaiveDate, weekly: &mut WeeklyCounts) -> DayPlan {
        // Weekly counters are the caller's to reset at week boundaries.
        self.quota.reset_if_new_month(YearMonth::of(date), &self.roster);

        self.begin_cycle();
        let wfh_needed = self.roster.len().saturating_sub(self.layout.total_seats());

        if self.queue.is_empty() {
            let ranked = self.rank_ascending(|e| {
                weekly.get(&e.id).copied().unwrap_or(0) < WEEKLY_WFH_CAP
                    && self.quota.can_take_wfh(e)
            });
            self.queue.replace(ranked);
            log::debug!(
                "date={date} engine: queue refilled ({} candidates)",
                self.queue.len()
            );
        }

        // Select from a scratch copy; the live queue keeps its ordering for
        // the rotation step below.
        let mut scratch = self.queue.clone();
        let mut wfh: Vec<EmployeeId> = Vec::with_capacity(wfh_needed);
        while wfh.len() < wfh_needed {
            let Some(id) = scratch.pop_next() else { break };
            let Some(employee) = self.roster.get(id) else { continue };
            let weekly_used = weekly.get(&id).copied().unwrap_or(0);
            if weekly_used < WEEKLY_WFH_CAP && self.quota.can_take_wfh(employee) {
                wfh.push(id);
                *weekly.entry(id).or_insert(0) += 1;
                self.quota.record_wfh(id);
            } else {
                // Stale entry: skip without evicting, so the employee keeps
                // its fairness position for later cycles.
                log::debug!("date={date} engine: employee {id} skipped, quota exhausted");
            }
        }

        self.queue.rotate_to_back(&wfh);

        let seat_assignments = self.seat_remainder(&wfh);
        let seating_by_floor = self.group_by_floor(&seat_assignments);
        log::info!(
            "date={date} engine: daily plan, {} seated, {} wfh",
            seat_assignments.len(),
            wfh.len()
        );

        DayPlan {
            date,
            seat_assignments,
            wfh_employees: wfh,
            seating_by_floor,
            monthly_usage: self.quota.snapshot(),
        }
    }

    // ── Leave and reallocation ───────────────────────────────────────────

    /// Record a planned absence. Last write wins; roster membership is not
    /// validated here, that is the caller's concern.
    pub fn request_leave(&mut self, employee: EmployeeId, date: NaiveDate) {
        log::info!("date={date} engine: leave recorded for employee {employee}");
        self.leaves.insert(employee, date);
    }

    /// Backfill seats vacated by leaves dated `today` from the eligibility
    /// queue. Pops skip anyone already seated this cycle, on leave today,
    /// or out of monthly quota, the same skip-and-continue policy the
    /// selection loops use. A seat with no qualifying candidate stays empty.
    pub fn reallocate(&mut self, today: NaiveDate) -> Vec<SeatAssignment> {
        let vacated: Vec<(EmployeeId, SeatId)> = self
            .leaves
            .iter()
            .filter(|(_, date)| **date == today)
            .filter_map(|(id, _)| self.seating.get(id).map(|seat| (*id, *seat)))
            .collect();

        let mut backfills = Vec::new();
        for (absentee, seat_id) in vacated {
            self.seating.remove(&absentee);
            self.layout.set_occupant(seat_id, None);

            let replacement = loop {
                let Some(id) = self.queue.pop_next() else { break None };
                if self.seating.contains_key(&id) || self.leaves.get(&id) == Some(&today) {
                    continue;
                }
                match self.roster.get(id) {
                    Some(e) if self.quota.can_take_wfh(e) => break Some(id),
                    _ => continue,
                }
            };

            match replacement {
                Some(id) => {
                    self.seating.insert(id, seat_id);
                    self.layout.set_occupant(seat_id, Some(id));
                    backfills.push(SeatAssignment { employee_id: id, seat_id });
                    log::info!(
                        "date={today} engine: seat {seat_id} backfilled by employee {id} \
                         after leave of {absentee}"
                    );
                }
                None => {
                    log::debug!("date={today} engine: no eligible backfill for seat {seat_id}");
                }
            }
        }
        backfills
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn layout(&self) -> &OfficeLayout {
        &self.layout
    }

    /// Monthly WFH usage so far, keyed by employee.
    pub fn monthly_usage(&self) -> BTreeMap<EmployeeId, u32> {
        self.quota.snapshot()
    }

    /// The live eligibility queue, front first. Exposed for tooling and
    /// fairness inspection.
    pub fn queue_order(&self) -> Vec<EmployeeId> {
        self.queue.snapshot()
    }

    /// The current cycle's seating plan.
    pub fn seating_plan(&self) -> &BTreeMap<EmployeeId, SeatId> {
        &self.seating
    }

    pub fn seat_of(&self, employee: EmployeeId) -> Option<SeatId> {
        self.seating.get(&employee).copied()
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn begin_cycle(&mut self) {
        self.layout.clear_occupancy();
        self.seating.clear();
    }

    fn score(&self, employee: &Employee) -> f64 {
        priority_score(employee.role, employee.distance_km, self.quota.used(employee.id))
    }

    /// Rank WFH candidates, weakest seat claim first. The sort is stable,
    /// so ties keep roster encounter order.
    fn rank_ascending<F>(&self, eligible: F) -> Vec<EmployeeId>
    where
        F: Fn(&Employee) -> bool,
    {
        let mut scored: Vec<(f64, EmployeeId)> = self
            .roster
            .iter()
            .filter(|e| eligible(e))
            .map(|e| (self.score(e), e.id))
            .collect();
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        scored.into_iter().map(|(_, id)| id).collect()
    }

    /// Rank everyone outside `exclude` for seating, strongest claim first.
    /// Ties break in reverse roster order, the mirror image of the
    /// ascending direction.
    fn rank_descending(&self, exclude: &BTreeSet<EmployeeId>) -> Vec<EmployeeId> {
        let mut scored: Vec<(usize, f64, EmployeeId)> = self
            .roster
            .iter()
            .enumerate()
            .filter(|(_, e)| !exclude.contains(&e.id))
            .map(|(index, e)| (index, self.score(e), e.id))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then(b.0.cmp(&a.0))
        });
        scored.into_iter().map(|(_, _, id)| id).collect()
    }

    /// Seat everyone not working from home, in descending priority, into
    /// the flattened floor order. Whoever is left when seats run out is
    /// silently unassigned.
    fn seat_remainder(&mut self, wfh: &[EmployeeId]) -> Vec<SeatAssignment> {
        let wfh_set: BTreeSet<EmployeeId> = wfh.iter().copied().collect();
        let ranked = self.rank_descending(&wfh_set);
        let order = self.layout.seat_order();

        let mut assignments = Vec::with_capacity(ranked.len().min(order.len()));
        for (&employee_id, &seat_id) in ranked.iter().zip(order.iter()) {
            self.seating.insert(employee_id, seat_id);
            self.layout.set_occupant(seat_id, Some(employee_id));
            assignments.push(SeatAssignment { employee_id, seat_id });
        }
        assignments
    }

    fn group_by_floor(&self, assignments: &[SeatAssignment]) -> Vec<FloorSeating> {
        let mut grouped: Vec<FloorSeating> = self
            .layout
            .floors()
            .iter()
            .map(|plan| FloorSeating { floor: plan.floor, assignments: Vec::new() })
            .collect();

        for assignment in assignments {
            let Some(seat) = self.layout.seat(assignment.seat_id) else { continue };
            let (name, role) = match self.roster.get(assignment.employee_id) {
                Some(e) => (e.name.clone(), e.role),
                None => (String::new(), Role::Unknown),
            };
            if let Some(group) = grouped.iter_mut().find(|g| g.floor == seat.floor) {
                group.assignments.push(FloorAssignment {
                    employee: name,
                    seat:     assignment.seat_id,
                    role,
                });
            }
        }

        grouped.retain(|group| !group.assignments.is_empty());
        grouped
    }
}
