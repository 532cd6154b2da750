use chrono::NaiveDate;
use deskplan_core::config::OfficeConfig;
use deskplan_core::engine::SeatingEngine;
use deskplan_core::layout::{FloorPlan, OfficeLayout, Seat};
use deskplan_core::quota::WeeklyCounts;
use deskplan_core::roster::{Employee, Role, Roster};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn demo_engine() -> SeatingEngine {
    let office = OfficeConfig::demo();
    SeatingEngine::new(office.roster, office.layout)
}

#[test]
fn vacated_seat_is_backfilled_from_the_queue() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut engine = demo_engine();
    let mut week = WeeklyCounts::new();
    let plan = engine.allocate_daily(date(2026, 3, 2), &mut week);
    assert_eq!(plan.wfh_employees, vec![4, 8]);
    assert_eq!(engine.seat_of(1), Some(101));

    engine.request_leave(1, date(2026, 3, 2));
    let backfills = engine.reallocate(date(2026, 3, 2));

    // Every queued candidate ahead of David already holds a seat (and the
    // absentee is away), so the first WFH employee inherits seat 101.
    assert_eq!(backfills.len(), 1);
    assert_eq!(backfills[0].employee_id, 4);
    assert_eq!(backfills[0].seat_id, 101);

    assert_eq!(engine.seat_of(1), None, "absentee no longer holds a seat");
    assert_eq!(engine.seat_of(4), Some(101));
    assert_eq!(engine.layout().occupant(101), Some(4));
}

#[test]
fn leave_on_another_date_changes_nothing() {
    let mut engine = demo_engine();
    let mut week = WeeklyCounts::new();
    engine.allocate_daily(date(2026, 3, 2), &mut week);

    engine.request_leave(1, date(2026, 3, 4));
    assert!(engine.reallocate(date(2026, 3, 2)).is_empty());
    assert_eq!(engine.seat_of(1), Some(101), "seat must stay put until the leave date");
}

#[test]
fn repeated_requests_keep_only_the_last_date() {
    let mut engine = demo_engine();
    let mut week = WeeklyCounts::new();
    engine.allocate_daily(date(2026, 3, 2), &mut week);

    engine.request_leave(5, date(2026, 3, 2));
    engine.request_leave(5, date(2026, 3, 3));

    // The earlier date was overwritten, so today finds no matching leave.
    assert!(engine.reallocate(date(2026, 3, 2)).is_empty());
    assert_eq!(engine.seat_of(5), Some(201));
}

#[test]
fn leave_for_unseated_employee_is_a_no_op() {
    let mut engine = demo_engine();
    let mut week = WeeklyCounts::new();
    let plan = engine.allocate_daily(date(2026, 3, 2), &mut week);

    // A WFH employee holds no seat, and unknown ids are tolerated outright.
    engine.request_leave(plan.wfh_employees[0], date(2026, 3, 2));
    engine.request_leave(999, date(2026, 3, 2));
    assert!(engine.reallocate(date(2026, 3, 2)).is_empty());
}

#[test]
fn backfill_respects_monthly_quota() {
    // Two managers sharing one seat alternate WFH until both quotas are
    // spent; a leave after that finds no eligible backfill and the seat
    // stays empty.
    let roster = Roster::new(vec![
        Employee::new(1, "Mara", Role::Manager, 0.0),
        Employee::new(2, "Odin", Role::Manager, 5.0),
    ])
    .unwrap();
    let layout = OfficeLayout::new(
        vec![FloorPlan { floor: 1, seats: vec![11] }],
        vec![Seat { id: 11, floor: 1, occupied_by: None }],
    )
    .unwrap();
    let mut engine = SeatingEngine::new(roster, layout);

    let mut week1 = WeeklyCounts::new();
    for day in 2..=6 {
        engine.allocate_daily(date(2026, 3, day), &mut week1);
    }
    let mut week2 = WeeklyCounts::new();
    for day in 9..=11 {
        engine.allocate_daily(date(2026, 3, day), &mut week2);
    }
    assert_eq!(engine.monthly_usage().get(&1), Some(&4));
    assert_eq!(engine.monthly_usage().get(&2), Some(&4));

    // Both at quota: nobody qualifies for WFH, the higher-priority manager
    // gets the seat, the other is dropped from both lists.
    let plan = engine.allocate_daily(date(2026, 3, 12), &mut week2);
    assert!(plan.wfh_employees.is_empty());
    assert_eq!(plan.seat_assignments.len(), 1);
    assert_eq!(plan.seat_assignments[0].employee_id, 2);

    engine.request_leave(2, date(2026, 3, 12));
    let backfills = engine.reallocate(date(2026, 3, 12));

    assert!(backfills.is_empty(), "an over-quota candidate must not be seated");
    assert_eq!(engine.layout().occupant(11), None, "the seat stays empty");
}
