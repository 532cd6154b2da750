use chrono::NaiveDate;
use deskplan_core::config::OfficeConfig;
use deskplan_core::engine::SeatingEngine;
use deskplan_core::layout::{FloorPlan, OfficeLayout, Seat};
use deskplan_core::queue::EligibilityQueue;
use deskplan_core::quota::WeeklyCounts;
use deskplan_core::roster::{Employee, Role, Roster};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn rotate_moves_selected_to_back_in_selection_order() {
    let mut queue = EligibilityQueue::new();
    queue.replace(vec![4, 8, 7, 9, 3]);

    queue.rotate_to_back(&[4, 8]);
    assert_eq!(queue.snapshot(), vec![7, 9, 3, 4, 8]);

    // Rotating ids that are not queued still appends them.
    queue.rotate_to_back(&[99]);
    assert_eq!(queue.snapshot(), vec![7, 9, 3, 4, 8, 99]);
}

#[test]
fn pop_consumes_from_the_front() {
    let mut queue = EligibilityQueue::new();
    queue.replace(vec![2, 5, 1]);
    assert_eq!(queue.pop_next(), Some(2));
    assert_eq!(queue.pop_next(), Some(5));
    assert_eq!(queue.len(), 1);
    queue.replace(vec![7]);
    assert_eq!(queue.snapshot(), vec![7]);
}

#[test]
fn todays_wfh_sink_behind_unselected_peers() {
    let _ = env_logger::builder().is_test(true).try_init();

    let office = OfficeConfig::demo();
    let mut engine = SeatingEngine::new(office.roster, office.layout);
    let mut week = WeeklyCounts::new();

    let plan = engine.allocate_daily(date(2026, 3, 2), &mut week);
    assert_eq!(plan.wfh_employees, vec![4, 8], "two weakest claims go home first");

    // The live queue now leads with the unselected candidates in ascending
    // priority order; today's WFH pair sits at the very back.
    assert_eq!(engine.queue_order(), vec![7, 9, 3, 10, 2, 5, 6, 1, 4, 8]);

    // Which is exactly why tomorrow prefers different people.
    let next = engine.allocate_daily(date(2026, 3, 3), &mut week);
    assert_eq!(next.wfh_employees, vec![7, 9]);
}

#[test]
fn at_limit_employee_is_skipped_not_selected() {
    // One seat between a manager and a junior: they alternate WFH days
    // until the manager's four-day monthly quota runs dry.
    let roster = Roster::new(vec![
        Employee::new(1, "Mara", Role::Manager, 0.0),
        Employee::new(2, "Juno", Role::Junior, 0.0),
    ])
    .unwrap();
    let layout = OfficeLayout::new(
        vec![FloorPlan { floor: 1, seats: vec![11] }],
        vec![Seat { id: 11, floor: 1, occupied_by: None }],
    )
    .unwrap();
    let mut engine = SeatingEngine::new(roster, layout);

    let mut expected = Vec::new();
    let mut week = WeeklyCounts::new();
    for day in 2..=6 {
        let plan = engine.allocate_daily(date(2026, 3, day), &mut week);
        expected.push(plan.wfh_employees);
    }
    let mut week2 = WeeklyCounts::new();
    for day in 9..=12 {
        let plan = engine.allocate_daily(date(2026, 3, day), &mut week2);
        expected.push(plan.wfh_employees);
    }
    // Strict alternation, junior first (weaker claim).
    assert_eq!(
        expected,
        vec![
            vec![2], vec![1], vec![2], vec![1], vec![2],
            vec![1], vec![2], vec![1], vec![2],
        ]
    );

    // The manager took Mar 3, 5, 9, and 11: the full monthly quota. The
    // next pop must skip them despite their queue position.
    assert_eq!(engine.monthly_usage().get(&1), Some(&4));
    let plan = engine.allocate_daily(date(2026, 3, 13), &mut week2);
    assert_eq!(plan.wfh_employees, vec![2], "manager at quota must be passed over");
    assert_eq!(engine.monthly_usage().get(&1), Some(&4), "skip must not touch the counter");
    assert!(
        engine.queue_order().contains(&1),
        "skipped entry keeps its fairness position"
    );
}
