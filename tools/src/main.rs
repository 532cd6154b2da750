//! desk-runner: headless office seating simulation.
//!
//! Usage:
//!   desk-runner --weeks 4 --start 2026-03-02
//!   desk-runner --config office.json --json

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use deskplan_core::{
    calendar::{next_week_start, workweek},
    config::OfficeConfig,
    engine::SeatingEngine,
    quota::WeeklyCounts,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let weeks = parse_arg(&args, "--weeks", 4u64);
    let json_mode = args.iter().any(|a| a == "--json");
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].clone());
    let start: NaiveDate = args
        .windows(2)
        .find(|w| w[0] == "--start")
        .and_then(|w| w[1].parse().ok())
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let office = match &config_path {
        Some(path) => OfficeConfig::load(path)?,
        None => OfficeConfig::demo(),
    };

    if !json_mode {
        println!("desk-runner");
        println!("  start:     {start}");
        println!("  weeks:     {weeks}");
        println!("  config:    {}", config_path.as_deref().unwrap_or("(built-in demo office)"));
        println!("  roster:    {} employees", office.roster.len());
        println!("  seats:     {}", office.layout.total_seats());
    }

    let mut engine = SeatingEngine::new(office.roster, office.layout);

    let mut current = start;
    for week in 0..weeks {
        let week_start = next_week_start(current);
        log::debug!("runner: week {} starts {week_start}", week + 1);
        if !json_mode {
            println!("\n=== Week {} (starting {week_start}) ===", week + 1);
        }

        // Weekly counters are reset here, at the week boundary; the engine
        // only ever sees them through the daily calls.
        let mut week_counts = WeeklyCounts::new();

        for day in workweek(week_start) {
            let plan = engine.allocate_daily(day, &mut week_counts);

            if json_mode {
                println!("{}", serde_json::to_string(&plan)?);
                continue;
            }

            println!("\n--- {} ({day}) ---", day.format("%A"));
            println!("Seating by floor:");
            for floor in &plan.seating_by_floor {
                println!("  Floor {}:", floor.floor);
                for assignment in &floor.assignments {
                    println!(
                        "    {} ({}): seat {}",
                        assignment.employee,
                        assignment.role.label(),
                        assignment.seat
                    );
                }
            }
            let wfh_names: Vec<&str> = plan
                .wfh_employees
                .iter()
                .filter_map(|id| engine.roster().get(*id).map(|e| e.name.as_str()))
                .collect();
            if wfh_names.is_empty() {
                println!("WFH: none");
            } else {
                println!("WFH: {}", wfh_names.join(", "));
            }
        }

        if !json_mode {
            print_week_summary(&engine, &week_counts);
        }

        current = week_start + Duration::days(7);
    }

    Ok(())
}

fn print_week_summary(engine: &SeatingEngine, week_counts: &WeeklyCounts) {
    println!("\nWeek summary, WFH days:");
    for (id, count) in week_counts {
        if let Some(employee) = engine.roster().get(*id) {
            println!("  {} ({}): {count}", employee.name, employee.role.label());
        }
    }

    println!("\nMonth-to-date WFH usage:");
    for (id, used) in engine.monthly_usage() {
        if let Some(employee) = engine.roster().get(id) {
            let limit = employee.role.monthly_wfh_limit();
            println!(
                "  {} ({}): {used}/{limit} used, {} remaining",
                employee.name,
                employee.role.label(),
                limit.saturating_sub(used)
            );
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
