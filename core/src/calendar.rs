//! Calendar bookkeeping: month boundaries and workweek iteration.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, compared as (year, month) so that two Januaries a year
/// apart still register as a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year:  i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// The Monday strictly after `date`. Simulation weeks start on the next
/// Monday even when `date` is itself a Monday.
pub fn next_week_start(date: NaiveDate) -> NaiveDate {
    let days_ahead = 7 - i64::from(date.weekday().num_days_from_monday());
    date + Duration::days(days_ahead)
}

/// Monday through Friday of the week starting at `week_start`.
pub fn workweek(week_start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..5).map(move |offset| week_start + Duration::days(offset))
}
