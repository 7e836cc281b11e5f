//! Worked-time arithmetic for a single day.

use crate::models::work_day::WorkDay;
use chrono::{DateTime, Local};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Round to two decimals, the precision kept for `totalWorkHours`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn hours_between(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    (end - start).num_milliseconds() as f64 / MS_PER_HOUR
}

/// Hours worked if the day ended at `end`: work span minus a closed lunch.
/// An open lunch subtracts nothing.
pub fn worked_hours(day: &WorkDay, end: DateTime<Local>) -> f64 {
    let mut hours = hours_between(day.work_time.start, end);
    if let Some((lunch_start, lunch_end)) = day.closed_lunch() {
        hours -= hours_between(lunch_start, lunch_end);
    }
    round2(hours)
}

/// Whole minutes worked so far, for the live display.
///
/// The span runs to the recorded end or to `now`; an open lunch counts up
/// to `now`. Never negative.
pub fn live_minutes(day: &WorkDay, now: DateTime<Local>) -> i64 {
    let end = day.work_time.end.unwrap_or(now);
    let mut ms = (end - day.work_time.start).num_milliseconds();

    if let Some(lunch) = &day.lunch_break {
        let lunch_end = lunch.end.unwrap_or(now);
        ms -= (lunch_end - lunch.start).num_milliseconds();
    }

    (ms / 60_000).max(0)
}
