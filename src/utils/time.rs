//! Time utilities: building local timestamps, parsing `--now`, formatting HH:MM,
//! and the clock handed to the day engine.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Local timestamp for a wall-clock date and time (earliest on DST overlap).
pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<DateTime<Local>> {
    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
    from_naive(naive)
}

pub fn from_naive(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}

/// `HH:MM`, as shown in reports and summaries.
pub fn format_time(t: &DateTime<Local>) -> String {
    t.format("%H:%M").to_string()
}

pub fn format_time_seconds(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}

const NOW_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse a local date-time such as `2025-10-06T09:00`.
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Local>> {
    NOW_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(from_naive)
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Source of "now" for the commands: the system clock, or a fixed instant
/// given with `--now`.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    pinned: Option<DateTime<Local>>,
}

impl Clock {
    pub fn system() -> Self {
        Self { pinned: None }
    }

    pub fn pinned(at: DateTime<Local>) -> Self {
        Self { pinned: Some(at) }
    }

    pub fn from_arg(arg: Option<&str>) -> AppResult<Self> {
        match arg {
            Some(s) => Ok(Self::pinned(parse_local_datetime(s)?)),
            None => Ok(Self::system()),
        }
    }

    pub fn now(&self) -> DateTime<Local> {
        self.pinned.unwrap_or_else(Local::now)
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_the_accepted_now_formats() {
        for s in ["2025-10-06T09:05:00", "2025-10-06T09:05", "2025-10-06 09:05"] {
            let t = parse_local_datetime(s).unwrap();
            assert_eq!(format_time(&t), "09:05");
            assert_eq!(t.date_naive(), NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_local_datetime("tomorrow"),
            Err(AppError::InvalidTime(_))
        ));
    }

    #[test]
    fn pinned_clock_does_not_move() {
        let at = local(2025, 10, 6, 9, 0).unwrap();
        let clock = Clock::from_arg(Some("2025-10-06T09:00")).unwrap();
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now().hour(), 9);
        assert_eq!(clock.today(), at.date_naive());
    }
}
