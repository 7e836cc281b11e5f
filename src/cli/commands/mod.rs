pub mod clear;
pub mod config;
pub mod init;
pub mod log;
pub mod report;
pub mod status;
pub mod track;
pub mod watch;
pub mod week;

use crate::cli::parser::WeekArgs;
use crate::core::week::Week;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::Clock;

/// The week selected by `--date`, `--prev` and `--next`.
pub(crate) fn resolve_week(args: &WeekArgs, clock: &Clock) -> AppResult<Week> {
    let base = match &args.date {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => clock.today(),
    };
    Ok(Week::containing(base).shift(i64::from(args.next) - i64::from(args.prev)))
}
