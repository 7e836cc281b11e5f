use crate::core::calculator::duration;
use crate::errors::TransitionError;
use crate::models::day_state::{Action, DayState};
use crate::models::work_day::{LunchBreak, TimeEntry, WorkDay};
use crate::models::work_days::WorkDays;
use crate::utils::formatting::mins2readable;
use chrono::{DateTime, Local, NaiveDate};

/// Day timer logic: the start / lunch / resume / stop cycle of today's record.
///
/// Every action takes the current instant explicitly; "today" is the
/// calendar day of `now`. An action builds a new record from the previous
/// one and swaps it into the collection. A refused action leaves the
/// collection untouched and reports the state it was attempted in.
pub struct DayTimer;

impl DayTimer {
    pub fn state(days: &WorkDays, today: NaiveDate) -> DayState {
        days.get(&today).map_or(DayState::NotStarted, WorkDay::state)
    }

    pub fn start_work_day(
        days: &mut WorkDays,
        now: DateTime<Local>,
    ) -> Result<WorkDay, TransitionError> {
        let day = match Self::check(days, now, Action::StartWork)? {
            Some(existing) => WorkDay {
                work_time: TimeEntry::open(now),
                ..existing
            },
            None => WorkDay::begin(now),
        };
        Ok(Self::commit(days, day, Action::StartWork))
    }

    /// Opens a lunch break. A break already taken earlier that day is
    /// replaced by the new one.
    pub fn start_lunch(
        days: &mut WorkDays,
        now: DateTime<Local>,
    ) -> Result<WorkDay, TransitionError> {
        let current = Self::check_existing(days, now, Action::StartLunch)?;
        let day = WorkDay {
            lunch_break: Some(LunchBreak::open(now)),
            ..current
        };
        Ok(Self::commit(days, day, Action::StartLunch))
    }

    pub fn end_lunch(
        days: &mut WorkDays,
        now: DateTime<Local>,
    ) -> Result<WorkDay, TransitionError> {
        let current = Self::check_existing(days, now, Action::EndLunch)?;
        let lunch = current.lunch_break.as_ref().map(|l| LunchBreak {
            start: l.start,
            end: Some(now),
        });
        let day = WorkDay {
            lunch_break: lunch,
            ..current
        };
        Ok(Self::commit(days, day, Action::EndLunch))
    }

    /// Closes the day and freezes `totalWorkHours`. Refused while the lunch
    /// break is still open.
    pub fn stop_work_day(
        days: &mut WorkDays,
        now: DateTime<Local>,
    ) -> Result<WorkDay, TransitionError> {
        let current = Self::check_existing(days, now, Action::StopWork)?;
        let total = duration::worked_hours(&current, now);
        let day = WorkDay {
            work_time: TimeEntry {
                start: current.work_time.start,
                end: Some(now),
            },
            total_work_hours: total,
            is_complete: true,
            ..current
        };
        Ok(Self::commit(days, day, Action::StopWork))
    }

    /// Elapsed work time of today as `7h05`; `0h00` when nothing is recorded.
    pub fn live_duration(days: &WorkDays, now: DateTime<Local>) -> String {
        match days.get(&now.date_naive()) {
            Some(day) => mins2readable(duration::live_minutes(day, now)),
            None => mins2readable(0),
        }
    }

    fn check(
        days: &WorkDays,
        now: DateTime<Local>,
        action: Action,
    ) -> Result<Option<WorkDay>, TransitionError> {
        let today = now.date_naive();
        let current = days.get(&today);
        let state = current.map_or(DayState::NotStarted, WorkDay::state);

        if !state.allows(action) {
            tracing::debug!(?action, ?state, %today, "transition refused");
            return Err(TransitionError { action, state });
        }

        Ok(current.cloned())
    }

    fn check_existing(
        days: &WorkDays,
        now: DateTime<Local>,
        action: Action,
    ) -> Result<WorkDay, TransitionError> {
        Self::check(days, now, action)?.ok_or(TransitionError {
            action,
            state: DayState::NotStarted,
        })
    }

    fn commit(days: &mut WorkDays, day: WorkDay, action: Action) -> WorkDay {
        tracing::debug!(?action, date = %day.date, state = ?day.state(), "day record replaced");
        days.replace(day.clone());
        day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::local;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        local(2025, 10, 6, h, m).unwrap()
    }

    fn today() -> NaiveDate {
        at(0, 0).date_naive()
    }

    #[test]
    fn full_day_with_lunch() {
        let mut days = WorkDays::new();

        DayTimer::start_work_day(&mut days, at(9, 0)).unwrap();
        assert_eq!(DayTimer::state(&days, today()), DayState::Working);

        DayTimer::start_lunch(&mut days, at(12, 0)).unwrap();
        assert_eq!(DayTimer::state(&days, today()), DayState::OnLunch);

        DayTimer::end_lunch(&mut days, at(13, 0)).unwrap();
        assert_eq!(DayTimer::state(&days, today()), DayState::Working);

        let day = DayTimer::stop_work_day(&mut days, at(17, 30)).unwrap();
        assert!(day.is_complete);
        assert_eq!(day.total_work_hours, 7.5);
        assert_eq!(day.work_time.end, Some(at(17, 30)));
        assert_eq!(DayTimer::state(&days, today()), DayState::Completed);
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn day_without_lunch() {
        let mut days = WorkDays::new();
        DayTimer::start_work_day(&mut days, at(8, 15)).unwrap();
        let day = DayTimer::stop_work_day(&mut days, at(16, 45)).unwrap();
        assert_eq!(day.total_work_hours, 8.5);
        assert!(day.lunch_break.is_none());
    }

    #[test]
    fn lunch_is_refused_before_the_day_starts() {
        let mut days = WorkDays::new();
        let err = DayTimer::start_lunch(&mut days, at(12, 0)).unwrap_err();
        assert_eq!(err.action, Action::StartLunch);
        assert_eq!(err.state, DayState::NotStarted);
        assert!(days.is_empty());
    }

    #[test]
    fn end_lunch_is_refused_unless_on_lunch() {
        let mut days = WorkDays::new();
        DayTimer::start_work_day(&mut days, at(9, 0)).unwrap();
        let before = days.clone();

        let err = DayTimer::end_lunch(&mut days, at(13, 0)).unwrap_err();
        assert_eq!(err.state, DayState::Working);
        assert_eq!(days, before);
    }

    #[test]
    fn second_lunch_is_refused_while_one_is_open() {
        let mut days = WorkDays::new();
        DayTimer::start_work_day(&mut days, at(9, 0)).unwrap();
        DayTimer::start_lunch(&mut days, at(12, 0)).unwrap();

        let err = DayTimer::start_lunch(&mut days, at(12, 10)).unwrap_err();
        assert_eq!(err.state, DayState::OnLunch);
        let lunch = days.get(&today()).unwrap().lunch_break.clone().unwrap();
        assert_eq!(lunch.start, at(12, 0));
    }

    #[test]
    fn a_new_lunch_after_a_closed_one_replaces_it() {
        let mut days = WorkDays::new();
        DayTimer::start_work_day(&mut days, at(9, 0)).unwrap();
        DayTimer::start_lunch(&mut days, at(12, 0)).unwrap();
        DayTimer::end_lunch(&mut days, at(12, 30)).unwrap();
        DayTimer::start_lunch(&mut days, at(15, 0)).unwrap();

        let lunch = days.get(&today()).unwrap().lunch_break.clone().unwrap();
        assert_eq!(lunch.start, at(15, 0));
        assert!(lunch.end.is_none());
    }

    #[test]
    fn stop_is_refused_while_lunch_is_open() {
        let mut days = WorkDays::new();
        DayTimer::start_work_day(&mut days, at(9, 0)).unwrap();
        DayTimer::start_lunch(&mut days, at(12, 0)).unwrap();

        let err = DayTimer::stop_work_day(&mut days, at(17, 0)).unwrap_err();
        assert_eq!(err.state, DayState::OnLunch);
        assert!(!days.get(&today()).unwrap().is_complete);
    }

    #[test]
    fn stop_is_refused_without_a_record() {
        let mut days = WorkDays::new();
        assert!(DayTimer::stop_work_day(&mut days, at(17, 0)).is_err());
        assert!(days.is_empty());
    }

    #[test]
    fn a_completed_day_refuses_everything() {
        let mut days = WorkDays::new();
        DayTimer::start_work_day(&mut days, at(9, 0)).unwrap();
        DayTimer::stop_work_day(&mut days, at(17, 0)).unwrap();
        let before = days.clone();

        assert!(DayTimer::start_work_day(&mut days, at(17, 5)).is_err());
        assert!(DayTimer::start_lunch(&mut days, at(17, 5)).is_err());
        assert!(DayTimer::end_lunch(&mut days, at(17, 5)).is_err());
        assert!(DayTimer::stop_work_day(&mut days, at(17, 5)).is_err());
        assert_eq!(days, before);
    }

    #[test]
    fn records_stay_unique_per_day_across_days() {
        let mut days = WorkDays::new();
        for day in 6..=10 {
            let start = local(2025, 10, day, 9, 0).unwrap();
            let end = local(2025, 10, day, 17, 0).unwrap();
            DayTimer::start_work_day(&mut days, start).unwrap();
            DayTimer::start_lunch(&mut days, start + chrono::Duration::hours(3)).unwrap();
            DayTimer::end_lunch(&mut days, start + chrono::Duration::hours(4)).unwrap();
            DayTimer::stop_work_day(&mut days, end).unwrap();
        }
        assert_eq!(days.len(), 5);
        assert!(days.iter().all(|d| d.total_work_hours == 7.0));
    }

    #[test]
    fn live_duration_follows_the_clock() {
        let mut days = WorkDays::new();
        assert_eq!(DayTimer::live_duration(&days, at(9, 0)), "0h00");

        DayTimer::start_work_day(&mut days, at(9, 0)).unwrap();
        DayTimer::start_lunch(&mut days, at(12, 0)).unwrap();
        assert_eq!(DayTimer::live_duration(&days, at(12, 40)), "3h00");

        DayTimer::end_lunch(&mut days, at(13, 0)).unwrap();
        assert_eq!(DayTimer::live_duration(&days, at(14, 5)), "4h05");
    }
}
