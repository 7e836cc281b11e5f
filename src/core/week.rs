use crate::utils::date::{is_weekend, month_name};
use chrono::{Datelike, Duration, NaiveDate};

/// A calendar week, anchored on its Monday.
///
/// Navigation moves the anchor by whole weeks, so every reference date of a
/// week resolves to the same window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    monday: NaiveDate,
}

impl Week {
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday() as i64;
        Self {
            monday: date - Duration::days(offset),
        }
    }

    pub fn previous(self) -> Self {
        self.shift(-1)
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn shift(self, weeks: i64) -> Self {
        Self {
            monday: self.monday + Duration::days(7 * weeks),
        }
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn sunday(&self) -> NaiveDate {
        self.monday + Duration::days(6)
    }

    /// The seven dates, Monday first.
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..7).map(|i| self.monday + Duration::days(i)).collect()
    }

    /// Monday to Friday.
    pub fn work_days(&self) -> Vec<NaiveDate> {
        self.days().into_iter().filter(|d| !is_weekend(d)).collect()
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        *date >= self.monday && *date <= self.sunday()
    }

    /// `Semaine du 6 octobre au 12 octobre 2025`
    pub fn title(&self) -> String {
        let first = self.monday;
        let last = self.sunday();
        format!(
            "Semaine du {} {} au {} {} {}",
            first.day(),
            month_name(&first),
            last.day(),
            month_name(&last),
            first.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn every_day_of_a_week_maps_to_its_monday() {
        for day in 6..=12 {
            assert_eq!(Week::containing(d(2025, 10, day)).monday(), d(2025, 10, 6));
        }
        assert_eq!(Week::containing(d(2025, 10, 13)).monday(), d(2025, 10, 13));
    }

    #[test]
    fn work_days_are_monday_to_friday() {
        let days = Week::containing(d(2025, 10, 8)).work_days();
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[4], d(2025, 10, 10));
    }

    #[test]
    fn navigation_moves_by_seven_days_from_the_anchor() {
        let week = Week::containing(d(2025, 10, 12));
        assert_eq!(week.previous().monday(), d(2025, 9, 29));
        assert_eq!(week.next().monday(), d(2025, 10, 13));
        assert_eq!(week.shift(-2).next().next(), week);
    }

    #[test]
    fn title_spans_month_and_year_boundaries() {
        assert_eq!(
            Week::containing(d(2025, 10, 1)).title(),
            "Semaine du 29 septembre au 5 octobre 2025"
        );
        let week = Week::containing(d(2025, 12, 31));
        assert!(week.contains(&d(2026, 1, 4)));
        assert_eq!(week.title(), "Semaine du 29 décembre au 4 janvier 2025");
    }
}
