use super::work_day::WorkDay;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All recorded days, keyed by calendar date.
///
/// Keying by date keeps at most one record per day; iteration runs in
/// date order. On the wire this is a plain JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<WorkDay>", into = "Vec<WorkDay>")]
pub struct WorkDays {
    days: BTreeMap<NaiveDate, WorkDay>,
}

impl WorkDays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&WorkDay> {
        self.days.get(date)
    }

    /// Store `day` under its date, replacing any record for that date.
    pub fn replace(&mut self, day: WorkDay) -> Option<WorkDay> {
        self.days.insert(day.date, day)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkDay> {
        self.days.values()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Later records win when the same date appears twice.
impl From<Vec<WorkDay>> for WorkDays {
    fn from(list: Vec<WorkDay>) -> Self {
        let mut out = WorkDays::new();
        for day in list {
            out.replace(day);
        }
        out
    }
}

impl From<WorkDays> for Vec<WorkDay> {
    fn from(days: WorkDays) -> Self {
        days.days.into_values().collect()
    }
}
