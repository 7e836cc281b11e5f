use super::day_state::DayState;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A start/end pair. `end` stays empty while the interval is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub start: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Local>>,
}

pub type LunchBreak = TimeEntry;

/// One calendar day of work.
///
/// Stored as camelCase JSON (`workTime`, `lunchBreak`, `totalWorkHours`,
/// `isComplete`) with RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDay {
    pub id: String,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub work_time: TimeEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_break: Option<LunchBreak>,
    #[serde(default)]
    pub total_work_hours: f64,
    #[serde(default)]
    pub is_complete: bool,
}

impl TimeEntry {
    pub fn open(start: DateTime<Local>) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

impl WorkDay {
    /// Fresh record for the day of `start`.
    pub fn begin(start: DateTime<Local>) -> Self {
        let date = start.date_naive();
        Self {
            id: Self::id_for(&date),
            date,
            work_time: TimeEntry::open(start),
            lunch_break: None,
            total_work_hours: 0.0,
            is_complete: false,
        }
    }

    pub fn id_for(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    pub fn is_lunch_open(&self) -> bool {
        self.lunch_break.as_ref().is_some_and(TimeEntry::is_open)
    }

    /// Lunch break with both ends recorded.
    pub fn closed_lunch(&self) -> Option<(DateTime<Local>, DateTime<Local>)> {
        self.lunch_break
            .as_ref()
            .and_then(|l| l.end.map(|end| (l.start, end)))
    }

    pub fn state(&self) -> DayState {
        if self.is_complete {
            DayState::Completed
        } else if self.is_lunch_open() {
            DayState::OnLunch
        } else if self.work_time.is_open() {
            DayState::Working
        } else {
            DayState::NotStarted
        }
    }
}

/// Serializes the day as `YYYY-MM-DD`; also reads full ISO-8601 timestamps
/// (older data stored the day as the instant it was created).
mod calendar_date {
    use chrono::{DateTime, Local, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Local).date_naive())
            .map_err(|_| D::Error::custom(format!("invalid day '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::local;

    #[test]
    fn id_is_derived_from_the_calendar_day() {
        let day = WorkDay::begin(local(2025, 10, 6, 9, 0).unwrap());
        assert_eq!(day.id, "2025-10-06");
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
        assert_eq!(day.state(), DayState::Working);
    }

    #[test]
    fn serialized_form_uses_camel_case_and_omits_open_ends() {
        let day = WorkDay::begin(local(2025, 10, 6, 9, 0).unwrap());
        let json = serde_json::to_value(&day).unwrap();

        assert_eq!(json["date"], "2025-10-06");
        assert_eq!(json["isComplete"], false);
        assert!(json["workTime"]["start"].is_string());
        assert!(json["workTime"].get("end").is_none());
        assert!(json.get("lunchBreak").is_none());
    }

    #[test]
    fn reload_keeps_timestamps_and_flags() {
        let mut day = WorkDay::begin(local(2025, 10, 6, 9, 0).unwrap());
        day.lunch_break = Some(LunchBreak {
            start: local(2025, 10, 6, 12, 0).unwrap(),
            end: Some(local(2025, 10, 6, 13, 0).unwrap()),
        });
        day.work_time.end = Some(local(2025, 10, 6, 17, 30).unwrap());
        day.total_work_hours = 7.5;
        day.is_complete = true;

        let json = serde_json::to_string(&day).unwrap();
        let back: WorkDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
    }

    #[test]
    fn accepts_a_full_timestamp_as_day() {
        let json = r#"{
            "id": "2025-9-6",
            "date": "2025-10-06T12:00:00Z",
            "workTime": { "start": "2025-10-06T09:00:00+02:00" },
            "totalWorkHours": 0,
            "isComplete": false
        }"#;
        let day: WorkDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
    }
}
