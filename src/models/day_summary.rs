use super::work_day::WorkDay;
use crate::utils::time::format_time;

/// Printable recap of a single day ("Résumé de la journée").
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DaySummary {
    pub start: String,
    pub end: Option<String>,
    /// `"12:00 - 13:00"`, or `"12:00 - En cours"` while the break is open.
    pub lunch: Option<String>,
    /// Decimal hours, only once the day is complete.
    pub total: Option<String>,
}

impl DaySummary {
    pub fn from_work_day(day: &WorkDay) -> Self {
        let lunch = day.lunch_break.as_ref().map(|l| {
            let end = l.end.map_or_else(|| "En cours".to_string(), |e| format_time(&e));
            format!("{} - {}", format_time(&l.start), end)
        });

        Self {
            start: format_time(&day.work_time.start),
            end: day.work_time.end.as_ref().map(format_time),
            lunch,
            total: day
                .is_complete
                .then(|| format!("{}h", day.total_work_hours)),
        }
    }

    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![("Début:", self.start.clone())];
        if let Some(end) = &self.end {
            out.push(("Fin:", end.clone()));
        }
        if let Some(lunch) = &self.lunch {
            out.push(("Pause déjeuner:", lunch.clone()));
        }
        if let Some(total) = &self.total {
            out.push(("Total:", total.clone()));
        }
        out
    }
}
