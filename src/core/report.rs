//! Weekly aggregation and the plain-text attendance report.

use crate::core::week::Week;
use crate::models::work_day::WorkDay;
use crate::models::work_days::WorkDays;
use crate::utils::date::{day_name, long_label};
use crate::utils::formatting::{hours2readable, mins2readable};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;
use chrono::{Datelike, NaiveDate};

pub const REPORT_HEADER: &str = "Ma feuille de présence de la semaine :";

/// One weekday of the week and the record found for it, if any.
#[derive(Debug, Clone)]
pub struct WeekEntry<'a> {
    pub date: NaiveDate,
    pub work_day: Option<&'a WorkDay>,
}

impl WeekEntry<'_> {
    /// The record, only once the day has been closed.
    pub fn completed(&self) -> Option<&WorkDay> {
        self.work_day.filter(|d| d.is_complete)
    }
}

/// Monday to Friday of a week joined to the recorded days.
#[derive(Debug, Clone)]
pub struct WeeklyReport<'a> {
    pub week: Week,
    pub entries: Vec<WeekEntry<'a>>,
    pub total_hours: f64,
}

impl<'a> WeeklyReport<'a> {
    /// Weekend records never show up here, not even in the total.
    pub fn build(days: &'a WorkDays, week: Week) -> Self {
        let entries: Vec<WeekEntry<'a>> = week
            .work_days()
            .into_iter()
            .map(|date| WeekEntry {
                date,
                work_day: days.get(&date),
            })
            .collect();

        let total_hours = entries
            .iter()
            .filter_map(|e| e.completed())
            .map(|d| d.total_work_hours)
            .sum::<f64>();

        Self {
            week,
            entries,
            total_hours,
        }
    }

    /// Leave tracking does not exist yet.
    pub fn total_vacation_hours(&self) -> f64 {
        0.0
    }

    /// The text meant to be pasted into an email.
    pub fn email_text(&self) -> String {
        let mut text = format!("{REPORT_HEADER}\n\n");

        for entry in &self.entries {
            text.push_str(&day_line(entry));
            text.push('\n');
        }

        text.push_str(&format!(
            "\nTOTAL DURÉE DE TRAVAIL HEBDOMADAIRE : {}\n",
            hours2readable(self.total_hours)
        ));
        let vacation_minutes = (self.total_vacation_hours() * 60.0).round() as i64;
        text.push_str(&format!(
            "TOTAL CONGÉS HEBDOMADAIRE : {}",
            mins2readable(vacation_minutes)
        ));
        text
    }

    /// Per-day table shown by `week`.
    pub fn summary_table(&self) -> String {
        let mut table = Table::new(vec![
            Column::new("Jour", 12),
            Column::new("Début", 6),
            Column::new("Fin", 6),
            Column::new("Pause", 14),
            Column::new("Total", 8),
        ]);

        for entry in &self.entries {
            let label = format!("{} {}", day_name(&entry.date), entry.date.day());
            match entry.completed() {
                Some(day) => {
                    let pause = day
                        .closed_lunch()
                        .map(|(s, e)| format!("{} - {}", format_time(&s), format_time(&e)))
                        .unwrap_or_default();
                    table.add_row(vec![
                        label,
                        format_time(&day.work_time.start),
                        day.work_time
                            .end
                            .map_or_else(|| "N/A".to_string(), |e| format_time(&e)),
                        pause,
                        format!("{}h", day.total_work_hours),
                    ]);
                }
                None => table.add_row(vec![
                    label,
                    "Pas de données".to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                ]),
            }
        }

        let mut out = table.render();
        out.push_str(&format!("\nTotal hebdomadaire: {}h\n", self.total_hours));
        out
    }
}

fn day_line(entry: &WeekEntry<'_>) -> String {
    let label = long_label(&entry.date);

    let Some(day) = entry.completed() else {
        return format!("{label} - Jour non travaillé.");
    };

    let start = format_time(&day.work_time.start);
    let end = day.work_time.end.as_ref().map(format_time).unwrap_or_default();
    let lunch = day
        .closed_lunch()
        .map(|(s, e)| {
            format!(
                "Pause déjeuner entre {} et {}.",
                format_time(&s),
                format_time(&e)
            )
        })
        .unwrap_or_default();

    format!(
        "{label} - Durée de ma journée de travail : {start} à {end}. {lunch} Temps de travail journalier : {}.",
        hours2readable(day.total_work_hours)
    )
}
