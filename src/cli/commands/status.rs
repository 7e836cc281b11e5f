use crate::config::Config;
use crate::core::timer::DayTimer;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::storage::{DayStore, JsonFileStore};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_state, colorize_optional};
use crate::utils::date::long_label;
use crate::utils::formatting::bold;
use crate::utils::time::{Clock, format_time, format_time_seconds};

pub fn handle(cfg: &Config, clock: &Clock) -> AppResult<()> {
    let store = JsonFileStore::new(cfg.store_path());
    let days = store.load();
    let now = clock.now();
    let today = now.date_naive();
    let state = DayTimer::state(&days, today);

    header(format!("Aujourd'hui - {}", long_label(&today)));

    let time = if cfg.show_seconds {
        format_time_seconds(&now)
    } else {
        format_time(&now)
    };

    println!("Statut           : {}{}{}", color_for_state(state), state.label(), RESET);
    println!(
        "Temps de travail : {}",
        colorize_optional(&DayTimer::live_duration(&days, now))
    );
    println!("Heure actuelle   : {time}");

    let actions: Vec<String> = state
        .available_actions()
        .iter()
        .map(|a| format!("{} ({})", a.command(), a.caption()))
        .collect();
    if actions.is_empty() {
        println!("Actions          : aucune");
    } else {
        println!("Actions          : {}", actions.join(", "));
    }

    if let Some(day) = days.get(&today) {
        println!("\n{}", bold("Résumé de la journée"));
        for (label, value) in DaySummary::from_work_day(day).lines() {
            println!("  {label:<16} {value}");
        }
    }

    Ok(())
}
