use crate::config::Config;
use crate::core::timer::DayTimer;
use crate::errors::AppResult;
use crate::models::day_state::DayState;
use crate::storage::{DayStore, JsonFileStore};
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_state};
use crate::utils::time::{Clock, format_time, format_time_seconds};
use std::thread;
use std::time::Duration;

/// Print today's status every `refresh_interval_secs` until the day is
/// complete or `ticks` refreshes were shown. The store is re-read on every
/// refresh so actions taken from another terminal show up.
pub fn handle(ticks: Option<u64>, cfg: &Config, clock: &Clock) -> AppResult<()> {
    let store = JsonFileStore::new(cfg.store_path());
    let interval = Duration::from_secs(cfg.refresh_interval_secs.max(1));
    let mut shown = 0u64;

    loop {
        let days = store.load();
        let now = clock.now();
        let state = DayTimer::state(&days, now.date_naive());
        let time = if cfg.show_seconds {
            format_time_seconds(&now)
        } else {
            format_time(&now)
        };

        println!(
            "{time} | {}{}{} | {}",
            color_for_state(state),
            state.label(),
            RESET,
            DayTimer::live_duration(&days, now)
        );
        shown += 1;

        if state == DayState::Completed {
            info("Journée terminée, arrêt du suivi.");
            break;
        }
        if ticks.is_some_and(|t| shown >= t) {
            break;
        }

        thread::sleep(interval);
    }

    Ok(())
}
