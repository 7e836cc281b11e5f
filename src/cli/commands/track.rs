use crate::config::Config;
use crate::core::timer::DayTimer;
use crate::errors::AppResult;
use crate::models::day_state::Action;
use crate::models::work_day::WorkDay;
use crate::storage::{DayStore, JsonFileStore, activity_log};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::hours2readable;
use crate::utils::time::{Clock, format_time};
use chrono::{DateTime, Local};

/// Handle `start`, `lunch`, `resume` and `stop`.
///
/// A refused action is reported as a warning and does not fail the command.
pub fn handle(action: Action, cfg: &Config, clock: &Clock) -> AppResult<()> {
    let store = JsonFileStore::new(cfg.store_path());
    let mut days = store.load();
    let now = clock.now();

    let outcome = match action {
        Action::StartWork => DayTimer::start_work_day(&mut days, now),
        Action::StartLunch => DayTimer::start_lunch(&mut days, now),
        Action::EndLunch => DayTimer::end_lunch(&mut days, now),
        Action::StopWork => DayTimer::stop_work_day(&mut days, now),
    };

    match outcome {
        Ok(day) => {
            store.save(&days);
            let msg = confirmation(action, &day, now);
            activity_log::record_quietly(&cfg.activity_log_path(), action.command(), &day.id, &msg);
            success(msg);
        }
        Err(refused) => {
            tracing::info!(%refused, "action ignored");
            warning(format!(
                "Action « {} » indisponible : {}.",
                action.caption(),
                refused.state.label()
            ));
        }
    }

    Ok(())
}

fn confirmation(action: Action, day: &WorkDay, now: DateTime<Local>) -> String {
    let at = format_time(&now);
    match action {
        Action::StartWork => format!("Journée démarrée à {at}."),
        Action::StartLunch => format!("Pause déjeuner commencée à {at}."),
        Action::EndLunch => format!("Pause déjeuner terminée à {at}."),
        Action::StopWork => format!(
            "Journée terminée à {at} : {}h travaillées ({}).",
            day.total_work_hours,
            hours2readable(day.total_work_hours)
        ),
    }
}
