use super::resolve_week;
use crate::cli::parser::WeekArgs;
use crate::config::Config;
use crate::core::report::WeeklyReport;
use crate::errors::AppResult;
use crate::export::write_report;
use crate::storage::{DayStore, JsonFileStore, activity_log};
use crate::ui::messages::success;
use crate::utils::time::Clock;
use std::path::Path;

pub fn handle(
    args: &WeekArgs,
    file: Option<&str>,
    force: bool,
    cfg: &Config,
    clock: &Clock,
) -> AppResult<()> {
    let week = resolve_week(args, clock)?;
    let days = JsonFileStore::new(cfg.store_path()).load();
    let text = WeeklyReport::build(&days, week).email_text();

    match file {
        Some(f) => {
            let path = Path::new(f);
            write_report(path, &text, force)?;
            let msg = format!("Rapport de la {} écrit dans {}", week.title().to_lowercase(), path.display());
            activity_log::record_quietly(&cfg.activity_log_path(), "report", f, &msg);
            success(msg);
        }
        None => println!("{text}"),
    }

    Ok(())
}
