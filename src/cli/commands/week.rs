use super::resolve_week;
use crate::cli::parser::WeekArgs;
use crate::config::Config;
use crate::core::report::WeeklyReport;
use crate::errors::AppResult;
use crate::storage::{DayStore, JsonFileStore};
use crate::ui::messages::header;
use crate::utils::time::Clock;

pub fn handle(args: &WeekArgs, cfg: &Config, clock: &Clock) -> AppResult<()> {
    let week = resolve_week(args, clock)?;
    let days = JsonFileStore::new(cfg.store_path()).load();
    let report = WeeklyReport::build(&days, week);

    header(week.title());
    if week.contains(&clock.today()) {
        println!("(semaine actuelle)\n");
    }
    print!("{}", report.summary_table());

    Ok(())
}
