pub mod day_state;
pub mod day_summary;
pub mod work_day;
pub mod work_days;
