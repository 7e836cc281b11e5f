use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(print: bool, cfg: &Config) -> AppResult<()> {
    if print {
        LogLogic::print_log(cfg)?;
    }
    Ok(())
}
