use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{DayStore, JsonFileStore, activity_log};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirmer [o/N] : ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "o" | "oui" | "y" | "yes")
    } else {
        false
    }
}

pub fn handle(yes: bool, cfg: &Config) -> AppResult<()> {
    if !yes && !ask_confirmation("Supprimer TOUTES les journées enregistrées ? Action irréversible.") {
        info("Opération annulée.");
        return Ok(());
    }

    let store = JsonFileStore::new(cfg.store_path());
    store.clear();

    let msg = "Toutes les journées ont été supprimées.";
    activity_log::record_quietly(&cfg.activity_log_path(), "clear", &cfg.store, msg);
    success(msg);
    Ok(())
}
