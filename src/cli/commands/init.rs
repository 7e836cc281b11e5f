use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::activity_log;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty day store
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.clone(), cli.test)?;

    println!("⚙️  Initializing rPresence…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Store       : {}", cfg.store_path().display());

    activity_log::record_quietly(
        &cfg.activity_log_path(),
        "init",
        &cfg.store,
        &format!("Store initialized at {}", cfg.store_path().display()),
    );

    println!("🎉 rPresence initialization completed!");
    Ok(())
}
