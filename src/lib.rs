//! rPresence library root.
//! Exposes the CLI parser, the high-level run() function, the day timer and
//! the weekly report.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::day_state::Action;
use tracing_subscriber::EnvFilter;
use utils::time::Clock;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Start => cli::commands::track::handle(Action::StartWork, cfg, clock),
        Commands::Lunch => cli::commands::track::handle(Action::StartLunch, cfg, clock),
        Commands::Resume => cli::commands::track::handle(Action::EndLunch, cfg, clock),
        Commands::Stop => cli::commands::track::handle(Action::StopWork, cfg, clock),
        Commands::Status => cli::commands::status::handle(cfg, clock),
        Commands::Watch { ticks } => cli::commands::watch::handle(*ticks, cfg, clock),
        Commands::Week { week } => cli::commands::week::handle(week, cfg, clock),
        Commands::Report { week, file, force } => {
            cli::commands::report::handle(week, file.as_deref(), *force, cfg, clock)
        }
        Commands::Clear { yes } => cli::commands::clear::handle(*yes, cfg),
        Commands::Log { print } => cli::commands::log::handle(*print, cfg),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // try_init: tests may initialize more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line store override
    if let Some(custom) = &cli.store {
        cfg.override_store(custom);
    }
    tracing::debug!(?cfg, "configuration loaded");

    // 4️⃣ the clock every command reads "now" from
    let clock = Clock::from_arg(cli.now.as_deref())?;

    dispatch(&cli, &cfg, &clock)
}
