use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rPresence
/// CLI time sheet: work day, lunch break and weekly attendance report
#[derive(Parser)]
#[command(
    name = "rpresence",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small time sheet CLI: start and stop the work day, track the lunch break, build the weekly report",
    long_about = None
)]
pub struct Cli {
    /// Override the day store path (useful for tests or a custom file)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Pin the clock to a local date-time (YYYY-MM-DDTHH:MM[:SS])
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug logging
    #[arg(global = true, short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which week a command looks at. Defaults to the current week.
#[derive(Args, Debug, Clone, Default)]
pub struct WeekArgs {
    /// Any day of the wanted week (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Go back N weeks
    #[arg(long, default_value_t = 0)]
    pub prev: u32,

    /// Go forward N weeks
    #[arg(long, default_value_t = 0)]
    pub next: u32,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the day store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start the work day
    Start,

    /// Start the lunch break
    Lunch,

    /// End the lunch break
    Resume,

    /// Stop the work day
    Stop,

    /// Show today's status, worked time and summary
    Status,

    /// Refresh today's status until the day is over
    Watch {
        #[arg(long, help = "Stop after N refreshes")]
        ticks: Option<u64>,
    },

    /// Show the weekly summary table
    Week {
        #[command(flatten)]
        week: WeekArgs,
    },

    /// Print the weekly report text, or write it to a file
    Report {
        #[command(flatten)]
        week: WeekArgs,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete every recorded day
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the activity log
    Log {
        #[arg(long = "print", help = "Print the activity log entries")]
        print: bool,
    },
}
