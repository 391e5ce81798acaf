mod console;
mod grades;
mod hotel;
mod trading;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::application::{BookingService, TradingService};
use crate::storage::DEFAULT_BOOKINGS_FILE;

pub use console::Console;
pub use grades::run_grades;
pub use hotel::run_hotel;
pub use trading::run_trading;

/// Trio - three small console programs
#[derive(Parser)]
#[command(name = "trio")]
#[command(about = "Hotel bookings, a stock portfolio simulator and a grade reporter")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hotel booking tracker
    Hotel {
        /// Bookings file path
        #[arg(short, long, default_value = DEFAULT_BOOKINGS_FILE)]
        bookings: PathBuf,
    },

    /// Stock portfolio simulator
    Trading,

    /// Student grade calculator
    Grades {
        /// Output format for the report
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
}

impl Cli {
    /// Install the stderr logger. `RUST_LOG` takes precedence over `--verbose`.
    pub fn init_logging(&self) {
        let default_level = if self.verbose { "debug" } else { "warn" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .format_timestamp_secs()
            .init();
    }

    pub fn run(self) -> Result<()> {
        let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

        match self.command {
            Commands::Hotel { bookings } => {
                let mut service = BookingService::open(bookings);
                run_hotel(&mut service, &mut console)?;
            }

            Commands::Trading => {
                let mut service = TradingService::default();
                run_trading(&mut service, &mut console)?;
            }

            Commands::Grades { format } => {
                run_grades(&mut console, format)?;
            }
        }

        Ok(())
    }
}
