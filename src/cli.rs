//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hablame", version, about = "Fecha, clima y estación en español")]
pub struct Cli {
    /// Config file (default: <config dir>/hablame/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Read each sentence aloud
    #[arg(long, global = true)]
    pub escuchar: bool,

    /// Print sentences as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Latitude for the weather, overriding the config
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude for the weather, overriding the config
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Everything: today, the weather, a selected date and its season (default)
    Tablero {
        /// Selected date, YYYY-MM-DD (default: today)
        #[arg(long)]
        fecha: Option<NaiveDate>,
    },
    /// Today's date
    Hoy,
    /// A selected date and its season
    Fecha {
        /// YYYY-MM-DD
        fecha: NaiveDate,
    },
    /// The current temperature
    Clima,
    /// The season of a date (default: today)
    Estacion {
        /// YYYY-MM-DD
        fecha: Option<NaiveDate>,
    },
    /// Spell a number
    Numero {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}

impl Cli {
    /// Log filter when RUST_LOG is unset: `debug` with `-v`, else `error`.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "error"
        }
    }

    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Tablero { fecha: None })
    }
}
