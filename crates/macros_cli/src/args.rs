//! Command-line flags. All of them are optional; running with none opens
//! `main.db` in the working directory with file logging off.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default diary file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "main.db";

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Personal macro-nutrient diary.
#[derive(Debug, Parser)]
#[command(name = "macros", version)]
pub struct Cli {
    /// Diary database file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Write rolling log files to this absolute directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level used with --log-dir (defaults to debug in debug builds, info otherwise)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,
}
