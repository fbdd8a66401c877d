//! Collect all functions and structs that are used to parse the command line arguments.
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[clap(
    version,
    about = "Save a tree view of a directory, excluding node_modules and hidden files/folders, to file.txt"
)]
/// Arguments to the application.
pub struct Options {
    #[clap(default_value = ".", value_parser)]
    /// Directory to scan
    pub path: PathBuf,

    #[clap(value_enum, long, default_value_t = LogLevel::Warn)]
    /// Verbosity of the diagnostic output on stderr
    pub log_level: LogLevel,
}

/// Used to encode how much diagnostic output should be printed.
#[derive(clap::ValueEnum, Clone, Debug, Default, Eq, PartialEq)]
pub enum LogLevel {
    /// Every directory that is visited
    Debug,
    /// Progress messages
    Info,
    /// Only problems
    #[default]
    Warn,
    /// Only failures
    Error,
    /// No diagnostic output at all
    Silent,
}

impl LogLevel {
    /// Map onto the `tracing` level, `None` disables logging completely.
    pub fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}
