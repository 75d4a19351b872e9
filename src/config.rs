//! Command-line configuration for the catalog server

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Log level options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Pokemon catalog - CRUD, search and pagination over HTTP
#[derive(Debug, Parser)]
#[command(name = "pokemon-catalog")]
#[command(version)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// JSON dataset to seed the catalog from (the bundled one when omitted)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// SQLite file for the pokemons table (kept in memory when omitted)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Config {
    /// The level explicitly requested on the command line, if any.
    /// `--log-level` wins over `--verbose`.
    pub fn requested_level(&self) -> Option<log::LevelFilter> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level.to_level_filter()),
            (None, true) => Some(log::LevelFilter::Debug),
            (None, false) => None,
        }
    }

    /// Route `log` output through env_logger. Without a flag, `RUST_LOG`
    /// decides and defaults to info.
    pub fn init_logging(&self) {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
        if let Some(level) = self.requested_level() {
            builder.filter_level(level);
        }
        builder.init();
    }
}
