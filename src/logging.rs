//! Structured logging setup for the splitrs CLI.
//!
//! `RUST_LOG` wins when set; otherwise the CLI verbosity flag picks the
//! filter level.

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Result, SplitError};

/// Log level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Map `-v` repetition count to a level: default warn, `-v` info,
    /// `-vv` debug, `-vvv` and beyond trace.
    pub fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(verbose: u8) -> Result<()> {
    let level = LogLevel::from_verbosity(verbose);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string().to_lowercase()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| SplitError::Validation(format!("failed to install logger: {err}")))
}
