//! `occurkit_log` v1:
//! Process-wide tracing setup shared by the occurkit binaries.
use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when the requested directive does not parse.
pub const C_LOG_LEVEL_DEFAULT: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitTracingError {
    /// The log file could not be opened for appending.
    OpenLogFile { path: PathBuf, message: String },
    /// A global subscriber is already installed.
    AlreadyInitialized(String),
}

impl fmt::Display for InitTracingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenLogFile { path, message } => {
                write!(f, "failed to open log file {}: {message}", path.display())
            }
            Self::AlreadyInitialized(message) => {
                write!(f, "tracing already initialized: {message}")
            }
        }
    }
}

impl std::error::Error for InitTracingError {}

/// Parse `log_level` as an `EnvFilter` directive, falling back to `info`.
pub fn derive_env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(C_LOG_LEVEL_DEFAULT))
}

/// Install the global subscriber.
///
/// With `log_file` set, events are appended to that file without ANSI colors;
/// otherwise they go to stdout.
pub fn init_tracing(log_level: &str, log_file: Option<&Path>) -> Result<(), InitTracingError> {
    let filter = derive_env_filter(log_level);

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| InitTracingError::OpenLogFile {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init(),
    };
    result.map_err(|err| InitTracingError::AlreadyInitialized(err.to_string()))
}
