//! # Logger
//!
//! Diagnostic logging for `swa-settings`.
//!
//! Console diagnostics always go to **stderr**: stdout belongs to the settings report, and
//! a failed run must print nothing there but its `❌` line. `RUST_LOG` refines the level
//! given to the builder. An optional directory receives daily-rotated plain-text copies.
//!
//! ## Example
//!
//! ```rust
//! # use swa_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder("swa-settings").level(LevelFilter::DEBUG).init().unwrap();
//! tracing::debug!("visible on stderr only");
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Daily files kept in the log directory; one push per day rarely needs more history.
const KEPT_LOG_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Configures the global tracing subscriber for one run.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    dir: Option<PathBuf>,
}

impl LoggerBuilder {
    /// Minimum level emitted when `RUST_LOG` is unset. Defaults to `WARN`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Also writes logs to `<dir>/<name>.<date>.log`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name.
    /// * [`LoggerError::Internal`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let filter =
            EnvFilter::builder().with_default_directive(self.level.into()).from_env_lossy();
        let stderr = layer().compact().with_writer(std::io::stderr).boxed();

        let (file, guard) = match self.dir {
            Some(dir) => {
                let (writer, guard) = tracing_appender::non_blocking(file_appender(&self.name, dir)?);
                (Some(layer().with_writer(writer).with_ansi(false).boxed()), Some(guard))
            },
            None => (None, None),
        };

        tracing_subscriber::registry().with(filter).with(stderr).with(file).try_init()?;

        Ok(Logger { _guard: guard })
    }
}

fn file_appender(name: &str, dir: PathBuf) -> Result<RollingFileAppender, LoggerError> {
    fs::create_dir_all(&dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create log directory {}", dir.display()).into()),
    })?;

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(KEPT_LOG_FILES)
        .build(dir)?)
}

/// Keeps the file writer alive; buffered lines are flushed when it is dropped.
#[must_use = "Dropping this handle stops file logging."]
#[derive(Debug)]
pub struct Logger {
    _guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes log file names.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder { name: name.into(), level: LevelFilter::WARN, dir: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_warn_without_files() {
        let builder = Logger::builder("swa-settings");
        assert_eq!(builder.level, LevelFilter::WARN);
        assert!(builder.dir.is_none());
    }

    #[test]
    fn builder_records_level_and_dir() {
        let builder = Logger::builder("swa-settings").level(LevelFilter::DEBUG).path("logs");
        assert_eq!(builder.level, LevelFilter::DEBUG);
        assert_eq!(builder.dir.as_deref(), Some(std::path::Path::new("logs")));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Logger::builder("  ").init().expect_err("blank name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
