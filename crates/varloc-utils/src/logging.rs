//! # Logging Utilities
//!
//! Logging infrastructure for Varloc using `tracing`.
//!
//! A host embedding the resolution engine calls one of the `init_*`
//! functions once at startup; resolution diagnostics (debug for expected
//! misses, warn for transport failures) then flow to the configured
//! outputs.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: level filter (e.g. `debug`, `varloc_core=debug`)
//! - `VARLOC_LOG_FORMAT`: output format (`json` or `pretty`, default: `pretty`)
//! - `VARLOC_LOG_FILE`: optional log file path; pointing it at an existing
//!   directory writes a date-stamped file inside it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! varloc_utils::init_logging().expect("failed to initialize logging");
//! tracing::info!("host started");
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, io};

use chrono::Utc;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default for development)
    Pretty,
    /// JSON format (default for production)
    Json,
}

impl FromStr for LogFormat
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {s}. Use 'pretty' or 'json'")),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Unknown log level: {s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            )),
        }
    }
}

/// Initialize logging from the environment.
///
/// Reads `RUST_LOG` (default filter `info`), `VARLOC_LOG_FORMAT` and
/// `VARLOC_LOG_FILE`.
///
/// ## Errors
///
/// Returns an error if a subscriber is already installed or the log file
/// cannot be created.
pub fn init_logging() -> Result<(), LoggingError>
{
    let format = env::var("VARLOC_LOG_FORMAT")
        .ok()
        .and_then(|s| LogFormat::from_str(&s).ok())
        .unwrap_or(LogFormat::Pretty);

    let default_level = env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string())
        .parse::<LogLevel>()
        .map(Into::into)
        .unwrap_or(Level::INFO);

    let log_file = env::var("VARLOC_LOG_FILE").ok().map(|raw| {
        let path = PathBuf::from(raw);
        if path.is_dir() { dated_log_path(&path) } else { path }
    });

    init_logging_internal(format, default_level, log_file)
}

/// Initialize logging with an explicit level and format, console only.
///
/// ## Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<(), LoggingError>
{
    init_logging_internal(format, level.into(), None)
}

/// Date-stamped log file path inside `dir`, e.g. `2026-08-07-varloc.log`.
#[must_use]
pub fn dated_log_path(dir: impl AsRef<Path>) -> PathBuf
{
    let today = Utc::now().format("%Y-%m-%d");
    dir.as_ref().join(format!("{today}-varloc.log"))
}

/// Internal initialization: one console layer, plus a file layer when a
/// path is given, under a single environment filter.
fn init_logging_internal(
    format: LogFormat,
    default_level: Level,
    log_file: Option<PathBuf>,
) -> Result<(), LoggingError>
{
    // RUST_LOG can override the default level with more specific filters
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = vec![console_layer(format)];
    if let Some(path) = log_file {
        layers.push(file_layer(format, &path));
    }

    Registry::default()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|error| LoggingError::InitializationFailed(error.to_string()))
}

fn console_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync>
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true)
            .with_writer(io::stdout)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(io::stdout)
            .boxed(),
    }
}

fn file_layer(format: LogFormat, path: &Path) -> Box<dyn Layer<Registry> + Send + Sync>
{
    let appender = tracing_appender::rolling::never(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    // The worker guard must live as long as the subscriber does.
    std::mem::forget(guard);

    match format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false) // No ANSI in files
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    }
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}
