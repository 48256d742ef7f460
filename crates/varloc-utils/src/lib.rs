//! # Varloc Utilities
//!
//! Shared logging infrastructure for Varloc, built on `tracing`.
//!
//! Hosts embedding the resolution engine initialize a subscriber once at
//! startup through this crate; the engine itself only emits events.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{LogFormat, LogLevel, LoggingError, dated_log_path, init_logging, init_logging_with_level};
pub use tracing::{debug, error, info, trace, warn};
