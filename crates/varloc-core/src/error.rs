//! Error types for the resolution engine.
//!
//! Every variant here is non-fatal: resolution failures surface to callers
//! as an absent range plus a log line, never as a panic or an `Err` crossing
//! the public boundary.

use thiserror::Error;

/// Why a resolution attempt produced no range.
///
/// `Transport` is the only variant logged at warn level; the others describe
/// expected conditions (no stopped frame, synthetic variables, replies the
/// evaluator could not answer) and are logged at debug level.
#[derive(Error, Debug)]
pub enum ResolveError
{
    /// Resolution was requested while no stack frame is selected, e.g.
    /// outside any stop or between resume and the next stop.
    #[error("no stack frame is currently selected")]
    NoCurrentFrame,

    /// The variable carries no name to evaluate.
    #[error("variable has no name")]
    UnnamedVariable,

    /// The address evaluation succeeded at the transport level but its reply
    /// contains no recognizable hex token (an error string, a register name,
    /// `<optimized out>`, ...).
    #[error("no address token in evaluation reply: {reply:?}")]
    UnparsableAddress
    {
        /// Raw reply text as returned by the backend.
        reply: String,
    },

    /// One of the evaluate requests failed at the transport level.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failure reported by the session transport for a single evaluate request.
///
/// Host transport implementations return this from
/// [`DebugSession::evaluate`](crate::session::DebugSession::evaluate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError
{
    /// The backend rejected the request, e.g. a malformed expression or an
    /// evaluator error. Carries the backend-supplied message.
    #[error("request rejected by backend: {message}")]
    Rejected
    {
        /// Message as reported by the backend.
        message: String,
    },

    /// The debug session is no longer connected.
    #[error("debug session disconnected")]
    Disconnected,
}

/// Convenience alias for fallible resolution steps.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
