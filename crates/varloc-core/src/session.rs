//! Outbound transport interface and session lifecycle events.
//!
//! The host debugging environment owns the actual protocol connection; the
//! core only ever issues one kind of request against it ("evaluate this
//! expression in this frame") through the [`DebugSession`] trait. Lifecycle
//! notifications flow the other way as [`SessionEvent`] values fed to the
//! frame tracker.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::types::FrameId;

/// Evaluation context sent with every resolution request, matching the
/// context the variables view itself evaluates under.
pub const EVALUATE_CONTEXT_VARIABLES: &str = "variables";

/// Expression evaluation request, shaped like the debug-adapter wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest
{
    /// Backend-dialect expression to evaluate.
    pub expression: String,
    /// Evaluation context hint for the backend.
    pub context: String,
    /// Frame the expression is evaluated in.
    pub frame_id: i64,
}

impl EvaluateRequest
{
    /// Request evaluating `expression` in `frame` under the `variables`
    /// context.
    #[must_use]
    pub fn variables(expression: impl Into<String>, frame: FrameId) -> Self
    {
        EvaluateRequest {
            expression: expression.into(),
            context: EVALUATE_CONTEXT_VARIABLES.to_string(),
            frame_id: frame.raw(),
        }
    }
}

/// Reply to an [`EvaluateRequest`].
///
/// Backends put the interesting value in a free-form `result` string; the
/// parser is responsible for making sense of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateResponse
{
    /// Free-form evaluation result text.
    pub result: String,
}

impl EvaluateResponse
{
    /// Response carrying `result` as the evaluation text.
    pub fn new(result: impl Into<String>) -> Self
    {
        EvaluateResponse { result: result.into() }
    }
}

/// Active, request-capable debug session as seen by the core.
///
/// Implemented by the host over its actual transport. The core holds the
/// session only for the duration of a resolution attempt and never stores
/// it.
#[async_trait]
pub trait DebugSession: Send + Sync
{
    /// Backend type id declared by the debug adapter (e.g. `"gdb"`).
    ///
    /// This is the key the [`CapabilityRegistry`](crate::registry::CapabilityRegistry)
    /// dispatches on.
    fn session_type(&self) -> &str;

    /// Evaluate a single expression against the attached backend.
    ///
    /// ## Errors
    ///
    /// Returns a [`TransportError`] when the backend rejects the request or
    /// the session is gone. The core treats either as a soft failure of the
    /// enclosing resolution attempt.
    async fn evaluate(&self, request: EvaluateRequest) -> Result<EvaluateResponse, TransportError>;
}

/// Session lifecycle notification consumed by the frame tracker.
///
/// The host forwards these from its debug environment; the core performs no
/// protocol calls while handling them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent
{
    /// A debug session came up; frame state starts empty.
    Started,
    /// The target stopped. Carries the topmost frame if the backend reported
    /// one with the stop.
    Stopped
    {
        /// Topmost frame of the stopped thread, if known.
        top_frame: Option<FrameId>,
    },
    /// The user (or the host UI) selected a stack frame.
    FrameSelected(FrameId),
    /// The target resumed; no frame is current until the next stop.
    Resumed,
    /// The session ended; its frame state is discarded.
    Exited,
}
