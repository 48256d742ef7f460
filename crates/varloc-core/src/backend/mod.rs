//! Per-backend resolution strategies.
//!
//! Different debuggers expose addresses and sizes through different
//! expression languages: gdb's C evaluator answers `&(v)` and `sizeof(v)`,
//! Delve answers `&v` and `unsafe.Sizeof(v)`. A [`BackendDialect`] captures
//! exactly that difference (the two expressions), while the [`Resolver`]
//! owns the pipeline they all share: snapshot the frame, issue both
//! evaluations concurrently, parse the replies, compute the range.

mod c;
mod go;

pub use c::CDialect;
pub use go::GoDialect;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{ResolveError, ResolveResult};
use crate::parse;
use crate::range::{hex_with_radix_marker, MemoryRange};
use crate::session::{DebugSession, EvaluateRequest};
use crate::tracker::FrameTracker;
use crate::types::{Variable, VariableRange};

/// Expression dialect of one debugger backend.
///
/// Implementations are stateless: the whole per-backend surface is how to
/// spell "address of" and "size of" in that backend's expression language.
pub trait BackendDialect: Send + Sync
{
    /// Dialect name used in diagnostics.
    fn dialect_name(&self) -> &'static str;

    /// Expression whose evaluation yields the variable's memory address.
    fn address_expression(&self, variable_name: &str) -> String;

    /// Expression whose evaluation yields the variable's storage size in
    /// bytes.
    fn size_expression(&self, variable_name: &str) -> String;
}

/// Resolves variables to memory ranges using one backend dialect.
///
/// Handed out by the
/// [`CapabilityRegistry`](crate::registry::CapabilityRegistry); a registry
/// miss yields [`Resolver::unsupported`], which resolves nothing and issues
/// no transport requests, so an unrecognized backend degrades quietly
/// instead of failing the session.
pub struct Resolver
{
    dialect: Option<Arc<dyn BackendDialect>>,
}

impl Resolver
{
    /// Resolver speaking `dialect`.
    #[must_use]
    pub fn for_dialect(dialect: Arc<dyn BackendDialect>) -> Self
    {
        Resolver { dialect: Some(dialect) }
    }

    /// Resolver for backend types with no registered dialect: every
    /// resolution is the defined no-op.
    #[must_use]
    pub fn unsupported() -> Self
    {
        Resolver { dialect: None }
    }

    /// Whether this resolver can ever produce a range.
    #[must_use]
    pub fn is_supported(&self) -> bool
    {
        self.dialect.is_some()
    }

    /// Resolve the memory range `variable` occupies, or `None` when it
    /// cannot be determined.
    ///
    /// The current frame is snapshotted from `tracker` once, before any
    /// request goes out. No frame, no name, an unparsable address reply, or
    /// a transport failure all produce `None` plus a log line; failures
    /// never escape as errors, and one variable's failure never affects
    /// another's resolution. An unparsable *size* reply still yields a
    /// range, with an absent end address.
    pub async fn resolve(
        &self,
        variable: &Variable,
        session: &dyn DebugSession,
        tracker: &FrameTracker,
    ) -> Option<VariableRange>
    {
        let Some(dialect) = self.dialect.as_deref() else {
            debug!(
                session_type = session.session_type(),
                variable = %variable.name,
                "no dialect registered for backend type"
            );
            return None;
        };

        match try_resolve(dialect, variable, session, tracker).await {
            Ok(range) => Some(range),
            Err(ResolveError::Transport(error)) => {
                warn!(
                    variable = %variable.name,
                    dialect = dialect.dialect_name(),
                    %error,
                    "unable to resolve location and size"
                );
                None
            }
            Err(error) => {
                debug!(variable = %variable.name, %error, "unable to resolve");
                None
            }
        }
    }
}

/// The shared resolution pipeline. Returns the failure taxonomy for
/// [`Resolver::resolve`] to log and flatten.
async fn try_resolve(
    dialect: &dyn BackendDialect,
    variable: &Variable,
    session: &dyn DebugSession,
    tracker: &FrameTracker,
) -> ResolveResult<VariableRange>
{
    // Snapshot once; the frame may change while requests are in flight, and
    // a resolution must not straddle two frames.
    let frame = tracker.current_frame().ok_or(ResolveError::NoCurrentFrame)?;
    if variable.name.is_empty() {
        return Err(ResolveError::UnnamedVariable);
    }

    let address_request =
        EvaluateRequest::variables(dialect.address_expression(&variable.name), frame);
    let size_request = EvaluateRequest::variables(dialect.size_expression(&variable.name), frame);

    // A join, not a race: nothing is acted upon until both replies are in.
    let (address_reply, size_reply) =
        tokio::try_join!(session.evaluate(address_request), session.evaluate(size_request))?;

    let start = parse::extract_address(&address_reply.result).ok_or_else(|| {
        ResolveError::UnparsableAddress { reply: address_reply.result.clone() }
    })?;
    let size = parse::extract_size(&size_reply.result);
    let range = MemoryRange::compute(start, size);

    debug!(
        variable = %variable.name,
        %frame,
        start = %hex_with_radix_marker(range.start),
        size = ?size.map(|s| s.to_string()),
        "resolved"
    );

    Ok(VariableRange {
        name: variable.name.clone(),
        start_address: hex_with_radix_marker(range.start),
        end_address: range.end.map(hex_with_radix_marker),
        value: variable.value.clone(),
    })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_unsupported_resolver_reports_itself()
    {
        assert!(!Resolver::unsupported().is_supported());
        assert!(Resolver::for_dialect(Arc::new(CDialect)).is_supported());
    }
}
