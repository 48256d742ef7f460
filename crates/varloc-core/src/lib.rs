//! # varloc-core
//!
//! Variable-to-memory-range resolution engine for Varloc.
//!
//! Given a variable reported during a live debugging session and the
//! currently selected stack frame, this crate works out the memory address
//! range the variable occupies and hands it to a memory-visualization
//! layer:
//!
//! - [`registry::CapabilityRegistry`] picks the resolution strategy matching
//!   the session's backend type
//! - [`tracker::FrameTracker`] knows which stack frame is current when a
//!   resolution is requested
//! - [`backend::Resolver`] issues the backend dialect's address-of and
//!   size-of evaluations concurrently over the session transport
//! - [`parse`] extracts values from the loosely-structured textual replies
//! - [`range`] computes the range with exact arithmetic and renders
//!   canonical hex
//!
//! The host environment stays on the other side of two seams: it implements
//! [`session::DebugSession`] over its transport and feeds
//! [`session::SessionEvent`]s to the tracker. Every failure inside the core
//! surfaces as an absent result plus a `tracing` diagnostic, never as an
//! error crossing the public boundary.

pub mod backend;
pub mod error;
pub mod parse;
pub mod range;
pub mod registry;
pub mod session;
pub mod tracker;
pub mod types;

pub use backend::{BackendDialect, Resolver};
pub use error::{ResolveError, TransportError};
pub use registry::CapabilityRegistry;
pub use session::{DebugSession, EvaluateRequest, EvaluateResponse, SessionEvent};
pub use tracker::{FrameTracker, SessionTrackers};
pub use types::{FrameId, SessionId, Variable, VariableRange};
