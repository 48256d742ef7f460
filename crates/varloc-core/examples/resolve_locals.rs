//! Resolve a frame's locals against a scripted debug session.
//!
//! Demonstrates the full pipeline without a live debugger: a replay session
//! answers the evaluate requests a gdb adapter would, and the resolver turns
//! them into memory ranges.
//!
//! ## Usage:
//!
//! ```bash
//! RUST_LOG=debug cargo run --example resolve_locals
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use varloc_core::{
    CapabilityRegistry, DebugSession, EvaluateRequest, EvaluateResponse, FrameId, FrameTracker,
    TransportError, Variable,
};
use varloc_utils::init_logging;

/// Replay session answering from canned gdb replies.
struct ReplaySession
{
    replies: HashMap<&'static str, &'static str>,
}

#[async_trait]
impl DebugSession for ReplaySession
{
    fn session_type(&self) -> &str
    {
        "gdb"
    }

    async fn evaluate(&self, request: EvaluateRequest) -> Result<EvaluateResponse, TransportError>
    {
        match self.replies.get(request.expression.as_str()) {
            Some(reply) => Ok(EvaluateResponse::new(*reply)),
            None => Err(TransportError::Rejected {
                message: format!("No symbol in current context: {}", request.expression),
            }),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main()
{
    init_logging().expect("Failed to initialize logging");

    let session = ReplaySession {
        replies: HashMap::from([
            ("&(counter)", "(int *) 0x7fffffffe014"),
            ("sizeof(counter)", "4"),
            ("&(message)", "(char (*)[14]) 0x7fffffffe020"),
            ("sizeof(message)", "14"),
            // `flags` was optimized away by the compiler.
            ("&(flags)", "<optimized out>"),
            ("sizeof(flags)", "4"),
        ]),
    };

    // The host would feed these from its session events; here the target is
    // "stopped" in frame 0.
    let tracker = FrameTracker::new();
    tracker.on_stopped(Some(FrameId(0)));

    let registry = CapabilityRegistry::with_default_backends();
    let resolver = registry.resolver_for(session.session_type());

    let locals = [
        Variable::new("counter", "42"),
        Variable::new("message", "\"Hello, world!\""),
        Variable::new("flags", "<optimized out>"),
    ];

    for variable in &locals {
        match resolver.resolve(variable, &session, &tracker).await {
            Some(range) => {
                let end = range.end_address.as_deref().unwrap_or("?");
                println!("{:10} {} .. {} = {}", range.name, range.start_address, end, range.value);
            }
            None => println!("{:10} (no range)", variable.name),
        }
    }
}
