//! Backend capability registry.
//!
//! Maps a debug adapter's declared type id to the dialect that knows how to
//! resolve variables against it. Lookup never fails: an unregistered type
//! gets a resolver that resolves nothing, so an exotic backend degrades to
//! "no annotations" instead of breaking the session.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::backend::{BackendDialect, CDialect, GoDialect, Resolver};

/// Adapter type ids served by the C dialect out of the box.
const C_BACKENDS: [&str; 4] = ["gdb", "lldb", "embedded-debug", "arm-debugger"];

/// Registry of backend capability entries.
///
/// Registration happens at bootstrap; the registry is append-only during
/// normal operation, and entries are never removed at runtime.
pub struct CapabilityRegistry
{
    dialects: HashMap<String, Arc<dyn BackendDialect>>,
}

impl CapabilityRegistry
{
    /// Empty registry. Every lookup degrades to the unsupported resolver
    /// until dialects are registered.
    #[must_use]
    pub fn new() -> Self
    {
        CapabilityRegistry { dialects: HashMap::new() }
    }

    /// Registry preloaded with the built-in backends: the C dialect for
    /// `gdb`, `lldb`, `embedded-debug` and `arm-debugger`, and the Go
    /// dialect for `go`.
    #[must_use]
    pub fn with_default_backends() -> Self
    {
        let mut registry = Self::new();
        let c_dialect: Arc<dyn BackendDialect> = Arc::new(CDialect);
        for backend_type in C_BACKENDS {
            registry.register(backend_type, c_dialect.clone());
        }
        registry.register("go", Arc::new(GoDialect));
        registry
    }

    /// Register `dialect` for sessions declaring `backend_type`.
    ///
    /// A later registration for the same type id replaces the earlier one,
    /// which lets hosts override a built-in dialect at bootstrap.
    pub fn register(&mut self, backend_type: impl Into<String>, dialect: Arc<dyn BackendDialect>)
    {
        let backend_type = backend_type.into();
        debug!(backend_type = %backend_type, dialect = dialect.dialect_name(), "registering backend dialect");
        self.dialects.insert(backend_type, dialect);
    }

    /// Resolver for sessions of `backend_type`.
    ///
    /// Unknown types get [`Resolver::unsupported`]: never resolvable, never
    /// an error.
    #[must_use]
    pub fn resolver_for(&self, backend_type: &str) -> Resolver
    {
        match self.dialects.get(backend_type) {
            Some(dialect) => Resolver::for_dialect(dialect.clone()),
            None => Resolver::unsupported(),
        }
    }
}

impl Default for CapabilityRegistry
{
    fn default() -> Self
    {
        Self::with_default_backends()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_default_backends_are_registered()
    {
        let registry = CapabilityRegistry::with_default_backends();
        for backend_type in ["gdb", "lldb", "embedded-debug", "arm-debugger", "go"] {
            assert!(registry.resolver_for(backend_type).is_supported(), "{backend_type} should resolve");
        }
    }

    #[test]
    fn test_unknown_backend_degrades_to_unsupported()
    {
        let registry = CapabilityRegistry::with_default_backends();
        assert!(!registry.resolver_for("python").is_supported());
        assert!(!registry.resolver_for("").is_supported());
    }

    #[test]
    fn test_empty_registry_resolves_nothing()
    {
        let registry = CapabilityRegistry::new();
        assert!(!registry.resolver_for("gdb").is_supported());
    }

    #[test]
    fn test_registration_is_additive_and_overridable()
    {
        let mut registry = CapabilityRegistry::new();
        registry.register("gdb", Arc::new(CDialect));
        assert!(registry.resolver_for("gdb").is_supported());

        // Overriding a type id swaps the dialect without touching others.
        registry.register("go", Arc::new(GoDialect));
        registry.register("go", Arc::new(CDialect));
        assert!(registry.resolver_for("go").is_supported());
        assert!(registry.resolver_for("gdb").is_supported());
    }
}
