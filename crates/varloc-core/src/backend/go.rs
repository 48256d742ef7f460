//! Go expression dialect for Delve-backed sessions.

use super::BackendDialect;

/// Address/size expressions for the Delve debugger (`go` backend type).
///
/// Delve's evaluator takes plain Go syntax: `&v` for the address and
/// `unsafe.Sizeof(v)` for the storage size.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoDialect;

impl BackendDialect for GoDialect
{
    fn dialect_name(&self) -> &'static str
    {
        "go"
    }

    fn address_expression(&self, variable_name: &str) -> String
    {
        format!("&{variable_name}")
    }

    fn size_expression(&self, variable_name: &str) -> String
    {
        format!("unsafe.Sizeof({variable_name})")
    }
}
