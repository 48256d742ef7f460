//! C expression dialect, shared by the native-code debuggers.

use super::BackendDialect;

/// Address/size expressions for backends exposing a C-like evaluator: gdb,
/// lldb, and the embedded gdb frontends.
///
/// The variable name is parenthesized so expressions the adapter reports as
/// names (`buffer[0]`, `s.field`) bind correctly under `&` and `sizeof`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CDialect;

impl BackendDialect for CDialect
{
    fn dialect_name(&self) -> &'static str
    {
        "c"
    }

    fn address_expression(&self, variable_name: &str) -> String
    {
        format!("&({variable_name})")
    }

    fn size_expression(&self, variable_name: &str) -> String
    {
        format!("sizeof({variable_name})")
    }
}
