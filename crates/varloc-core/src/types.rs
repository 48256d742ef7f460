//! Value types shared across the resolution engine.

use std::fmt;

/// Stack frame identifier assigned by the debug adapter.
///
/// Frame ids are only meaningful within the session that produced them, and
/// only until the target resumes. A resolution attempt snapshots the id once
/// at its start and carries that snapshot for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub i64);

impl FrameId
{
    /// Raw adapter-assigned value, as sent on the wire.
    #[must_use]
    pub const fn raw(self) -> i64
    {
        self.0
    }
}

impl From<i64> for FrameId
{
    fn from(value: i64) -> Self
    {
        FrameId(value)
    }
}

impl fmt::Display for FrameId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

/// Debug session identifier assigned by the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId
{
    /// Create a session id from the host's opaque identifier.
    pub fn new(id: impl Into<String>) -> Self
    {
        SessionId(id.into())
    }

    /// Identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str
    {
        &self.0
    }
}

impl From<&str> for SessionId
{
    fn from(value: &str) -> Self
    {
        SessionId(value.to_string())
    }
}

impl fmt::Display for SessionId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.0)
    }
}

/// Variable reported by a debug adapter.
///
/// Only the name takes part in resolution; the display value is passed
/// through to the resulting [`VariableRange`] untouched. The
/// `memory_reference` hint some adapters attach is carried so hosts can hand
/// over the full adapter shape, but resolution never consults it: not every
/// backend populates it, so address and size are always re-derived from live
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable
{
    /// Name as shown in the variables view, evaluatable in the current frame.
    pub name: String,
    /// Display value as last reported by the adapter.
    pub value: String,
    /// Optional adapter-supplied memory reference. Ignored by resolution.
    pub memory_reference: Option<String>,
}

impl Variable
{
    /// Variable with a name and display value and no memory reference.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self
    {
        Variable {
            name: name.into(),
            value: value.into(),
            memory_reference: None,
        }
    }
}

/// Memory range occupied by a variable, ready for display.
///
/// `start_address` is always present and canonically rendered (`0x` radix
/// marker, lowercase digits). `end_address` is absent only when the size
/// could not be determined; a zero-sized variable gets an end equal to its
/// start, which is a valid zero-length range, not an unknown one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRange
{
    /// Name of the resolved variable.
    pub name: String,
    /// Inclusive start of the range, canonical hex.
    pub start_address: String,
    /// Exclusive end of the range (`start + size`), canonical hex.
    pub end_address: Option<String>,
    /// Display value carried over from the variable, not re-evaluated.
    pub value: String,
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_frame_id_raw_round_trip()
    {
        let frame = FrameId::from(3);
        assert_eq!(frame.raw(), 3);
        assert_eq!(frame.to_string(), "3");
    }

    #[test]
    fn test_session_id_display()
    {
        let session = SessionId::new("abc-123");
        assert_eq!(session.as_str(), "abc-123");
        assert_eq!(session.to_string(), "abc-123");
        assert_eq!(session, SessionId::from("abc-123"));
    }

    #[test]
    fn test_variable_new_has_no_memory_reference()
    {
        let variable = Variable::new("counter", "42");
        assert_eq!(variable.name, "counter");
        assert_eq!(variable.value, "42");
        assert_eq!(variable.memory_reference, None);
    }
}
