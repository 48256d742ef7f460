//! Exact address-range arithmetic and canonical hex rendering.
//!
//! Arithmetic runs in `u128` so addresses and sizes past the 32- and 64-bit
//! boundaries come through without truncation. There is no rounding and no
//! clamping: a zero size yields a zero-length range with `end == start`,
//! which is distinct from an unknown size.

use tracing::debug;

/// Half-open memory range with a possibly unknown end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRange
{
    /// Inclusive start address.
    pub start: u128,
    /// Exclusive end address, `start + size`. `None` when the size is
    /// unknown.
    pub end: Option<u128>,
}

impl MemoryRange
{
    /// Compute the range starting at `start` covering `size` bytes.
    ///
    /// An absent size produces an open-ended range. A sum that does not fit
    /// 128 bits (unreachable for real backend replies) degrades to "size
    /// unknown" rather than wrapping.
    #[must_use]
    pub fn compute(start: u128, size: Option<u128>) -> Self
    {
        let end = size.and_then(|size| {
            let end = start.checked_add(size);
            if end.is_none() {
                debug!(
                    start = %hex_with_radix_marker(start),
                    size = %size,
                    "range end exceeds 128 bits, treating size as unknown"
                );
            }
            end
        });
        MemoryRange { start, end }
    }
}

/// Render an address in the canonical form: `0x` radix marker, lowercase
/// hexadecimal digits, no padding.
#[must_use]
pub fn hex_with_radix_marker(value: u128) -> String
{
    format!("{value:#x}")
}
