//! Tolerant parsing of textual evaluation replies.
//!
//! Backends dress the interesting value up differently (gdb answers an
//! address-of with `(int *) 0x7fffffffe014`, Delve with
//! `(*main.Point)(0xc000014090)`), so extraction scans for tokens instead of
//! assuming a reply shape. Anything unusable is an absent value, never an
//! error: the evaluator answering with an error string is an expected
//! outcome.

use once_cell::sync::Lazy;
use regex::Regex;

/// First `0x`-prefixed hexadecimal token, anywhere in the reply.
static HEX_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0[xX][0-9a-fA-F]+").expect("hex address pattern is valid"));

/// Extract the variable's address from an address-of evaluation reply.
///
/// Returns the numeric value of the first hexadecimal token found, or `None`
/// when the reply contains none (or a token too wide for 128 bits, which no
/// real backend produces).
#[must_use]
pub fn extract_address(reply: &str) -> Option<u128>
{
    let token = HEX_ADDRESS.find(reply)?.as_str();
    u128::from_str_radix(&token[2..], 16).ok()
}

/// Extract the variable's storage size from a size-of evaluation reply.
///
/// The reply must be a plain decimal integer, modulo surrounding whitespace.
/// Error text, type names, and embedded units all mean "size unknown", and
/// resolution then proceeds with the address alone.
#[must_use]
pub fn extract_size(reply: &str) -> Option<u128>
{
    let digits = reply.trim();
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
