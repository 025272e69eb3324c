//! Error types for address parsing, range validation, and subnet planning.
//!
//! Every failure in this crate is a recoverable, caller-visible validation
//! outcome. Nothing here is process-fatal; callers match on the variant and
//! decide how to surface it.

use thiserror::Error;

/// Validation and planning errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Malformed dotted-quad text: wrong group count, non-numeric group, or
    /// an octet outside 0-255.
    #[error("invalid IPv4 address: {0}")]
    InvalidFormat(String),

    /// Malformed `ip/prefix` text, or a prefix outside 0-32.
    #[error("invalid CIDR notation: {0}")]
    InvalidCidr(String),

    /// Non-positive required-host value, or one too large for any IPv4
    /// prefix.
    #[error("invalid required host count: {0}")]
    InvalidHostCount(u32),

    /// The start address of a range failed to parse.
    #[error("invalid range start: {0}")]
    InvalidStart(String),

    /// The end address of a range failed to parse.
    #[error("invalid range end: {0}")]
    InvalidEnd(String),

    /// Both ends parsed but start is numerically after end.
    #[error("range start {start} is after end {end}")]
    StartAfterEnd { start: String, end: String },

    /// Address arithmetic ran past 255.255.255.255.
    #[error("address calculation overflowed past 255.255.255.255")]
    AddressOverflow,
}
