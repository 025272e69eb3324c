//! IP range validation and first-octet address classification.

use crate::error::PlanError;
use crate::models::addr::parse_addr;
use std::net::Ipv4Addr;

/// A validated IP range. Only produced by [`validate_range`], so
/// `start <= end` always holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IpRange {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl IpRange {
    /// Number of addresses in the range, inclusive of both ends.
    pub fn size(&self) -> u64 {
        u64::from(u32::from(self.end)) - u64::from(u32::from(self.start)) + 1
    }
}

/// Validate a (start, end) pair of dotted-quad strings.
///
/// Each end is parsed independently; ordering is only checked once both
/// parse, comparing the 32-bit values (not the strings).
pub fn validate_range(start_text: &str, end_text: &str) -> Result<IpRange, PlanError> {
    let start =
        parse_addr(start_text).map_err(|_| PlanError::InvalidStart(start_text.to_string()))?;
    let end = parse_addr(end_text).map_err(|_| PlanError::InvalidEnd(end_text.to_string()))?;
    if u32::from(start) > u32::from(end) {
        return Err(PlanError::StartAfterEnd {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(IpRange { start, end })
}

/// Classful address category, from the first octet. Informational only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    Unknown,
}

/// Classify an address by its first octet.
///
/// 0 and 127 (loopback) fall outside the classful table and report
/// `Unknown`.
pub fn classify(addr: Ipv4Addr) -> AddressClass {
    match addr.octets()[0] {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        240..=255 => AddressClass::E,
        _ => AddressClass::Unknown,
    }
}
