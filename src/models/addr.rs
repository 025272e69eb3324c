//! Dotted-quad address codec and increment helpers.
//!
//! Parsing is done group by group rather than through [`Ipv4Addr`]'s
//! `FromStr` so that the failure reports exactly what was wrong with the
//! text (group count, non-numeric group, out-of-range octet).

use crate::error::PlanError;
use std::net::Ipv4Addr;

/// Parse dotted-quad text into an [`Ipv4Addr`].
///
/// Accepts exactly four dot-separated decimal groups, each in 0-255.
///
/// # Examples
/// ```
/// use ipam_planner::models::parse_addr;
/// assert_eq!(parse_addr("10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
/// assert!(parse_addr("10.0.0").is_err());
/// assert!(parse_addr("10.0.0.256").is_err());
/// ```
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, PlanError> {
    let text = text.trim();
    let groups: Vec<&str> = text.split('.').collect();
    if groups.len() != 4 {
        return Err(PlanError::InvalidFormat(text.to_string()));
    }
    let mut octets = [0u8; 4];
    for (i, group) in groups.iter().enumerate() {
        // digits only: u8::from_str would also take a leading '+'
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlanError::InvalidFormat(text.to_string()));
        }
        octets[i] = group
            .parse::<u8>()
            .map_err(|_| PlanError::InvalidFormat(text.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Render an address as dotted-quad text, no zero padding.
pub fn format_addr(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Add `n` to the 32-bit value of `addr`, carrying across octets.
///
/// Going past 255.255.255.255 is an [`PlanError::AddressOverflow`].
pub fn increment(addr: Ipv4Addr, n: u32) -> Result<Ipv4Addr, PlanError> {
    let bits = u32::from(addr);
    let new_bits = bits.checked_add(n).ok_or(PlanError::AddressOverflow)?;
    Ok(Ipv4Addr::from(new_bits))
}

/// Add `n` to the last octet only, with no carry into higher octets.
///
/// This reproduces the upstream bulk-allocation preview, which bumps only
/// the final octet. The upstream rendered octets past 255 as-is; an
/// [`Ipv4Addr`] cannot, so the octet wraps modulo 256 here. Use
/// [`increment`] for carry-correct stepping.
pub fn bump_last_octet(addr: Ipv4Addr, n: u32) -> Ipv4Addr {
    let mut octets = addr.octets();
    octets[3] = octets[3].wrapping_add((n & 0xFF) as u8);
    Ipv4Addr::from(octets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr_valid() {
        assert_eq!(parse_addr("0.0.0.0").unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(
            parse_addr("192.168.1.10").unwrap(),
            Ipv4Addr::new(192, 168, 1, 10)
        );
        assert_eq!(
            parse_addr("255.255.255.255").unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
        assert_eq!(
            parse_addr(" 10.0.0.1 ").unwrap(),
            Ipv4Addr::new(10, 0, 0, 1)
        );
    }

    #[test]
    fn test_parse_addr_invalid() {
        assert!(parse_addr("").is_err());
        assert!(parse_addr("10.0.0").is_err());
        assert!(parse_addr("10.0.0.0.0").is_err());
        assert!(parse_addr("10.0.0.256").is_err());
        assert!(parse_addr("10.0.0.x").is_err());
        assert!(parse_addr("10..0.1").is_err());
        assert!(parse_addr("10.0.0.-1").is_err());
    }

    #[test]
    fn test_parse_addr_rejects_signed_groups() {
        // u8 parsing alone would accept a leading '+'
        assert!(parse_addr("10.0.0.+1").is_err());
        assert!(parse_addr("+10.0.0.1").is_err());
    }

    #[test]
    fn test_round_trip() {
        for text in ["10.0.0.1", "0.0.0.0", "172.16.254.3", "255.255.255.255"] {
            assert_eq!(format_addr(parse_addr(text).unwrap()), text);
        }
    }

    #[test]
    fn test_increment_carries() {
        let ip = Ipv4Addr::new(10, 0, 0, 255);
        assert_eq!(increment(ip, 1).unwrap(), Ipv4Addr::new(10, 0, 1, 0));
        let ip = Ipv4Addr::new(10, 0, 255, 255);
        assert_eq!(increment(ip, 1).unwrap(), Ipv4Addr::new(10, 1, 0, 0));
        let ip = Ipv4Addr::new(10, 0, 0, 0);
        assert_eq!(increment(ip, 300).unwrap(), Ipv4Addr::new(10, 0, 1, 44));
    }

    #[test]
    fn test_increment_overflow() {
        let ip = Ipv4Addr::new(255, 255, 255, 255);
        assert_eq!(increment(ip, 1), Err(PlanError::AddressOverflow));
        assert_eq!(increment(ip, 0).unwrap(), ip);
    }

    #[test]
    fn test_bump_last_octet_no_carry() {
        let ip = Ipv4Addr::new(10, 0, 0, 250);
        assert_eq!(bump_last_octet(ip, 2), Ipv4Addr::new(10, 0, 0, 252));
        // no carry into the third octet, wraps instead
        assert_eq!(bump_last_octet(ip, 10), Ipv4Addr::new(10, 0, 0, 4));
    }
}
