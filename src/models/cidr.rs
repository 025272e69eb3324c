//! CIDR block type and the derived subnet values.
//!
//! A [`Cidr`] keeps the address exactly as parsed. Host bits set in the
//! input are not rejected; the network address is always derived by
//! masking, never stored canonicalized.

use crate::error::PlanError;
use crate::models::addr::parse_addr;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum IPv4 prefix length (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// IPv4 CIDR block: an address and a prefix length.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as given (may have host bits set).
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Create a new [`Cidr`] from text like `"10.0.0.0/24"`.
    pub fn new(text: &str) -> Result<Cidr, PlanError> {
        let text = text.trim();
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() != 2 {
            return Err(PlanError::InvalidCidr(text.to_string()));
        }
        let addr = parse_addr(parts[0]).map_err(|_| PlanError::InvalidCidr(text.to_string()))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| PlanError::InvalidCidr(text.to_string()))?;
        if prefix > MAX_PREFIX {
            return Err(PlanError::InvalidCidr(text.to_string()));
        }
        Ok(Cidr { addr, prefix })
    }

    /// Construct from already-validated parts.
    pub fn from_parts(addr: Ipv4Addr, prefix: u8) -> Cidr {
        Cidr { addr, prefix }
    }

    /// The subnet mask, built octet by octet.
    ///
    /// For octet index `i`: 255 while the prefix extends past the octet,
    /// 0 once the prefix has ended before it, otherwise the partial-octet
    /// value `256 - 2^(8 - bits_in_octet)`.
    pub fn mask(&self) -> Ipv4Addr {
        let prefix = self.prefix as u16;
        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            let i = i as u16;
            *octet = if prefix > 8 * (i + 1) {
                0xFF
            } else if prefix <= 8 * i {
                0
            } else {
                (256 - (1u16 << (8 - (prefix - 8 * i)))) as u8
            };
        }
        Ipv4Addr::from(octets)
    }

    /// The network address: the stored address AND the mask, per octet.
    pub fn network_address(&self) -> Ipv4Addr {
        let addr = self.addr.octets();
        let mask = self.mask().octets();
        Ipv4Addr::new(
            addr[0] & mask[0],
            addr[1] & mask[1],
            addr[2] & mask[2],
            addr[3] & mask[3],
        )
    }

    /// The broadcast address: network octets with all host bits set.
    pub fn broadcast_address(&self) -> Ipv4Addr {
        let prefix = self.prefix as u16;
        let network = self.network_address().octets();
        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            let n = network[i];
            let i = i as u16;
            *octet = if prefix <= 8 * i {
                255
            } else if prefix >= 8 * (i + 1) {
                n
            } else {
                n | ((1u16 << (8 - (prefix - 8 * i))) - 1) as u8
            };
        }
        Ipv4Addr::from(octets)
    }

    /// Total addresses in the block: `2^(32 - prefix)`.
    pub fn total_hosts(&self) -> u64 {
        1u64 << (MAX_PREFIX - self.prefix)
    }

    /// Usable host addresses: total minus network and broadcast.
    ///
    /// Negative for /31 and /32; the raw value is returned, callers
    /// display it as-is.
    pub fn usable_hosts(&self) -> i64 {
        self.total_hosts() as i64 - 2
    }

    /// Whether `addr` falls inside this block's address range.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        u32::from(self.network_address()) <= u32::from(addr)
            && u32::from(addr) <= u32::from(self.broadcast_address())
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl PartialEq for Cidr {
    fn eq(&self, other: &Cidr) -> bool {
        self.addr == other.addr && self.prefix == other.prefix
    }
}

impl PartialOrd for Cidr {
    fn partial_cmp(&self, other: &Cidr) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|_| de::Error::custom(format!("invalid CIDR: {}", s)))
    }
}

impl FromStr for Cidr {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Cidr, PlanError> {
        Cidr::new(s)
    }
}
