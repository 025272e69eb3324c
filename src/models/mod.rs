//! Domain models for the IPAM planning engine:
//! - [`Cidr`] - IPv4 CIDR block with derived mask/network/broadcast values
//! - [`IpRange`] - validated start/end address pair
//! - [`PlanFile`] and [`SubnetRequest`] - the JSON plan document

mod addr;
mod cidr;
mod plan;
mod range;

// Re-export public types
pub use addr::{bump_last_octet, format_addr, increment, parse_addr};
pub use cidr::{Cidr, MAX_PREFIX};
pub use plan::{read_plan_file, PlanFile, SubnetRequest};
pub use range::{classify, validate_range, AddressClass, IpRange};
