//! Variable-length subnet planning.
//!
//! A [`SubnetPlanner`] carves child subnets out of a base block, one
//! request at a time. Each child is sized to the smallest power of two
//! that fits the requested hosts plus network and broadcast, and is
//! placed at the address cursor left by the previous child.

use crate::error::PlanError;
use crate::models::{increment, Cidr, MAX_PREFIX};
use std::net::Ipv4Addr;
use uuid::Uuid;

/// A subnet placed by the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSubnet {
    /// Stable id, used for removal.
    pub id: Uuid,
    /// Caller-supplied display name.
    pub name: String,
    /// The host count that was requested.
    pub required_hosts: u32,
    /// The child block, with `addr` already at its network address.
    pub cidr: Cidr,
    /// Child capacity minus network and broadcast.
    pub usable_hosts: i64,
}

/// Result of a successful [`SubnetPlanner::add_subnet`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    /// The subnet that was appended.
    pub subnet: PlannedSubnet,
    /// Base capacity left after this addition; negative when the plan
    /// over-allocates.
    pub remaining: i64,
    /// True when the plan now exceeds the base block. A warning, never a
    /// failure: the subnet was still appended.
    pub over_allocated: bool,
}

/// Planner state: a base block and the append-only sequence of children.
#[derive(Debug, Clone)]
pub struct SubnetPlanner {
    base: Cidr,
    subnets: Vec<PlannedSubnet>,
}

impl SubnetPlanner {
    /// Seed a planner with the base block to subdivide.
    pub fn new(base: Cidr) -> SubnetPlanner {
        SubnetPlanner {
            base,
            subnets: Vec::new(),
        }
    }

    /// The base block this planner subdivides.
    pub fn base(&self) -> Cidr {
        self.base
    }

    /// The planned subnets, in placement order.
    pub fn subnets(&self) -> &[PlannedSubnet] {
        &self.subnets
    }

    /// Plan the next subnet.
    ///
    /// The child prefix is `32 - ceil(log2(required_hosts + 2))`. The
    /// child starts at the base network for the first request, otherwise
    /// one past the previous child's broadcast, masked down to the child
    /// prefix boundary.
    ///
    /// Over-allocating the base block is reported in the outcome but does
    /// not fail the call.
    pub fn add_subnet(&mut self, name: &str, required_hosts: u32) -> Result<AddOutcome, PlanError> {
        if required_hosts < 1 {
            return Err(PlanError::InvalidHostCount(required_hosts));
        }

        // hosts + network + broadcast, rounded up to a power of two
        let needed = required_hosts as u64 + 2;
        let capacity = needed.next_power_of_two();
        let required_bits = capacity.trailing_zeros() as u8;
        if required_bits > MAX_PREFIX {
            // no IPv4 prefix can hold this many hosts
            return Err(PlanError::InvalidHostCount(required_hosts));
        }
        let child_prefix = MAX_PREFIX - required_bits;

        let cursor = self.next_cursor()?;
        // align the cursor down to the child prefix boundary
        let network = Cidr::from_parts(cursor, child_prefix).network_address();

        let subnet = PlannedSubnet {
            id: Uuid::new_v4(),
            name: name.to_string(),
            required_hosts,
            cidr: Cidr::from_parts(network, child_prefix),
            usable_hosts: capacity as i64 - 2,
        };
        log::debug!(
            "Planned subnet '{}': {} ({} usable for {} requested)",
            subnet.name,
            subnet.cidr,
            subnet.usable_hosts,
            required_hosts
        );
        self.subnets.push(subnet.clone());

        let remaining = self.remaining();
        let over_allocated = remaining < 0;
        if over_allocated {
            log::warn!(
                "Plan over-allocates base {} by {} addresses",
                self.base,
                -remaining
            );
        }
        Ok(AddOutcome {
            subnet,
            remaining,
            over_allocated,
        })
    }

    /// Remove a planned subnet by id. Returns whether anything was removed.
    ///
    /// Later subnets keep the addresses they were assigned; nothing is
    /// moved down into the freed space. Call
    /// [`recompute_after_removal`](Self::recompute_after_removal) to
    /// compact explicitly.
    pub fn remove_subnet(&mut self, id: Uuid) -> bool {
        let before = self.subnets.len();
        self.subnets.retain(|s| s.id != id);
        before != self.subnets.len()
    }

    /// Re-place every surviving subnet from the base network up, in the
    /// order they were added. Ids, names, and sizes are kept; only
    /// addresses change.
    pub fn recompute_after_removal(&mut self) -> Result<(), PlanError> {
        let mut cursor = self.base.network_address();
        for subnet in self.subnets.iter_mut() {
            let network = Cidr::from_parts(cursor, subnet.cidr.prefix).network_address();
            subnet.cidr = Cidr::from_parts(network, subnet.cidr.prefix);
            cursor = increment(subnet.cidr.broadcast_address(), 1)?;
        }
        Ok(())
    }

    /// Addresses consumed so far: usable + 2 per planned subnet.
    pub fn total_allocated(&self) -> u64 {
        self.subnets
            .iter()
            .map(|s| (s.usable_hosts + 2) as u64)
            .sum()
    }

    /// Base capacity minus [`total_allocated`](Self::total_allocated);
    /// negative when the plan over-allocates.
    pub fn remaining(&self) -> i64 {
        self.base.total_hosts() as i64 - self.total_allocated() as i64
    }

    /// Whether the plan exceeds the base block's capacity.
    pub fn is_over_allocated(&self) -> bool {
        self.remaining() < 0
    }

    fn next_cursor(&self) -> Result<Ipv4Addr, PlanError> {
        match self.subnets.last() {
            None => Ok(self.base.network_address()),
            Some(prev) => increment(prev.cidr.broadcast_address(), 1),
        }
    }
}
