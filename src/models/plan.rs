//! Plan document model.
//!
//! A plan file is a JSON document naming a base block and the subnet
//! requests to carve out of it, in request order.

use super::Cidr;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One subnet request: a display name and the hosts it must fit.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubnetRequest {
    /// Display name for the subnet.
    pub name: String,
    /// Hosts the subnet must accommodate.
    pub required_hosts: u32,
}

/// A whole plan document.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlanFile {
    /// The base block all subnets are carved from.
    pub base: Cidr,
    /// Subnet requests, in the order they should be placed.
    pub subnets: Vec<SubnetRequest>,
}

/// Read a plan document from a JSON file.
pub fn read_plan_file<P: AsRef<Path>>(path: P) -> Result<PlanFile, Box<dyn Error>> {
    let path = path.as_ref();
    log::debug!("Reading plan file {:?}", path);
    let file = File::open(path).map_err(|e| format!("Error opening plan file {:?}: {}", path, e))?;
    let plan: PlanFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Error parsing plan file {:?}: {}", path, e))?;
    log::info!(
        "Read plan: base {} with {} subnet requests",
        plan.base,
        plan.subnets.len()
    );
    Ok(plan)
}
