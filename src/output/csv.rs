//! CSV report for a subnet plan.

use crate::models::{classify, AddressClass};
use crate::output::terminal::{format_field, format_host_pair};
use crate::processing::SubnetPlanner;
use colored::Colorize;
use itertools::Itertools;

/// One output row of the plan report.
#[derive(Debug)]
pub struct PlanRow {
    /// 1-based row index.
    pub j: usize,
    /// Subnet display name.
    pub name: String,
    /// Child CIDR notation.
    pub cidr: String,
    /// Network address.
    pub network: String,
    /// Broadcast address.
    pub broadcast: String,
    /// Hosts requested by the caller.
    pub required_hosts: u32,
    /// Usable hosts in the child block.
    pub usable_hosts: i64,
    /// Classful category of the network address.
    pub class: AddressClass,
    /// Whether the child sits fully inside the base block.
    pub in_base: bool,
}

/// Build report rows from the planner's current sequence.
pub fn plan_rows(planner: &SubnetPlanner) -> Vec<PlanRow> {
    let base = planner.base();
    planner
        .subnets()
        .iter()
        .enumerate()
        .map(|(i, s)| PlanRow {
            j: i + 1,
            name: s.name.clone(),
            cidr: s.cidr.to_string(),
            network: s.cidr.network_address().to_string(),
            broadcast: s.cidr.broadcast_address().to_string(),
            required_hosts: s.required_hosts,
            usable_hosts: s.usable_hosts,
            class: classify(s.cidr.network_address()),
            in_base: base.contains(s.cidr.network_address())
                && base.contains(s.cidr.broadcast_address()),
        })
        .collect()
}

/// Print the plan as quoted CSV to stdout, with a capacity footer.
pub fn print_plan(planner: &SubnetPlanner) {
    log::info!(
        "#Start print_plan() base {} with {} subnets",
        planner.base(),
        planner.subnets().len()
    );
    println!(
        r#" "cnt",             "name",       "subnet_cidr",         "network",       "broadcast",        "hosts", "class", "in_base""#
    );
    for row in plan_rows(planner) {
        print_csv_row(&row);
    }

    let remaining = planner.remaining();
    if planner.is_over_allocated() {
        log::warn!(
            "Plan exceeds base {} by {} addresses",
            planner.base(),
            -remaining
        );
        println!(
            "#{}# base {} over-allocated by {} addresses",
            "WARN".on_red(),
            planner.base(),
            -remaining
        );
    } else {
        println!(
            "#{}# base {}: {} of {} addresses unallocated",
            "NOTE".on_blue(),
            planner.base(),
            remaining,
            planner.base().total_hosts()
        );
    }
}

/// Print a single CSV row.
fn print_csv_row(row: &PlanRow) {
    let fields = vec![
        format_field(row.j, 6),
        format_field(&row.name, 18),
        format_field(&row.cidr, 19),
        format_field(&row.network, 17),
        format_field(&row.broadcast, 17),
        format_field(format_host_pair(row.required_hosts, row.usable_hosts), 14),
        format_field(format!("{:?}", row.class), 7),
        format_field(row.in_base, 9),
    ];
    println!("{}", fields.iter().join(","));
}
