// cargo watch -x 'fmt' -x 'run -- plan.json'

pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use error::PlanError;
use models::PlanFile;
use processing::SubnetPlanner;

pub use error::PlanError as Error;

/// Run every request of a plan document through a fresh planner.
///
/// Over-allocation does not stop the run; it is reported by the planner
/// afterwards. Invalid host counts do.
pub fn plan_subnets(plan: &PlanFile) -> Result<SubnetPlanner, PlanError> {
    let mut planner = SubnetPlanner::new(plan.base);
    for request in &plan.subnets {
        planner.add_subnet(&request.name, request.required_hosts)?;
    }
    Ok(planner)
}

/// Read a plan file and run it. Convenience for the binary and tests.
pub fn plan_from_file(path: &str) -> Result<SubnetPlanner, Box<dyn std::error::Error>> {
    let plan = models::read_plan_file(path)?;
    let planner = plan_subnets(&plan)?;
    Ok(planner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Cidr, SubnetRequest};

    #[test]
    fn test_plan_subnets() {
        let plan = PlanFile {
            base: Cidr::new("192.168.1.0/24").unwrap(),
            subnets: vec![
                SubnetRequest {
                    name: "A".to_string(),
                    required_hosts: 50,
                },
                SubnetRequest {
                    name: "B".to_string(),
                    required_hosts: 10,
                },
            ],
        };
        let planner = plan_subnets(&plan).unwrap();
        assert_eq!(planner.subnets().len(), 2);
        assert_eq!(planner.subnets()[1].cidr.to_string(), "192.168.1.64/28");
        assert!(!planner.is_over_allocated());
    }

    #[test]
    fn test_plan_subnets_rejects_zero_hosts() {
        let plan = PlanFile {
            base: Cidr::new("10.0.0.0/24").unwrap(),
            subnets: vec![SubnetRequest {
                name: "bad".to_string(),
                required_hosts: 0,
            }],
        };
        assert_eq!(
            plan_subnets(&plan).unwrap_err(),
            PlanError::InvalidHostCount(0)
        );
    }
}
