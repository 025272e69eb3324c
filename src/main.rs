use ipam_planner::output::print_plan;
use ipam_planner::plan_from_file;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let plan_path = std::env::args()
        .nth(1)
        .ok_or("Usage: ipam-planner <plan.json>")?;

    let planner = plan_from_file(&plan_path)?;
    print_plan(&planner);

    Ok(())
}
