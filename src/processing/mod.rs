//! Subnet planning and allocation logic:
//! - [`planner`] - variable-length subnet planning over a base block
//! - [`preview`] - sequential bulk-allocation preview

mod planner;
mod preview;

// Re-export public types
pub use planner::{AddOutcome, PlannedSubnet, SubnetPlanner};
pub use preview::{preview, IncrementStyle, PreviewItem, PREVIEW_LIMIT};
