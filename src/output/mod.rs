//! Output formatting for subnet plans:
//! - [`csv`] - CSV plan report
//! - [`terminal`] - quoted-field helpers

mod csv;
mod terminal;

pub use csv::{plan_rows, print_plan, PlanRow};
pub use terminal::{format_field, format_host_pair};
