pub mod plan_file;
pub mod workout;

pub use plan_file::{PLAN_EXTENSIONS, PlanFile};
pub use workout::*;
