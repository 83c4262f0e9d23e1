pub mod planner;
pub mod store_ops;

pub use planner::Planner;
pub use store_ops::PlanError;
