pub mod planner;

pub use planner::PlannerController;
