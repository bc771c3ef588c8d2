//! The per-cycle decision logic and the driving loop.

pub mod controller;
pub mod planner;
pub mod types;

pub use controller::CycleController;
pub use planner::{forward_swap_amount, plan_cycle};
pub use types::CycleAction;
