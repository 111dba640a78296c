//! Multiple-knapsack problem data: instances, typed indices, assignments.
//!
//! The instance is owned by the external solver and consumed read-only by
//! the heuristics; everything here is plain data with no search coupling.

mod assignment;
mod instance;

pub use assignment::{Assignment, ItemIdx, SackIdx};
pub use instance::{Instance, Item};
