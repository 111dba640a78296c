//! Random construction heuristic.
//!
//! Completes a search node's partial assignment by drawing uniformly random
//! candidates per knapsack. No parameters beyond the caller's generator; the
//! entirely blind selection makes this the baseline the GRASP variant is
//! measured against.

mod runner;

pub use runner::{RandomResult, RandomRunner};
