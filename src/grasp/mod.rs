//! GRASP construction heuristic.
//!
//! Greedy Randomized Adaptive Search Procedure: each pick is drawn uniformly
//! from a Restricted Candidate List (RCL), the subset of candidates whose
//! value clears `min + alpha * (max - min)` over the current list. `alpha`
//! tunes greediness — 1.0 keeps only maximum-value candidates, 0.0 degrades
//! to the fully random heuristic.
//!
//! # References
//!
//! Feo, T. A. & Resende, M. G. C. (1995). "Greedy randomized adaptive
//! search procedures", *Journal of Global Optimization* 6(2), 109-133.

mod config;
mod runner;

pub use config::GraspConfig;
pub use runner::{GraspResult, GraspRunner};
