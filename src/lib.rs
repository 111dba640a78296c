//! Randomized constructive primal heuristics for the multiple-knapsack
//! assignment problem.
//!
//! Given `n` items (weight, value) and `m` knapsacks (capacity), assign each
//! item to at most one knapsack without exceeding any capacity, maximizing
//! the total assigned value. Two construction heuristics are provided:
//!
//! - **Random construction**: repeatedly draws a uniformly random candidate
//!   for each knapsack.
//! - **GRASP construction**: draws from a value-thresholded Restricted
//!   Candidate List (RCL) controlled by a greediness parameter `alpha`.
//!
//! Both are designed to run as *primal heuristics* inside an external
//! branch-and-bound search: at a search node they read the node's fixed
//! variables (forced-in / forced-out items), build a feasible completion of
//! that partial assignment, and submit it to the solver's solution store
//! when it beats the incumbent.
//!
//! # Architecture
//!
//! The search driver is abstracted behind two narrow seams so the heuristics
//! can be unit-tested against synthetic instances without a running search:
//! [`search::SearchContext`] (variable bounds + incumbent value, read-only)
//! and [`search::SolutionSink`] (solution submission with an independent
//! feasibility re-check). Randomness comes from a caller-owned [`rand::Rng`]
//! threaded through every randomized call; the crate holds no global state.
//!
//! # References
//!
//! Feo, T. A. & Resende, M. G. C. (1995). "Greedy randomized adaptive
//! search procedures", *Journal of Global Optimization* 6(2), 109-133.

pub mod construction;
pub mod grasp;
pub mod problem;
pub mod random;
pub mod search;
