//! Shared construction machinery: per-run working state and per-knapsack
//! candidate lists.
//!
//! Everything here is allocated fresh for one heuristic invocation and owned
//! by it; nothing survives the call. The external driver runs one heuristic
//! at a time per node, so there is no shared mutable state to protect.

mod candidates;
mod state;

pub use candidates::CandidateLists;
pub use state::BuildState;
