//! Seams to the external branch-and-bound search.
//!
//! The heuristics never talk to a solver directly. They read the current
//! node through [`SearchContext`] (per-variable bound fixings plus the
//! incumbent value) and hand finished assignments to a [`SolutionSink`],
//! which performs its own feasibility re-check before storing. Both seams
//! have lightweight in-crate implementations so the construction loops can
//! be exercised against synthetic instances.

mod context;
mod gate;
mod scanner;

pub use context::{
    FixState, FixedContext, RootContext, SearchContext, SolutionPool, SolutionSink, EPSILON,
};
pub use gate::submit;
pub use scanner::scan;
