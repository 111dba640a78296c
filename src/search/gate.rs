//! Acceptance gate between construction and the solution store.

use super::{SearchContext, SolutionSink, EPSILON};
use crate::construction::BuildState;

/// Decides whether a finished construction is worth submitting.
///
/// Infeasible runs are dropped silently, and so are empty ones: a run that
/// assigned nothing (no items, or nothing fit) ended on terminal candidate
/// lists and is not a solution, even against an empty incumbent. A
/// non-empty feasible run is submitted only when its value beats the
/// incumbent by more than [`EPSILON`]; the sink performs its own
/// independent feasibility re-check, and its verdict is the heuristic's
/// reported "found" result. No state outside the sink is touched.
pub fn submit<C: SearchContext, S: SolutionSink>(
    state: &BuildState,
    ctx: &C,
    sink: &mut S,
) -> bool {
    if state.infeasible() {
        return false;
    }
    if state.assignment().assigned_count() == 0 {
        return false;
    }
    if state.total_value() as f64 > ctx.best_value() + EPSILON {
        sink.try_store(state.assignment())
    } else {
        false
    }
}
