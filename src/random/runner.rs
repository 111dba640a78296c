//! Random construction execution loop.

use crate::construction::{BuildState, CandidateLists};
use crate::problem::{Assignment, Instance};
use crate::search::{scan, submit, SearchContext, SolutionSink};
use rand::Rng;

/// Result of one random construction run.
#[derive(Debug, Clone)]
pub struct RandomResult {
    /// Whether the sink accepted the constructed solution.
    pub found: bool,
    /// Whether forced assignments already overflowed a knapsack.
    pub infeasible: bool,
    /// The constructed assignment (including forced-in items).
    pub assignment: Assignment,
    /// Total value of the constructed assignment.
    pub total_value: i64,
    /// Number of assigned items.
    pub items_assigned: usize,
}

/// Uniform-random construction heuristic.
pub struct RandomRunner;

impl RandomRunner {
    /// Builds one assignment and offers it to the sink.
    ///
    /// Knapsacks are filled in index order. For each knapsack the candidate
    /// list is built once; while capacity and candidates remain, a uniform
    /// position is drawn and swap-removed, and the item is accepted only if
    /// it is still uncovered and fits the residual — rejected draws are
    /// simply not reconsidered for this knapsack. Each draw strictly
    /// shrinks the list, so the loop terminates.
    ///
    /// # Examples
    ///
    /// ```
    /// use mkp_primal::problem::{Instance, Item};
    /// use mkp_primal::random::RandomRunner;
    /// use mkp_primal::search::{RootContext, SolutionPool};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let instance = Instance::new(
    ///     vec![Item::new(1, 5, 10), Item::new(2, 6, 20)],
    ///     vec![10],
    /// )
    /// .unwrap();
    /// let ctx = RootContext::new();
    /// let mut pool = SolutionPool::new(&instance);
    /// let mut rng = StdRng::seed_from_u64(42);
    ///
    /// let result = RandomRunner::run(&instance, &ctx, &mut pool, &mut rng);
    /// assert!(result.found);
    /// ```
    pub fn run<C, S, R>(instance: &Instance, ctx: &C, sink: &mut S, rng: &mut R) -> RandomResult
    where
        C: SearchContext,
        S: SolutionSink,
        R: Rng,
    {
        let mut state = scan(instance, ctx);
        let mut cands = CandidateLists::new(instance.m());

        for sack in instance.sack_indices() {
            cands.build(sack, instance, ctx, &state);

            while state.residual(sack) > 0 && !cands.is_empty(sack) {
                let pos = rng.random_range(0..cands.len(sack));
                let item = cands.swap_remove(sack, pos);

                // the draw may have been invalidated by earlier picks
                if !state.is_covered(item) && instance.item(item).weight <= state.residual(sack) {
                    state.assign(instance, item, sack);
                }
            }
        }

        Self::finish(state, ctx, sink)
    }

    fn finish<C: SearchContext, S: SolutionSink>(
        state: BuildState,
        ctx: &C,
        sink: &mut S,
    ) -> RandomResult {
        let found = submit(&state, ctx, sink);
        let infeasible = state.infeasible();
        let assignment = state.into_assignment();
        RandomResult {
            found,
            infeasible,
            total_value: assignment.total_value(),
            items_assigned: assignment.assigned_count(),
            assignment,
        }
    }
}
