//! GRASP execution loop.
//!
//! # Algorithm (one construction)
//!
//! For each knapsack `k` in index order:
//!
//! 1. Build the candidate list for `k` (uncovered, not forced out, fits).
//! 2. While capacity and candidates remain:
//!    a. Scan the list for its minimum and maximum candidate value.
//!    b. Collect the RCL: candidates with value >= `min + alpha*(max-min)`.
//!    c. Draw one RCL member uniformly and assign it to `k`.
//!    d. Swap-remove it, then prune candidates that no longer fit.
//!
//! The min/max scan and the RCL are recomputed every iteration: consumption
//! and pruning shift the value distribution, so a cached RCL would refer to
//! removed items or admit items that no longer fit. When `min == max` the
//! threshold collapses to `min` and the RCL is the whole list, which is
//! exactly the random heuristic's behavior for that knapsack.

use super::config::GraspConfig;
use crate::construction::{BuildState, CandidateLists};
use crate::problem::{Assignment, Instance};
use crate::search::{scan, submit, SearchContext, SolutionSink};
use rand::Rng;

/// Result of one GRASP construction run.
#[derive(Debug, Clone)]
pub struct GraspResult {
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

/// GRASP construction heuristic.
pub struct GraspRunner;

impl GraspRunner {
    /// Builds one assignment under `config.alpha` and offers it to the sink.
    ///
    /// Unlike the random variant, every RCL draw is guaranteed to fit: the
    /// list invariant (`weight <= residual`) is restored by pruning after
    /// each assignment, so no draw is ever discarded.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation (`alpha` outside `[0, 1]`).
    ///
    /// # Examples
    ///
    /// ```
    /// use mkp_primal::grasp::{GraspConfig, GraspRunner};
    /// use mkp_primal::problem::{Instance, Item};
    /// use mkp_primal::search::{RootContext, SolutionPool};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let instance = Instance::new(
    ///     vec![Item::new(1, 5, 10), Item::new(2, 5, 8), Item::new(3, 6, 20)],
    ///     vec![10],
    /// )
    /// .unwrap();
    /// let config = GraspConfig::default().with_alpha(1.0);
    /// let ctx = RootContext::new();
    /// let mut pool = SolutionPool::new(&instance);
    /// let mut rng = StdRng::seed_from_u64(42);
    ///
    /// let result = GraspRunner::run(&instance, &ctx, &mut pool, &config, &mut rng);
    /// assert_eq!(result.total_value, 20);
    /// ```
    pub fn run<C, S, R>(
        instance: &Instance,
        ctx: &C,
        sink: &mut S,
        config: &GraspConfig,
        rng: &mut R,
    ) -> GraspResult
    where
        C: SearchContext,
        S: SolutionSink,
        R: Rng,
    {
        config.validate().expect("invalid GraspConfig");

        let mut state = scan(instance, ctx);
        let mut cands = CandidateLists::new(instance.m());
        let mut rcl: Vec<usize> = Vec::new();

        for sack in instance.sack_indices() {
            cands.build(sack, instance, ctx, &state);

            while state.residual(sack) > 0 && !cands.is_empty(sack) {
                let (min, max) = cands.min_max(sack, instance);
                let threshold = min as f64 + config.alpha * (max - min) as f64;

                rcl.clear();
                for pos in 0..cands.len(sack) {
                    if instance.item(cands.get(sack, pos)).value as f64 >= threshold {
                        rcl.push(pos);
                    }
                }
                // the maximum-value candidate always clears the threshold
                debug_assert!(!rcl.is_empty(), "RCL empty on non-empty candidate list");

                let pos = rcl[rng.random_range(0..rcl.len())];
                let item = cands.swap_remove(sack, pos);
                state.assign(instance, item, sack);
                cands.prune(sack, instance, state.residual(sack));
            }
        }

        let found = submit(&state, ctx, sink);
        Self::into_result(found, state)
    }

    fn into_result(found: bool, state: BuildState) -> GraspResult {
        let infeasible = state.infeasible();
        let assignment = state.into_assignment();
        GraspResult {
            found,
            infeasible,
            total_value: assignment.total_value(),
            items_assigned: assignment.assigned_count(),
            assignment,
        }
    }
}
