//! Read-only search-node context and the solution-submission seam.

use crate::problem::{Assignment, Instance, ItemIdx, SackIdx};
use std::collections::HashMap;

/// Numeric tolerance for bound classification and improvement tests.
pub const EPSILON: f64 = 1e-6;

/// Fixing state of one item/knapsack decision variable at the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixState {
    /// Lower bound at 1: the item must go into this knapsack.
    ForcedIn,
    /// Upper bound at 0: the item may not go into this knapsack.
    ForcedOut,
    /// Undecided at this node.
    Free,
}

impl FixState {
    /// Classifies LP bounds of a binary variable.
    pub fn from_bounds(lb: f64, ub: f64) -> Self {
        if lb > 1.0 - EPSILON {
            FixState::ForcedIn
        } else if ub < EPSILON {
            FixState::ForcedOut
        } else {
            FixState::Free
        }
    }
}

/// Read-only view of the current search node.
///
/// Implemented by the external search driver; the in-crate implementations
/// ([`RootContext`], [`FixedContext`]) exist for tests and standalone use.
pub trait SearchContext {
    /// Fixing state of the decision variable "`item` in `sack`".
    fn fix_state(&self, item: ItemIdx, sack: SackIdx) -> FixState;

    /// Value of the incumbent (best known) solution, `f64::NEG_INFINITY`
    /// when none exists.
    fn best_value(&self) -> f64;
}

/// Receives constructed assignments for storage.
///
/// Implementations must independently re-validate feasibility; the
/// heuristics rely on that re-check as the final gate.
pub trait SolutionSink {
    /// Attempts to store the assignment, returning whether it was accepted.
    fn try_store(&mut self, assignment: &Assignment) -> bool;
}

/// Root-node context: every variable free, with an optional incumbent value.
#[derive(Debug, Clone)]
pub struct RootContext {
    best: f64,
}

impl RootContext {
    pub fn new() -> Self {
        Self {
            best: f64::NEG_INFINITY,
        }
    }

    pub fn with_best_value(mut self, best: f64) -> Self {
        self.best = best;
        self
    }
}

impl Default for RootContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchContext for RootContext {
    fn fix_state(&self, _item: ItemIdx, _sack: SackIdx) -> FixState {
        FixState::Free
    }

    fn best_value(&self) -> f64 {
        self.best
    }
}

/// A context with an explicit fixing table, everything else free.
#[derive(Debug, Clone)]
pub struct FixedContext {
    fixes: HashMap<(ItemIdx, SackIdx), FixState>,
    best: f64,
}

impl FixedContext {
    pub fn new() -> Self {
        Self {
            fixes: HashMap::new(),
            best: f64::NEG_INFINITY,
        }
    }

    pub fn force_in(mut self, item: ItemIdx, sack: SackIdx) -> Self {
        self.fixes.insert((item, sack), FixState::ForcedIn);
        self
    }

    pub fn force_out(mut self, item: ItemIdx, sack: SackIdx) -> Self {
        self.fixes.insert((item, sack), FixState::ForcedOut);
        self
    }

    pub fn with_best_value(mut self, best: f64) -> Self {
        self.best = best;
        self
    }
}

impl Default for FixedContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchContext for FixedContext {
    fn fix_state(&self, item: ItemIdx, sack: SackIdx) -> FixState {
        self.fixes
            .get(&(item, sack))
            .copied()
            .unwrap_or(FixState::Free)
    }

    fn best_value(&self) -> f64 {
        self.best
    }
}

/// In-memory solution store that keeps the best feasible assignment seen.
///
/// Stands in for the solver's solution pool: [`SolutionSink::try_store`]
/// re-checks feasibility against the instance and rejects non-improving
/// submissions.
#[derive(Debug, Clone)]
pub struct SolutionPool<'a> {
    instance: &'a Instance,
    best: Option<Assignment>,
}

impl<'a> SolutionPool<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            best: None,
        }
    }

    /// Best stored assignment, if any.
    pub fn best(&self) -> Option<&Assignment> {
        self.best.as_ref()
    }

    /// Value of the best stored assignment, `NEG_INFINITY` when empty.
    pub fn best_value(&self) -> f64 {
        self.best
            .as_ref()
            .map_or(f64::NEG_INFINITY, |a| a.total_value() as f64)
    }
}

impl SolutionSink for SolutionPool<'_> {
    fn try_store(&mut self, assignment: &Assignment) -> bool {
        if !assignment.is_feasible(self.instance) {
            return false;
        }
        let improves = self
            .best
            .as_ref()
            .is_none_or(|b| assignment.total_value() > b.total_value());
        if improves {
            self.best = Some(assignment.clone());
        }
        improves
    }
}
