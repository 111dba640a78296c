//! Per-invocation working state of a construction run.

use crate::problem::{Assignment, Instance, ItemIdx, SackIdx};

/// Residual capacities, coverage markers, and the partial assignment of one
/// construction run.
///
/// `residual[k]` always equals `capacity[k]` minus the weight assigned to
/// knapsack `k` so far, and is non-increasing within a knapsack's
/// construction phase. `covered[i]` marks items already placed (by the
/// node's fixed variables or by the heuristic itself); covered items are
/// excluded from every candidate rebuild.
#[derive(Debug, Clone)]
pub struct BuildState {
    residual: Vec<i64>,
    covered: Vec<bool>,
    assignment: Assignment,
    infeasible: bool,
}

impl BuildState {
    /// Fresh state: full residuals, nothing covered, empty assignment.
    pub fn new(instance: &Instance) -> Self {
        Self {
            residual: instance.capacities().to_vec(),
            covered: vec![false; instance.n()],
            assignment: Assignment::empty(instance.n()),
            infeasible: false,
        }
    }

    pub fn residual(&self, sack: SackIdx) -> i64 {
        self.residual[sack.0]
    }

    pub fn is_covered(&self, item: ItemIdx) -> bool {
        self.covered[item.0]
    }

    pub fn total_value(&self) -> i64 {
        self.assignment.total_value()
    }

    /// Raised when applying forced assignments overflowed a knapsack.
    pub fn infeasible(&self) -> bool {
        self.infeasible
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }

    /// Places `item` into `sack`: shrinks the residual, marks coverage,
    /// accumulates value. A residual driven below zero raises the
    /// `infeasible` flag instead of panicking, leaving callers to discard
    /// the run.
    pub fn assign(&mut self, instance: &Instance, item: ItemIdx, sack: SackIdx) {
        let it = instance.item(item);
        self.residual[sack.0] -= it.weight;
        self.covered[item.0] = true;
        self.assignment.assign(item, sack, it.value);
        if self.residual[sack.0] < 0 {
            self.infeasible = true;
        }
    }
}
