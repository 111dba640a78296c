//! Assignments and typed indices.
//!
//! Item indices, knapsack indices, and candidate-list positions are three
//! different address spaces. The first two get distinct newtypes so one can
//! never silently stand in for the other; candidate-list positions stay plain
//! `usize` and never escape the candidate-list module.

use super::Instance;
use std::fmt;

/// Index of an item, `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemIdx(pub usize);

/// Index of a knapsack, `0..m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SackIdx(pub usize);

impl fmt::Display for ItemIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

impl fmt::Display for SackIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sack#{}", self.0)
    }
}

/// A (possibly partial) item-to-knapsack assignment with its accumulated
/// value.
///
/// Each item maps to at most one knapsack; the representation makes double
/// assignment unrepresentable and [`Assignment::assign`] rejects it outright.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    sack_of: Vec<Option<SackIdx>>,
    total_value: i64,
}

impl Assignment {
    /// Creates an empty assignment over `n` items.
    pub fn empty(n: usize) -> Self {
        Self {
            sack_of: vec![None; n],
            total_value: 0,
        }
    }

    /// Records `item` as assigned to `sack`, accumulating `value`.
    ///
    /// Panics if the item is already assigned; callers guard via their
    /// coverage set.
    pub fn assign(&mut self, item: ItemIdx, sack: SackIdx, value: i64) {
        assert!(
            self.sack_of[item.0].is_none(),
            "{item} assigned twice (already in {})",
            self.sack_of[item.0].unwrap()
        );
        self.sack_of[item.0] = Some(sack);
        self.total_value += value;
    }

    /// The knapsack holding `item`, or `None` if unassigned.
    pub fn sack_of(&self, item: ItemIdx) -> Option<SackIdx> {
        self.sack_of[item.0]
    }

    /// Accumulated value of all assigned items.
    pub fn total_value(&self) -> i64 {
        self.total_value
    }

    /// Number of items covered by the instance (assigned or not).
    pub fn n_items(&self) -> usize {
        self.sack_of.len()
    }

    /// Number of assigned items.
    pub fn assigned_count(&self) -> usize {
        self.sack_of.iter().filter(|s| s.is_some()).count()
    }

    /// Iterates `(item, sack)` pairs of assigned items.
    pub fn iter_assigned(&self) -> impl Iterator<Item = (ItemIdx, SackIdx)> + '_ {
        self.sack_of
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|sack| (ItemIdx(i), sack)))
    }

    /// Full feasibility check against the instance: per-knapsack assigned
    /// weight within capacity and the stored value consistent with the
    /// assigned items.
    pub fn is_feasible(&self, instance: &Instance) -> bool {
        if self.sack_of.len() != instance.n() {
            return false;
        }
        let mut load = vec![0i64; instance.m()];
        let mut value = 0i64;
        for (item, sack) in self.iter_assigned() {
            if sack.0 >= instance.m() {
                return false;
            }
            load[sack.0] += instance.item(item).weight;
            value += instance.item(item).value;
        }
        value == self.total_value
            && instance
                .sack_indices()
                .all(|k| load[k.0] <= instance.capacity(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Item;

    fn small_instance() -> Instance {
        Instance::new(
            vec![Item::new(1, 5, 10), Item::new(2, 5, 8), Item::new(3, 6, 20)],
            vec![10, 6],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_assignment() {
        let a = Assignment::empty(3);
        assert_eq!(a.total_value(), 0);
        assert_eq!(a.assigned_count(), 0);
        assert_eq!(a.sack_of(ItemIdx(0)), None);
    }

    #[test]
    fn test_assign_accumulates_value() {
        let mut a = Assignment::empty(3);
        a.assign(ItemIdx(0), SackIdx(0), 10);
        a.assign(ItemIdx(2), SackIdx(1), 20);

        assert_eq!(a.total_value(), 30);
        assert_eq!(a.assigned_count(), 2);
        assert_eq!(a.sack_of(ItemIdx(0)), Some(SackIdx(0)));
        assert_eq!(a.sack_of(ItemIdx(1)), None);
    }

    #[test]
    #[should_panic(expected = "assigned twice")]
    fn test_double_assign_panics() {
        let mut a = Assignment::empty(2);
        a.assign(ItemIdx(0), SackIdx(0), 10);
        a.assign(ItemIdx(0), SackIdx(1), 10);
    }

    #[test]
    fn test_feasible_assignment() {
        let instance = small_instance();
        let mut a = Assignment::empty(3);
        a.assign(ItemIdx(0), SackIdx(0), 10);
        a.assign(ItemIdx(2), SackIdx(0), 20);
        // weight 5 + 6 = 11 > 10
        assert!(!a.is_feasible(&instance), "overloaded sack must be caught");

        let mut b = Assignment::empty(3);
        b.assign(ItemIdx(2), SackIdx(0), 20);
        b.assign(ItemIdx(0), SackIdx(1), 10);
        // sack 1 capacity 6, item 0 weighs 5
        assert!(b.is_feasible(&instance));
    }

    #[test]
    fn test_inconsistent_value_rejected() {
        let instance = small_instance();
        let mut a = Assignment::empty(3);
        a.assign(ItemIdx(0), SackIdx(0), 999);
        assert!(
            !a.is_feasible(&instance),
            "stored value must match item values"
        );
    }

    #[test]
    fn test_iter_assigned() {
        let mut a = Assignment::empty(3);
        a.assign(ItemIdx(1), SackIdx(0), 8);
        let pairs: Vec<_> = a.iter_assigned().collect();
        assert_eq!(pairs, vec![(ItemIdx(1), SackIdx(0))]);
    }
}
