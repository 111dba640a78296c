//! Per-knapsack candidate lists.

use super::BuildState;
use crate::problem::{Instance, ItemIdx, SackIdx};
use crate::search::{FixState, SearchContext};

/// Dense per-knapsack candidate arrays with O(1) swap-removal.
///
/// The list for knapsack `k` holds exactly the uncovered items that are not
/// forced out of `k` and whose weight fits the residual at build time.
/// **Order carries no meaning**: removal swaps the last element into the
/// freed position, so positions are only valid until the next mutation.
#[derive(Debug, Clone)]
pub struct CandidateLists {
    lists: Vec<Vec<ItemIdx>>,
}

impl CandidateLists {
    /// Empty lists for `m` knapsacks.
    pub fn new(m: usize) -> Self {
        Self {
            lists: vec![Vec::new(); m],
        }
    }

    /// Rebuilds the list for `sack` from scratch: every uncovered item not
    /// forced out of this knapsack whose weight fits the current residual.
    ///
    /// Runs once at the start of a knapsack's construction phase.
    pub fn build<C: SearchContext>(
        &mut self,
        sack: SackIdx,
        instance: &Instance,
        ctx: &C,
        state: &BuildState,
    ) {
        let list = &mut self.lists[sack.0];
        list.clear();
        for item in instance.item_indices() {
            if state.is_covered(item) {
                continue;
            }
            if ctx.fix_state(item, sack) == FixState::ForcedOut {
                continue;
            }
            if instance.item(item).weight <= state.residual(sack) {
                list.push(item);
            }
        }
    }

    pub fn len(&self, sack: SackIdx) -> usize {
        self.lists[sack.0].len()
    }

    pub fn is_empty(&self, sack: SackIdx) -> bool {
        self.lists[sack.0].is_empty()
    }

    /// Item at `pos`. Positions are invalidated by any mutation.
    pub fn get(&self, sack: SackIdx, pos: usize) -> ItemIdx {
        self.lists[sack.0][pos]
    }

    /// Current candidates for `sack`, in no particular order.
    pub fn candidates(&self, sack: SackIdx) -> &[ItemIdx] {
        &self.lists[sack.0]
    }

    /// Removes and returns the candidate at `pos`, swapping the last
    /// element into its place.
    pub fn swap_remove(&mut self, sack: SackIdx, pos: usize) -> ItemIdx {
        self.lists[sack.0].swap_remove(pos)
    }

    /// Minimum and maximum candidate value for `sack`.
    ///
    /// Must not be called on an empty list.
    pub fn min_max(&self, sack: SackIdx, instance: &Instance) -> (i64, i64) {
        let list = &self.lists[sack.0];
        debug_assert!(!list.is_empty(), "min_max on empty candidate list");
        let mut min = instance.item(list[0]).value;
        let mut max = min;
        for &item in &list[1..] {
            let v = instance.item(item).value;
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        (min, max)
    }

    /// Drops every candidate whose weight exceeds `residual`.
    ///
    /// The position only advances when nothing was removed, so the element
    /// swapped in from the tail is re-examined before moving on; after the
    /// pass every remaining candidate fits.
    pub fn prune(&mut self, sack: SackIdx, instance: &Instance, residual: i64) {
        let list = &mut self.lists[sack.0];
        let mut pos = 0;
        while pos < list.len() {
            if instance.item(list[pos]).weight > residual {
                list.swap_remove(pos);
            } else {
                pos += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Item;
    use crate::search::{FixedContext, RootContext};

    fn instance() -> Instance {
        Instance::new(
            vec![
                Item::new(1, 5, 10),
                Item::new(2, 5, 8),
                Item::new(3, 6, 20),
                Item::new(4, 12, 40),
            ],
            vec![10, 6],
        )
        .unwrap()
    }

    #[test]
    fn test_build_filters_by_weight() {
        let instance = instance();
        let ctx = RootContext::new();
        let state = BuildState::new(&instance);
        let mut cands = CandidateLists::new(instance.m());

        cands.build(SackIdx(0), &instance, &ctx, &state);
        // item 4 (weight 12) exceeds capacity 10
        assert_eq!(cands.len(SackIdx(0)), 3);

        cands.build(SackIdx(1), &instance, &ctx, &state);
        // only items of weight <= 6 fit sack 1
        assert_eq!(cands.len(SackIdx(1)), 3);
    }

    #[test]
    fn test_build_skips_covered_and_forced_out() {
        let instance = instance();
        let ctx = FixedContext::new().force_out(ItemIdx(1), SackIdx(0));
        let mut state = BuildState::new(&instance);
        state.assign(&instance, ItemIdx(0), SackIdx(1));

        let mut cands = CandidateLists::new(instance.m());
        cands.build(SackIdx(0), &instance, &ctx, &state);

        let list = cands.candidates(SackIdx(0));
        assert!(!list.contains(&ItemIdx(0)), "covered item must be excluded");
        assert!(
            !list.contains(&ItemIdx(1)),
            "forced-out item must be excluded"
        );
        assert_eq!(list, &[ItemIdx(2)]);
    }

    #[test]
    fn test_min_max() {
        let instance = instance();
        let ctx = RootContext::new();
        let state = BuildState::new(&instance);
        let mut cands = CandidateLists::new(instance.m());

        cands.build(SackIdx(0), &instance, &ctx, &state);
        let (min, max) = cands.min_max(SackIdx(0), &instance);
        assert_eq!(min, 8);
        assert_eq!(max, 20);
    }

    #[test]
    fn test_swap_remove() {
        let instance = instance();
        let ctx = RootContext::new();
        let state = BuildState::new(&instance);
        let mut cands = CandidateLists::new(instance.m());

        cands.build(SackIdx(0), &instance, &ctx, &state);
        let removed = cands.swap_remove(SackIdx(0), 0);
        assert_eq!(removed, ItemIdx(0));
        assert_eq!(cands.len(SackIdx(0)), 2);
        assert!(!cands.candidates(SackIdx(0)).contains(&ItemIdx(0)));
    }

    #[test]
    fn test_prune_removes_all_violators() {
        let instance = Instance::new(
            vec![
                Item::new(1, 9, 1),
                Item::new(2, 8, 1),
                Item::new(3, 2, 1),
                Item::new(4, 7, 1),
                Item::new(5, 3, 1),
            ],
            vec![10],
        )
        .unwrap();
        let ctx = RootContext::new();
        let state = BuildState::new(&instance);
        let mut cands = CandidateLists::new(1);
        cands.build(SackIdx(0), &instance, &ctx, &state);
        assert_eq!(cands.len(SackIdx(0)), 5);

        // adjacent violators exercise the swap-in re-examination
        cands.prune(SackIdx(0), &instance, 4);
        let list = cands.candidates(SackIdx(0));
        assert_eq!(list.len(), 2);
        for &item in list {
            assert!(
                instance.item(item).weight <= 4,
                "{item} survives prune but weighs {}",
                instance.item(item).weight
            );
        }
    }

    #[test]
    fn test_prune_to_empty() {
        let instance = instance();
        let ctx = RootContext::new();
        let state = BuildState::new(&instance);
        let mut cands = CandidateLists::new(instance.m());

        cands.build(SackIdx(0), &instance, &ctx, &state);
        cands.prune(SackIdx(0), &instance, 0);
        assert!(cands.is_empty(SackIdx(0)));
    }
}
