//! Fixed-assignment scan of a search node.

use super::{FixState, SearchContext};
use crate::construction::BuildState;
use crate::problem::Instance;

/// Folds the node's forced-in decision variables into an initial
/// [`BuildState`].
///
/// Every item/knapsack variable fixed to 1 assigns the item to that
/// knapsack, shrinking the residual and extending the coverage set. An item
/// forced in for more than one knapsack keeps the first occurrence; the
/// coverage check skips the rest. Overcommitted capacities raise the
/// state's `infeasible` flag rather than erroring — the heuristics carry it
/// to the acceptance gate, which then reports "not found".
///
/// Forced-in items end up covered, which excludes them from every later
/// candidate rebuild.
pub fn scan<C: SearchContext>(instance: &Instance, ctx: &C) -> BuildState {
    let mut state = BuildState::new(instance);
    for item in instance.item_indices() {
        for sack in instance.sack_indices() {
            if ctx.fix_state(item, sack) == FixState::ForcedIn && !state.is_covered(item) {
                state.assign(instance, item, sack);
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Item, ItemIdx, SackIdx};
    use crate::search::{FixedContext, RootContext};

    fn instance() -> Instance {
        Instance::new(
            vec![Item::new(1, 5, 10), Item::new(2, 5, 8), Item::new(3, 6, 20)],
            vec![10, 6],
        )
        .unwrap()
    }

    #[test]
    fn test_scan_without_fixings() {
        let instance = instance();
        let state = scan(&instance, &RootContext::new());

        assert_eq!(state.total_value(), 0);
        assert!(!state.infeasible());
        assert_eq!(state.residual(SackIdx(0)), 10);
        assert_eq!(state.residual(SackIdx(1)), 6);
    }

    #[test]
    fn test_scan_applies_forced_in() {
        let instance = instance();
        let ctx = FixedContext::new().force_in(ItemIdx(2), SackIdx(0));
        let state = scan(&instance, &ctx);

        assert!(state.is_covered(ItemIdx(2)));
        assert_eq!(state.residual(SackIdx(0)), 4);
        assert_eq!(state.total_value(), 20);
        assert_eq!(state.assignment().sack_of(ItemIdx(2)), Some(SackIdx(0)));
        assert!(!state.infeasible());
    }

    #[test]
    fn test_scan_overcommitted_sets_infeasible() {
        let instance = instance();
        // items 0 and 2 together weigh 11 > 6
        let ctx = FixedContext::new()
            .force_in(ItemIdx(0), SackIdx(1))
            .force_in(ItemIdx(2), SackIdx(1));
        let state = scan(&instance, &ctx);

        assert!(state.infeasible());
        assert!(state.residual(SackIdx(1)) < 0);
    }

    #[test]
    fn test_scan_duplicate_forced_in_keeps_first() {
        let instance = instance();
        let ctx = FixedContext::new()
            .force_in(ItemIdx(0), SackIdx(0))
            .force_in(ItemIdx(0), SackIdx(1));
        let state = scan(&instance, &ctx);

        assert_eq!(state.assignment().sack_of(ItemIdx(0)), Some(SackIdx(0)));
        assert_eq!(state.residual(SackIdx(1)), 6, "second fixing is skipped");
        assert_eq!(state.total_value(), 10);
    }
}
