//! Problem instance definition.

use super::{ItemIdx, SackIdx};

/// One item of the instance.
///
/// Immutable once the instance is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// External label (instance-file id), carried for reporting only.
    pub label: i64,
    /// Weight consumed from a knapsack's capacity.
    pub weight: i64,
    /// Profit contributed when the item is assigned.
    pub value: i64,
}

impl Item {
    pub fn new(label: i64, weight: i64, value: i64) -> Self {
        Self {
            label,
            weight,
            value,
        }
    }
}

/// A multiple-knapsack instance: `n` items and `m` knapsack capacities.
///
/// # Examples
///
/// ```
/// use mkp_primal::problem::{Instance, Item};
///
/// let instance = Instance::new(
///     vec![Item::new(1, 5, 10), Item::new(2, 5, 8), Item::new(3, 6, 20)],
///     vec![10],
/// )
/// .unwrap();
/// assert_eq!(instance.n(), 3);
/// assert_eq!(instance.m(), 1);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    items: Vec<Item>,
    capacities: Vec<i64>,
}

impl Instance {
    /// Builds an instance, validating that all weights and capacities are
    /// non-negative.
    pub fn new(items: Vec<Item>, capacities: Vec<i64>) -> Result<Self, String> {
        for (i, item) in items.iter().enumerate() {
            if item.weight < 0 {
                return Err(format!("item {} has negative weight {}", i, item.weight));
            }
        }
        for (k, &c) in capacities.iter().enumerate() {
            if c < 0 {
                return Err(format!("knapsack {k} has negative capacity {c}"));
            }
        }
        Ok(Self { items, capacities })
    }

    /// Number of items.
    pub fn n(&self) -> usize {
        self.items.len()
    }

    /// Number of knapsacks.
    pub fn m(&self) -> usize {
        self.capacities.len()
    }

    pub fn item(&self, item: ItemIdx) -> &Item {
        &self.items[item.0]
    }

    pub fn capacity(&self, sack: SackIdx) -> i64 {
        self.capacities[sack.0]
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacities(&self) -> &[i64] {
        &self.capacities
    }

    /// Iterates all item indices `0..n`.
    pub fn item_indices(&self) -> impl Iterator<Item = ItemIdx> {
        (0..self.n()).map(ItemIdx)
    }

    /// Iterates all knapsack indices `0..m`.
    pub fn sack_indices(&self) -> impl Iterator<Item = SackIdx> {
        (0..self.m()).map(SackIdx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ItemIdx, SackIdx};

    #[test]
    fn test_instance_accessors() {
        let instance = Instance::new(
            vec![Item::new(1, 5, 10), Item::new(2, 6, 20)],
            vec![10, 7],
        )
        .unwrap();

        assert_eq!(instance.n(), 2);
        assert_eq!(instance.m(), 2);
        assert_eq!(instance.item(ItemIdx(1)).value, 20);
        assert_eq!(instance.capacity(SackIdx(1)), 7);
        assert_eq!(instance.item_indices().count(), 2);
        assert_eq!(instance.sack_indices().count(), 2);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new(vec![], vec![]).unwrap();
        assert_eq!(instance.n(), 0);
        assert_eq!(instance.m(), 0);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = Instance::new(vec![Item::new(1, -3, 10)], vec![10]);
        assert!(result.is_err(), "negative weight should be rejected");
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let result = Instance::new(vec![Item::new(1, 3, 10)], vec![-1]);
        assert!(result.is_err(), "negative capacity should be rejected");
    }
}
