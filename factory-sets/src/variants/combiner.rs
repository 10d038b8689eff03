use itertools::Itertools;

use crate::variants::NameGroup;

/// One group chosen for every slot of a set, in slot order.
pub type Combination = Vec<NameGroup>;

/// Produces every way of choosing one group per slot.
///
/// The first slot varies slowest. A set without slots has exactly one (empty) combination, and a
/// slot without groups leaves no combinations at all.
pub fn combine(slots: &[Vec<NameGroup>]) -> Vec<Combination> {
    if slots.is_empty() {
        return vec![Combination::new()];
    }
    slots
        .iter()
        .map(|groups| groups.iter().cloned())
        .multi_cartesian_product()
        .collect()
}
