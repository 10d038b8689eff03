use indexmap::IndexSet;

use crate::variants::Combination;

/// The result of checking that groups of move names do not share any name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartitionCheck {
    /// Names appearing in more than one group, in the order they were first repeated.
    pub duplicates: IndexSet<String>,
}

impl PartitionCheck {
    /// Checks if no name is shared between groups.
    pub fn is_disjoint(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Checks that no move name appears in more than one of the given groups.
pub fn check_partition<'a, G, N>(groups: G) -> PartitionCheck
where
    G: IntoIterator<Item = N>,
    N: IntoIterator<Item = &'a str>,
{
    let mut seen = IndexSet::new();
    let mut duplicates = IndexSet::new();
    for group in groups {
        let mut group = group.into_iter().collect::<Vec<_>>();
        group.sort();
        group.dedup();
        for name in group {
            if !seen.insert(name) {
                duplicates.insert(name.to_owned());
            }
        }
    }
    PartitionCheck { duplicates }
}

/// The verdict on a single combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinationStatus {
    /// No move is repeated.
    Valid,
    /// Only slashed alternatives are repeated.
    Discarded(IndexSet<String>),
    /// A fixed move is repeated.
    Invalid(IndexSet<String>),
}

/// Checks a combination, given the names of the moves that were fixed in the input set.
pub fn check_combination(combination: &Combination, fixed: &[String]) -> CombinationStatus {
    let check = check_partition(
        combination
            .iter()
            .map(|group| group.names.iter().map(|name| name.as_str())),
    );
    if check.is_disjoint() {
        return CombinationStatus::Valid;
    }
    let fixed_check = check_partition([
        fixed.iter().map(|name| name.as_str()).collect::<Vec<_>>(),
        check.duplicates.iter().map(|name| name.as_str()).collect(),
    ]);
    if fixed_check.is_disjoint() {
        CombinationStatus::Discarded(check.duplicates)
    } else {
        CombinationStatus::Invalid(check.duplicates)
    }
}
