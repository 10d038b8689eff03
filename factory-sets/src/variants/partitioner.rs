use crate::variants::{
    ImpliedAttributes,
    MoveKind,
    MoveOccurrences,
    ResolvedMove,
    VariantRules,
    classify,
};

/// Move names chosen together for one slot of a variant.
///
/// A group of several names stays slashed in the output. Only single-name groups carry implied
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGroup {
    pub names: Vec<String>,
    pub implied: Option<ImpliedAttributes>,
}

impl NameGroup {
    /// Creates a group of a single move name.
    pub fn single<S>(name: S, implied: Option<ImpliedAttributes>) -> Self
    where
        S: Into<String>,
    {
        Self {
            names: vec![name.into()],
            implied,
        }
    }

    /// Creates a group of names that carries no implied attributes.
    pub fn slashed<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(|name| name.into()).collect(),
            implied: None,
        }
    }
}

/// Removes repeated alternatives from a resolved slot, keeping the first spelling of each.
pub fn dedup_alternatives(slot: Vec<ResolvedMove>) -> Vec<ResolvedMove> {
    let mut out = Vec::with_capacity(slot.len());
    for mov in slot {
        if !out
            .iter()
            .any(|seen: &ResolvedMove| seen.choice_key() == mov.choice_key())
        {
            out.push(mov);
        }
    }
    out
}

/// Splits a resolved move slot into groups that must be chosen between separately.
///
/// Alternatives that can stay slashed are collected into one group that comes first. Every other
/// alternative gets a group of its own, in the order written.
pub fn partition_slot(
    slot: &[ResolvedMove],
    occurrences: &MoveOccurrences,
    rules: &VariantRules,
) -> Vec<NameGroup> {
    let mut base = Vec::new();
    let mut split = Vec::new();
    for mov in slot {
        match classify(mov, slot.len(), occurrences, rules) {
            MoveKind::Base => base.push(mov.name.clone()),
            MoveKind::Implied(implied) => {
                split.push(NameGroup::single(mov.name.clone(), Some(implied)))
            }
            MoveKind::UniqueForced => split.push(NameGroup::single(mov.name.clone(), None)),
        }
    }
    let mut groups = Vec::with_capacity(split.len() + 1);
    if !base.is_empty() {
        groups.push(NameGroup::slashed(base));
    }
    groups.extend(split);
    groups
}
