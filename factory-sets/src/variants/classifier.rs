use factory_data::PartialStatTable;

use crate::variants::{
    MoveOccurrences,
    ResolvedMove,
    VariantRules,
};

/// Attributes of a set that are forced by choosing a move.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImpliedAttributes {
    /// IVs to overwrite. Stats not listed keep their value.
    pub ivs: PartialStatTable,
    /// Happiness to overwrite.
    pub happiness: Option<u8>,
}

/// How a move behaves when split out of a move slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveKind {
    /// The move can stay slashed with other alternatives.
    Base,
    /// The move forces other attributes of the set, so it must be split into its own variant.
    Implied(ImpliedAttributes),
    /// The move must be split into its own variant, but forces nothing else.
    UniqueForced,
}

/// Classifies a move alternative of a slot.
///
/// `slot_alternatives` is the number of distinct alternatives in the move's slot.
pub fn classify(
    mov: &ResolvedMove,
    slot_alternatives: usize,
    occurrences: &MoveOccurrences,
    rules: &VariantRules,
) -> MoveKind {
    if let Some(typ) = mov.hidden_power_type {
        return MoveKind::Implied(ImpliedAttributes {
            ivs: rules.hidden_power_ivs(typ),
            happiness: None,
        });
    }
    if let Some(happiness) = rules.happiness_moves.happiness_for(&mov.id) {
        return MoveKind::Implied(ImpliedAttributes {
            ivs: PartialStatTable::default(),
            happiness: Some(happiness),
        });
    }
    if slot_alternatives > 1 && (rules.is_unique_forced(&mov.id) || occurrences.is_repeated(mov))
    {
        return MoveKind::UniqueForced;
    }
    MoveKind::Base
}
