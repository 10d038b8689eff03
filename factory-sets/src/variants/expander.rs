use indexmap::IndexSet;
use log::debug;

use crate::{
    sets::SetData,
    variants::{
        Combination,
        CombinationStatus,
        MoveOccurrences,
        MoveResolver,
        ResolvedMove,
        VariantProblem,
        VariantRules,
        check_combination,
        combine,
        dedup_alternatives,
        materialize,
        partition_slot,
        sweep_resolved,
    },
};

/// Move names that appear more than once in a combination.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub duplicates: IndexSet<String>,
}

impl Conflict {
    fn moves(&self) -> Vec<String> {
        self.duplicates.iter().cloned().collect()
    }
}

/// A set produced by expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub set: SetData,
    /// The repeated alternatives, if the variant was discarded.
    pub conflict: Option<Conflict>,
}

/// A combination that repeats a fixed move, so it never becomes a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationConflict {
    pub combination: Combination,
    pub conflict: Conflict,
}

/// A variant that passed the combination check but repeats a move once names are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedVariant {
    pub set: SetData,
    pub problems: Vec<VariantProblem>,
}

/// All outcomes of expanding one set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Expansion {
    /// Variants with no repeated moves, in combination order.
    pub valid: Vec<Variant>,
    /// Variants repeating slashed alternatives.
    pub discarded: Vec<Variant>,
    /// Combinations repeating a fixed move.
    pub invalid: Vec<CombinationConflict>,
    /// Variants removed by the resolved-name sweep.
    pub dropped: Vec<DroppedVariant>,
}

impl Expansion {
    /// The resolved sets that should be kept.
    pub fn valid_sets(&self) -> impl Iterator<Item = &SetData> {
        self.valid.iter().map(|variant| &variant.set)
    }

    /// Collects every problem of the expansion.
    ///
    /// Discarded variants are only problems in strict mode.
    pub fn problems(&self, strict: bool) -> Vec<VariantProblem> {
        let mut problems = self
            .invalid
            .iter()
            .map(|invalid| VariantProblem::FatalConflict {
                moves: invalid.conflict.moves(),
            })
            .collect::<Vec<_>>();
        if strict {
            problems.extend(
                self.discarded
                    .iter()
                    .filter_map(|variant| variant.conflict.as_ref())
                    .map(|conflict| VariantProblem::ToleratedConflict {
                        moves: conflict.moves(),
                    }),
            );
        }
        problems.extend(
            self.dropped
                .iter()
                .flat_map(|dropped| dropped.problems.iter().cloned()),
        );
        problems
    }
}

/// Expands sets with slashed move slots into every consistent variant.
///
/// Each set is expanded in five steps:
/// 1. Every alternative of every slot is classified ([`classify`][`crate::variants::classify`]).
/// 2. Each slot is split into groups of names that can be chosen together.
/// 3. Every choice of one group per slot is enumerated.
/// 4. Each combination is checked for repeated moves.
/// 5. Accepted combinations become sets with their implied attributes applied.
pub struct VariantExpander<'r> {
    resolver: &'r dyn MoveResolver,
    rules: &'r VariantRules,
}

impl<'r> VariantExpander<'r> {
    /// Creates a new expander.
    pub fn new(resolver: &'r dyn MoveResolver, rules: &'r VariantRules) -> Self {
        Self { resolver, rules }
    }

    fn resolve(&self, name: &str) -> ResolvedMove {
        self.resolver
            .resolve_move(name)
            .unwrap_or_else(|| ResolvedMove::unknown(name))
    }

    /// Expands a set.
    ///
    /// Never fails: every problem is reported in the returned [`Expansion`].
    pub fn expand(&self, set: &SetData) -> Expansion {
        let slots = set
            .moves
            .iter()
            .map(|slot| dedup_alternatives(slot.iter().map(|name| self.resolve(name)).collect()))
            .collect::<Vec<_>>();
        let occurrences = MoveOccurrences::new(slots.iter());
        let fixed = slots
            .iter()
            .filter_map(|slot| match slot.as_slice() {
                [mov] => Some(mov.name.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();
        let partitioned = slots
            .iter()
            .map(|slot| partition_slot(slot, &occurrences, self.rules))
            .collect::<Vec<_>>();

        let combinations = combine(&partitioned);
        debug!(
            "expanding {} into {} combinations",
            set.species,
            combinations.len()
        );

        let mut expansion = Expansion::default();
        for combination in combinations {
            match check_combination(&combination, &fixed) {
                CombinationStatus::Valid => {
                    let variant = materialize(set, &combination);
                    let problems = sweep_resolved(&variant, self.resolver, self.rules);
                    if problems.is_empty() {
                        expansion.valid.push(Variant {
                            set: variant,
                            conflict: None,
                        });
                    } else {
                        expansion.dropped.push(DroppedVariant {
                            set: variant,
                            problems,
                        });
                    }
                }
                CombinationStatus::Discarded(duplicates) => {
                    expansion.discarded.push(Variant {
                        set: materialize(set, &combination),
                        conflict: Some(Conflict { duplicates }),
                    });
                }
                CombinationStatus::Invalid(duplicates) => {
                    expansion.invalid.push(CombinationConflict {
                        combination,
                        conflict: Conflict { duplicates },
                    });
                }
            }
        }
        debug!(
            "{}: {} valid, {} discarded, {} invalid, {} dropped",
            set.species,
            expansion.valid.len(),
            expansion.discarded.len(),
            expansion.invalid.len(),
            expansion.dropped.len()
        );
        expansion
    }
}
