use ahash::HashMap;
use factory_data::Id;

use crate::{
    sets::{
        MoveSlot,
        SetData,
    },
    variants::{
        Combination,
        MoveResolver,
        ResolvedMove,
        VariantProblem,
        VariantRules,
    },
};

/// Creates the set for a single combination of move groups.
///
/// The base set is left untouched. Implied IVs overwrite only the stats they list; implied
/// happiness overwrites any happiness the base set had.
pub fn materialize(base: &SetData, combination: &Combination) -> SetData {
    let mut set = base.clone();
    set.moves = combination
        .iter()
        .map(|group| MoveSlot::new(group.names.iter().cloned()))
        .collect();
    for implied in combination.iter().filter_map(|group| group.implied.as_ref()) {
        set.ivs
            .extend(implied.ivs.iter().map(|(stat, value)| (*stat, *value)));
        if let Some(happiness) = implied.happiness {
            set.happiness = Some(happiness);
        }
    }
    set
}

/// Checks a materialized set for repeated moves that only show up once names are resolved.
///
/// Two typed spellings of the same move, or both happiness-based moves, cannot coexist in one set.
pub fn sweep_resolved(
    set: &SetData,
    resolver: &dyn MoveResolver,
    rules: &VariantRules,
) -> Vec<VariantProblem> {
    let mut problems = Vec::new();
    let mut first_slot = HashMap::<Id, usize>::default();
    let mut happiness_slot = None;
    for (i, slot) in set.moves.iter().enumerate() {
        for name in slot.iter() {
            let mov = resolver
                .resolve_move(name)
                .unwrap_or_else(|| ResolvedMove::unknown(name));

            match first_slot.get(&mov.id) {
                Some(slot) if *slot < i => problems.push(VariantProblem::DuplicateMove {
                    name: mov.name.clone(),
                }),
                Some(_) => (),
                None => {
                    first_slot.insert(mov.id.clone(), i);
                }
            }

            if rules.happiness_moves.contains(&mov.id) {
                match happiness_slot {
                    Some(slot) if slot < i => {
                        problems.push(VariantProblem::DuplicateHappinessMoves)
                    }
                    Some(_) => (),
                    None => happiness_slot = Some(i),
                }
            }
        }
    }
    problems
}
