use ahash::HashMap;
use factory_data::Id;

use crate::variants::ResolvedMove;

/// Counts the number of move slots that offer each move choice within a single set.
#[derive(Debug, Default, Clone)]
pub struct MoveOccurrences {
    slots: HashMap<Id, usize>,
}

impl MoveOccurrences {
    /// Counts occurrences over the given resolved move slots.
    ///
    /// A move offered twice within the same slot counts once.
    pub fn new<'m, S, M>(slots: S) -> Self
    where
        S: IntoIterator<Item = M>,
        M: IntoIterator<Item = &'m ResolvedMove>,
    {
        let mut occurrences = Self::default();
        for slot in slots {
            occurrences.add_slot(slot);
        }
        occurrences
    }

    /// Records one move slot.
    pub fn add_slot<'m, M>(&mut self, slot: M)
    where
        M: IntoIterator<Item = &'m ResolvedMove>,
    {
        let mut keys = slot
            .into_iter()
            .map(|mov| mov.choice_key())
            .collect::<Vec<_>>();
        keys.sort();
        keys.dedup();
        for key in keys {
            *self.slots.entry(key).or_default() += 1;
        }
    }

    /// The number of slots offering the move.
    pub fn slots_offering(&self, mov: &ResolvedMove) -> usize {
        self.slots.get(&mov.choice_key()).copied().unwrap_or_default()
    }

    /// Checks if the move is offered by more than one slot.
    pub fn is_repeated(&self, mov: &ResolvedMove) -> bool {
        self.slots_offering(mov) > 1
    }
}
