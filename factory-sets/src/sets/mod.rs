mod move_slot;
mod set;
mod species_entry;

pub use move_slot::MoveSlot;
pub use set::{
    DEFAULT_IV,
    MAX_MOVE_SLOTS,
    SetData,
};
pub use species_entry::{
    FactorySets,
    SpeciesFlags,
    SpeciesTierEntry,
    TierSets,
};
