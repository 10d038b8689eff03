use factory_data::{
    Gender,
    PartialStatTable,
    Stat,
    StatTable,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::sets::MoveSlot;

/// The number of move slots a set may fill.
pub const MAX_MOVE_SLOTS: usize = 4;

/// The IV of a stat that a set does not set explicitly.
pub const DEFAULT_IV: u16 = 31;

fn is_false(value: &bool) -> bool {
    !*value
}

/// One candidate build for a species.
///
/// Sets coming out of the parser may list several alternatives per move slot. Sets coming out of
/// variant expansion have those alternatives split into separate sets wherever the choice changes
/// something else about the set.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetData {
    /// Species name, including forme if applicable.
    pub species: String,
    /// Gender.
    #[serde(default)]
    pub gender: Gender,
    /// Held item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    /// Ability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    /// Nature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
    /// Level, if it differs from the format default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Shiny?
    #[serde(default, skip_serializing_if = "is_false")]
    pub shiny: bool,
    /// Happiness value, if it must be something specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happiness: Option<u8>,
    /// Effort values.
    #[serde(default)]
    pub evs: StatTable,
    /// Individual values that differ from [`DEFAULT_IV`].
    #[serde(default, skip_serializing_if = "PartialStatTable::is_empty")]
    pub ivs: PartialStatTable,
    /// Move slots.
    pub moves: Vec<MoveSlot>,
}

impl SetData {
    /// The IV for the given stat.
    pub fn iv(&self, stat: Stat) -> u16 {
        self.ivs.get(&stat).cloned().unwrap_or(DEFAULT_IV)
    }

    /// Checks if every move slot holds exactly one move.
    pub fn is_resolved(&self) -> bool {
        self.moves.iter().all(|slot| slot.is_fixed())
    }

    /// Iterates over every move name in every slot.
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().flat_map(|slot| slot.iter())
    }
}
