use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single stat value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "spatk"]
    #[alias = "Sp.Atk"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "spdef"]
    #[alias = "Sp.Def"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

impl Stat {
    /// All stats, in display order.
    pub const ALL: [Stat; 6] = [
        Stat::HP,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spe,
    ];
}

/// A map of values for each stat, ordered by stat.
pub type StatMap<T> = BTreeMap<Stat, T>;

/// A table of stat values where only some stats are defined.
///
/// Used for IV overrides, where a missing stat keeps whatever value it had before.
pub type PartialStatTable = StatMap<u16>;

fn next_stat_for_iterator(stat: Stat) -> Option<Stat> {
    match stat {
        Stat::HP => Some(Stat::Atk),
        Stat::Atk => Some(Stat::Def),
        Stat::Def => Some(Stat::SpAtk),
        Stat::SpAtk => Some(Stat::SpDef),
        Stat::SpDef => Some(Stat::Spe),
        Stat::Spe => None,
    }
}

/// Iterator over the entries of a [`StatTable`].
pub struct StatTableEntries<'s> {
    table: &'s StatTable,
    next_stat: Option<Stat>,
}

impl<'s> StatTableEntries<'s> {
    fn new(table: &'s StatTable) -> Self {
        Self {
            table,
            next_stat: Some(Stat::HP),
        }
    }
}

impl<'s> Iterator for StatTableEntries<'s> {
    type Item = (Stat, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let stat = self.next_stat?;
        let value = self.table.get(stat);
        self.next_stat = next_stat_for_iterator(stat);
        Some((stat, value))
    }
}

/// A full stat table.
///
/// Similar to [`PartialStatTable`], but all values must be defined.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default)]
    pub atk: u16,
    #[serde(default)]
    pub def: u16,
    #[serde(default)]
    pub spa: u16,
    #[serde(default)]
    pub spd: u16,
    #[serde(default)]
    pub spe: u16,
}

impl StatTable {
    /// Creates a table with the same value for every stat.
    pub fn filled(value: u16) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given value in the stat table.
    pub fn set(&mut self, stat: Stat, value: u16) {
        let stat = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *stat = value;
    }

    /// Creates an iterator over all stat entries.
    pub fn entries<'s>(&'s self) -> StatTableEntries<'s> {
        StatTableEntries::new(self)
    }

    /// Creates an iterator over all stat values.
    pub fn values<'s>(&'s self) -> impl Iterator<Item = u16> + 's {
        self.entries().map(|(_, value)| value)
    }

    /// Sums up all stats in the table.
    pub fn sum(&self) -> u32 {
        self.values().map(|value| value as u32).sum()
    }
}

impl FromIterator<(Stat, u16)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, u16)>>(iter: T) -> Self {
        let mut out = StatTable::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}

impl<'s> IntoIterator for &'s StatTable {
    type IntoIter = StatTableEntries<'s>;
    type Item = (Stat, u16);
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
