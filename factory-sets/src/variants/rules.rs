use factory_data::{
    Id,
    PartialStatTable,
    Type,
};
use hashbrown::{
    HashMap,
    HashSet,
};
use serde::{
    Deserialize,
    Serialize,
};

/// The pair of moves whose power depends on happiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HappinessMoves {
    /// Move that wants minimum happiness.
    pub low: Id,
    /// Move that wants maximum happiness.
    pub high: Id,
}

impl HappinessMoves {
    pub const LOW_HAPPINESS: u8 = 0;
    pub const HIGH_HAPPINESS: u8 = 255;

    /// The happiness a set must have to use the given move, if any.
    pub fn happiness_for(&self, id: &Id) -> Option<u8> {
        if *id == self.low {
            Some(Self::LOW_HAPPINESS)
        } else if *id == self.high {
            Some(Self::HIGH_HAPPINESS)
        } else {
            None
        }
    }

    /// Checks if the move is one of the pair.
    pub fn contains(&self, id: &Id) -> bool {
        *id == self.low || *id == self.high
    }
}

impl Default for HappinessMoves {
    fn default() -> Self {
        Self {
            low: Id::from("frustration"),
            high: Id::from("return"),
        }
    }
}

fn default_unique_forced_moves() -> HashSet<Id> {
    [
        "stealthrock",
        "spikes",
        "toxicspikes",
        "rapidspin",
        "defog",
        "batonpass",
    ]
    .into_iter()
    .map(Id::from)
    .collect()
}

/// Rules for splitting slashed move slots into separate variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantRules {
    /// IVs forced by each Hidden Power type.
    ///
    /// A type with no entry forces no IVs.
    pub hidden_power_ivs: HashMap<Type, PartialStatTable>,
    /// Moves that force a happiness value.
    pub happiness_moves: HappinessMoves,
    /// Moves that always get their own variant when slashed with something else.
    pub unique_forced_moves: HashSet<Id>,
}

impl VariantRules {
    /// The IVs forced by the given Hidden Power type.
    pub fn hidden_power_ivs(&self, typ: Type) -> PartialStatTable {
        self.hidden_power_ivs.get(&typ).cloned().unwrap_or_default()
    }

    /// Checks if the move is always split out of slashed slots.
    pub fn is_unique_forced(&self, id: &Id) -> bool {
        self.unique_forced_moves.contains(id)
    }
}

impl Default for VariantRules {
    fn default() -> Self {
        Self {
            hidden_power_ivs: HashMap::default(),
            happiness_moves: HappinessMoves::default(),
            unique_forced_moves: default_unique_forced_moves(),
        }
    }
}

#[cfg(test)]
mod variant_rules_test {
    use factory_data::{
        Id,
        Stat,
        Type,
    };
    use pretty_assertions::assert_eq;

    use crate::variants::{
        HappinessMoves,
        VariantRules,
    };

    #[test]
    fn defaults_to_hazard_and_pivot_moves() {
        let rules = VariantRules::default();
        for id in [
            "stealthrock",
            "spikes",
            "toxicspikes",
            "rapidspin",
            "defog",
            "batonpass",
        ] {
            assert!(rules.is_unique_forced(&Id::from(id)), "{id}");
        }
        assert!(!rules.is_unique_forced(&Id::from("toxic")));
    }

    #[test]
    fn maps_happiness_moves() {
        let moves = HappinessMoves::default();
        assert_eq!(moves.happiness_for(&Id::from("frustration")), Some(0));
        assert_eq!(moves.happiness_for(&Id::from("return")), Some(255));
        assert_eq!(moves.happiness_for(&Id::from("facade")), None);
    }

    #[test]
    fn deserializes_partial_config() {
        let rules = serde_json::from_str::<VariantRules>(
            r#"{
                "hidden_power_ivs": { "Ice": { "atk": 30, "def": 30 } },
                "unique_forced_moves": ["Stealth Rock"]
            }"#,
        )
        .unwrap();
        assert_eq!(rules.happiness_moves, HappinessMoves::default());
        assert!(rules.is_unique_forced(&Id::from("stealthrock")));
        assert!(!rules.is_unique_forced(&Id::from("spikes")));
        let ivs = rules.hidden_power_ivs(Type::Ice);
        assert_eq!(ivs.get(&Stat::Atk), Some(&30));
        assert_eq!(ivs.get(&Stat::Def), Some(&30));
        assert!(rules.hidden_power_ivs(Type::Fairy).is_empty());
    }
}
