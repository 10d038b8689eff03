use hashbrown::HashMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::PartialStatTable;

/// The type of a species or move.
#[derive(
    Debug,
    Default,
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
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

/// Data about a single type.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeData {
    /// IVs a Mon must have for Hidden Power to take on this type.
    ///
    /// Stats not listed keep their default IV. `None` means Hidden Power cannot be this type.
    pub hidden_power_ivs: Option<PartialStatTable>,
}

/// Data for every type, keyed by type.
pub type TypeTable = HashMap<Type, TypeData>;

#[cfg(test)]
mod type_test {
    use std::str::FromStr;

    use crate::{
        Type,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Type::Ground, "Ground");
        test_string_serialization(Type::Ice, "Ice");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("ground", Type::Ground);
        test_string_deserialization("fairy", Type::Fairy);
    }

    #[test]
    fn parses_from_id_fragment() {
        assert_eq!(Type::from_str("electric").unwrap(), Type::Electric);
        assert!(Type::from_str("sound").is_err());
    }
}
