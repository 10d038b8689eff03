use serde::{
    Deserialize,
    Serialize,
};

use crate::Type;

/// Data about a particular species.
///
/// Species data is common to all sets of a given species. Data about a specific set (such as its
/// nature or moves) does not belong here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The name of the species plus any forme name.
    pub name: String,
    /// The base species name, which excludes any forme name.
    pub base_species: String,
    /// The forme name, if it exists.
    pub forme: Option<String>,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    pub secondary_type: Option<Type>,
    /// Abilities.
    pub abilities: Vec<String>,
    /// Hidden ability, if it exists.
    pub hidden_ability: Option<String>,
    /// Usage tier label, such as `OU` or `(UU)`.
    #[serde(default)]
    pub tier: String,
    /// Other formes of the species, by name.
    #[serde(default)]
    pub other_formes: Vec<String>,
}

impl SpeciesData {
    /// Checks if the species can have the given ability.
    pub fn has_ability(&self, ability: &str) -> bool {
        self.abilities.iter().any(|a| a == ability)
            || self.hidden_ability.as_ref().is_some_and(|a| a == ability)
    }

    /// Checks if this species is a Mega Evolution forme.
    pub fn is_mega(&self) -> bool {
        self.forme
            .as_ref()
            .is_some_and(|forme| forme.starts_with("Mega"))
    }
}

#[cfg(test)]
mod species_data_test {
    use crate::SpeciesData;

    fn garchomp() -> SpeciesData {
        serde_json::from_str(
            r#"{
                "name": "Garchomp",
                "base_species": "Garchomp",
                "primary_type": "Dragon",
                "secondary_type": "Ground",
                "abilities": ["Sand Veil"],
                "hidden_ability": "Rough Skin",
                "tier": "OU",
                "other_formes": ["Garchomp-Mega"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn checks_regular_and_hidden_abilities() {
        let species = garchomp();
        assert!(species.has_ability("Sand Veil"));
        assert!(species.has_ability("Rough Skin"));
        assert!(!species.has_ability("Sand Force"));
    }

    #[test]
    fn base_forme_is_not_mega() {
        assert!(!garchomp().is_mega());
    }
}
