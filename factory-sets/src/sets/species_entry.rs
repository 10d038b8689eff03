use factory_data::Id;
use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::sets::SetData;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Flags describing all sets of a species within a tier.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesFlags {
    /// Every set holds a Mega Stone, so the species is only usable through Mega Evolution.
    #[serde(rename = "megaOnly", default, skip_serializing_if = "is_false")]
    pub mega_only: bool,
}

/// A species within a tier, with its final list of resolved sets.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesTierEntry {
    pub flags: SpeciesFlags,
    pub sets: Vec<SetData>,
}

/// All species of a tier, keyed by species ID, in the order they were first seen.
pub type TierSets = IndexMap<Id, SpeciesTierEntry>;

/// The full set catalog, keyed by tier name as given by the caller.
pub type FactorySets = IndexMap<String, TierSets>;
