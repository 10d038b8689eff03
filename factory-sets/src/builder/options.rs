use std::path::PathBuf;

use factory_data::Tier;
use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::variants::VariantRules;

/// Options for building the set catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Team export file for each tier, keyed by the tier key used in the output.
    pub tiers: IndexMap<String, PathBuf>,
    /// Report collisions between slashed alternatives as problems?
    pub strict: bool,
    /// File the catalog is written to by [`build_sets_to_file`][`crate::builder::build_sets_to_file`].
    pub output: PathBuf,
    /// Rules for expanding slashed move slots.
    ///
    /// Built from game data when not given.
    pub rules: Option<VariantRules>,
}

impl BuildOptions {
    /// Default output file name.
    pub const DEFAULT_OUTPUT: &str = "factory-sets.json";

    /// Creates options that read `<tier>.txt` for every factory tier from the given directory.
    pub fn from_data_dir<P>(dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        let dir = dir.into();
        Self {
            tiers: Tier::FACTORY_TIERS
                .iter()
                .map(|tier| {
                    let key = tier.to_string();
                    let path = dir.join(format!("{}.txt", key.to_lowercase()));
                    (key, path)
                })
                .collect(),
            ..Default::default()
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            tiers: IndexMap::default(),
            strict: false,
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
            rules: None,
        }
    }
}
