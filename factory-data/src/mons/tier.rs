use std::str::FromStr;

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A competitive usage tier.
///
/// Tiers are ordered from most to least permissive: a species usable in a tier is usable in every
/// tier that comes before it, so a species whose tier sorts before a format's tier is banned from
/// that format.
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
pub enum Tier {
    #[string = "Uber"]
    #[alias = "Ubers"]
    Uber,
    #[string = "OU"]
    OU,
    #[string = "BL"]
    BL,
    #[string = "UU"]
    UU,
    #[string = "BL2"]
    BL2,
    #[string = "RU"]
    RU,
    #[string = "BL3"]
    BL3,
    #[string = "NU"]
    NU,
    #[string = "BL4"]
    BL4,
    #[string = "PU"]
    PU,
}

impl Tier {
    /// Tiers that receive their own set catalog.
    pub const FACTORY_TIERS: [Tier; 6] = [
        Tier::Uber,
        Tier::OU,
        Tier::UU,
        Tier::RU,
        Tier::NU,
        Tier::PU,
    ];

    /// Parses a tier label as written in species data.
    ///
    /// Unreleased or provisional tiers are written in parentheses, such as `(OU)`, and rank the
    /// same as the tier inside. Labels outside of the ranked tiers (such as `LC` or `NFE`) return
    /// `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.replace(['(', ')'], "");
        Self::from_str(label.trim()).ok()
    }

    /// Checks if a species of this tier is allowed in the given tier.
    pub fn allowed_in(&self, tier: Tier) -> bool {
        *self >= tier
    }
}
