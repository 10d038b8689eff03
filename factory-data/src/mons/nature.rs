use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A nature, which boosts one stat and drops another.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Nature {
    #[string = "Hardy"]
    Hardy,
    #[string = "Lonely"]
    Lonely,
    #[string = "Adamant"]
    Adamant,
    #[string = "Naughty"]
    Naughty,
    #[string = "Brave"]
    Brave,
    #[string = "Bold"]
    Bold,
    #[string = "Docile"]
    Docile,
    #[string = "Impish"]
    Impish,
    #[string = "Lax"]
    Lax,
    #[string = "Relaxed"]
    Relaxed,
    #[string = "Modest"]
    Modest,
    #[string = "Mild"]
    Mild,
    #[string = "Bashful"]
    Bashful,
    #[string = "Rash"]
    Rash,
    #[string = "Quiet"]
    Quiet,
    #[string = "Calm"]
    Calm,
    #[string = "Gentle"]
    Gentle,
    #[string = "Careful"]
    Careful,
    #[string = "Quirky"]
    Quirky,
    #[string = "Sassy"]
    Sassy,
    #[string = "Timid"]
    Timid,
    #[string = "Hasty"]
    Hasty,
    #[string = "Jolly"]
    Jolly,
    #[string = "Naive"]
    Naive,
    #[string = "Serious"]
    Serious,
}
