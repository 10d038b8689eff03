pub mod builder;
pub mod dex;
pub mod error;
pub mod flags;
pub mod parser;
pub mod proofread;
pub mod sets;
pub mod variants;

pub use builder::{
    BuildOptions,
    build_sets,
    build_sets_to_file,
};
pub use dex::Dex;
pub use error::{
    Error,
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use parser::parse_sets;
pub use sets::{
    FactorySets,
    MoveSlot,
    SetData,
};
pub use variants::{
    Expansion,
    MoveResolver,
    VariantExpander,
    VariantRules,
};
