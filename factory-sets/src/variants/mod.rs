mod checker;
mod classifier;
mod combiner;
mod expander;
mod materializer;
mod occurrences;
mod partitioner;
mod problems;
mod resolver;
mod rules;

pub use checker::{
    CombinationStatus,
    PartitionCheck,
    check_combination,
    check_partition,
};
pub use classifier::{
    ImpliedAttributes,
    MoveKind,
    classify,
};
pub use combiner::{
    Combination,
    combine,
};
pub use expander::{
    CombinationConflict,
    Conflict,
    DroppedVariant,
    Expansion,
    Variant,
    VariantExpander,
};
pub use materializer::{
    materialize,
    sweep_resolved,
};
pub use occurrences::MoveOccurrences;
pub use partitioner::{
    NameGroup,
    dedup_alternatives,
    partition_slot,
};
pub use problems::VariantProblem;
pub use resolver::{
    MoveResolver,
    ResolvedMove,
};
pub use rules::{
    HappinessMoves,
    VariantRules,
};
