use itertools::Itertools;
use thiserror::Error;

fn quote_names(names: &[String]) -> String {
    names.iter().map(|name| format!("'{name}'")).join(", ")
}

/// A problem found while expanding a set into its variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantProblem {
    /// A fixed move collides with another choice.
    #[error("conflict between moves: {}", quote_names(.moves))]
    FatalConflict { moves: Vec<String> },
    /// Two slashed alternatives collide. Only a problem in strict mode.
    #[error("conflict between alternate moves: {}", quote_names(.moves))]
    ToleratedConflict { moves: Vec<String> },
    /// A resolved variant uses the same move in two slots.
    #[error("duplicate move {name}")]
    DuplicateMove { name: String },
    /// A resolved variant uses more than one happiness-based move.
    #[error("duplicate happiness-based moves")]
    DuplicateHappinessMoves,
}

impl VariantProblem {
    /// Describes the problem for a species in a tier.
    pub fn describe(&self, tier: &str, species: &str) -> String {
        match self {
            Self::FatalConflict { moves } => format!(
                "Conflict between moves for {tier} {species}: {}",
                quote_names(moves)
            ),
            Self::ToleratedConflict { moves } => format!(
                "Conflict between alternate moves for {tier} {species}: {}",
                quote_names(moves)
            ),
            Self::DuplicateMove { name } => {
                format!("Duplicate move {name} for {tier} {species}.")
            }
            Self::DuplicateHappinessMoves => {
                format!("Duplicate happiness-based moves for {tier} {species}.")
            }
        }
    }
}
