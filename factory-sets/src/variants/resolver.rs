use factory_data::{
    Id,
    Type,
};

/// A move name resolved against game data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMove {
    /// ID of the underlying move.
    ///
    /// Typed spellings of the same move share an ID (every "Hidden Power <Type>" is
    /// `hiddenpower`).
    pub id: Id,
    /// Canonical display name, including the type for typed moves.
    pub name: String,
    /// The type chosen for a move that changes type based on IVs.
    pub hidden_power_type: Option<Type>,
}

impl ResolvedMove {
    /// Creates a resolved move for a name that game data does not know about.
    ///
    /// The name is kept exactly as written.
    pub fn unknown(name: &str) -> Self {
        Self {
            id: Id::from(name),
            name: name.to_owned(),
            hidden_power_type: None,
        }
    }

    /// The key used to decide if two spellings name the same move choice.
    ///
    /// Unlike [`Self::id`], different Hidden Power types have different keys.
    pub fn choice_key(&self) -> Id {
        Id::from(self.name.as_str())
    }
}

/// Resolves move names as written in sets.
pub trait MoveResolver: Send + Sync {
    /// Resolves a move by name.
    ///
    /// Returns `None` if the move does not exist.
    fn resolve_move(&self, name: &str) -> Option<ResolvedMove>;
}
