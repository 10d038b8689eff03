use serde::{
    Deserialize,
    Serialize,
};

use crate::Type;

/// Data about a particular move.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move type.
    pub primary_type: Type,
    /// Does the move change type based on the user's IVs?
    ///
    /// Such moves may be written with a type suffix (for example, "Hidden Power Ground").
    #[serde(default)]
    pub typed_by_ivs: bool,
}
