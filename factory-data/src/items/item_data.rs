use serde::{
    Deserialize,
    Serialize,
};

/// Data about a particular item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    /// Name of the item.
    pub name: String,
    /// The species that this item allows Mega Evolution from.
    pub mega_evolves_from: Option<String>,
    /// The species that this item allows Mega Evolution into.
    pub mega_evolves_into: Option<String>,
}

impl ItemData {
    /// Checks if the item is a Mega Stone.
    pub fn is_mega_stone(&self) -> bool {
        self.mega_evolves_into.is_some()
    }
}
