use serde::{
    Deserialize,
    Serialize,
};

/// One move position of a set, listing every alternative the author allows for it.
///
/// Alternatives are mutually exclusive. Their order is the order they were written in and only
/// matters for diagnostics.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSlot(Vec<String>);

impl MoveSlot {
    /// Creates a new move slot from its alternatives.
    pub fn new<I, S>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(alternatives.into_iter().map(|s| s.into()).collect())
    }

    /// Creates a move slot holding a single move.
    pub fn single<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self(vec![name.into()])
    }

    /// All alternatives of the slot.
    pub fn alternatives(&self) -> &[String] {
        &self.0
    }

    /// Checks if the slot has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks if the slot is fixed, meaning it offers exactly one move.
    pub fn is_fixed(&self) -> bool {
        self.0.len() == 1
    }

    /// Iterates over all alternatives.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

impl<S> FromIterator<S> for MoveSlot
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod move_slot_test {
    use crate::sets::MoveSlot;

    #[test]
    fn fixed_slot_has_one_move() {
        let slot = MoveSlot::single("Spikes");
        assert!(slot.is_fixed());

        let slot = MoveSlot::new(["Thunder Wave", "Toxic"]);
        assert!(!slot.is_fixed());
        assert_eq!(slot.alternatives(), ["Thunder Wave", "Toxic"]);
    }

    #[test]
    fn serializes_as_array() {
        let slot = MoveSlot::new(["Moonblast", "Dazzling Gleam"]);
        assert_eq!(
            serde_json::to_string(&slot).unwrap(),
            r#"["Moonblast","Dazzling Gleam"]"#
        );
        assert_eq!(
            serde_json::from_str::<MoveSlot>(r#"["Moonblast","Dazzling Gleam"]"#).unwrap(),
            slot
        );
    }
}
