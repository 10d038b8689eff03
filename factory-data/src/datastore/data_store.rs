use anyhow::Result;

use crate::{
    Id,
    ItemData,
    MoveData,
    SpeciesData,
    TypeTable,
};

/// Collection of tables for all game data the set builder consults.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
///
/// This collection is used for "raw lookup" of resources by ID. Name resolution rules, such as
/// following aliases or understanding typed move names, belong to the dex built on top of it.
pub trait DataStore: Send + Sync {
    /// Gets the data for every type.
    fn get_type_table(&self) -> Result<TypeTable>;
    /// Translates the given alias to another ID, if the alias mapping exists.
    fn translate_alias(&self, id: &Id) -> Result<Option<Id>>;
    /// Gets an item by ID.
    fn get_item(&self, id: &Id) -> Result<Option<ItemData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
}
