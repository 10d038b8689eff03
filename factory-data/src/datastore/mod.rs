mod aliases;
mod data_store;
mod local;

pub use aliases::{
    Aliases,
    SerializedAliases,
    deserialize_aliases,
};
pub use data_store::DataStore;
pub use local::LocalDataStore;
