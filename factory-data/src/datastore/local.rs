use std::{
    env,
    fs::File,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;

use crate::{
    Aliases,
    DataStore,
    Id,
    ItemData,
    MoveData,
    SpeciesData,
    TypeTable,
    deserialize_aliases,
};

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// All data is read eagerly when the store is created.
pub struct LocalDataStore {
    root: PathBuf,
    pub types: TypeTable,
    pub aliases: Aliases,
    pub items: HashMap<Id, ItemData>,
    pub moves: HashMap<Id, MoveData>,
    pub species: HashMap<Id, SpeciesData>,
}

impl LocalDataStore {
    /// Types file name.
    pub const TYPES_FILE: &str = "types.json";
    /// Aliases file name.
    pub const ALIASES_FILE: &str = "aliases.json";
    /// Items directory name.
    pub const ITEMS_DIR: &str = "items";
    /// Moves directory name.
    pub const MOVES_DIR: &str = "moves";
    /// Species directory name.
    pub const SPECIES_DIR: &str = "mons";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or cannot be used to fill
    /// cached data.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display()
            )));
        }
        let mut store = Self {
            root,
            types: TypeTable::default(),
            aliases: Aliases::default(),
            items: HashMap::default(),
            moves: HashMap::default(),
            species: HashMap::default(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    fn initialize(&mut self) -> Result<()> {
        self.types = serde_json::from_reader(
            File::open(self.root.join(Self::TYPES_FILE)).context("failed to read types")?,
        )
        .context("failed to parse types")?;

        self.aliases = deserialize_aliases(
            serde_json::from_reader(
                File::open(self.root.join(Self::ALIASES_FILE))
                    .context("failed to read aliases")?,
            )
            .context("failed to parse aliases")?,
        );

        self.items = self.read_all_files_in_directory::<ItemData>(Self::ITEMS_DIR)?;
        self.moves = self.read_all_files_in_directory::<MoveData>(Self::MOVES_DIR)?;
        self.species = self.read_all_files_in_directory::<SpeciesData>(Self::SPECIES_DIR)?;

        Ok(())
    }

    fn read_all_files_in_directory<T: DeserializeOwned>(
        &self,
        dir: &str,
    ) -> Result<HashMap<Id, T>> {
        let tables = self
            .root
            .join(dir)
            .read_dir()
            .context(format!("failed to read {dir} directory"))?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| path.is_file())
            .map(|path| Self::read_table::<T>(&path, dir))
            .collect::<Result<Vec<_>>>()?;
        let mut map = HashMap::default();
        map.extend(
            tables
                .into_iter()
                .flat_map(|table| table.into_iter())
                .map(|(key, value)| (Id::from(key), value)),
        );
        Ok(map)
    }

    fn read_table<T: DeserializeOwned>(path: &Path, dir: &str) -> Result<HashMap<String, T>> {
        let path_name = path.to_string_lossy().to_string();
        serde_json::from_reader::<File, HashMap<String, T>>(
            File::open(path).context(format!("{path_name} could not be opened"))?,
        )
        .context(format!("failed to read {dir} data from {path_name}"))
    }
}

impl DataStore for LocalDataStore {
    fn get_type_table(&self) -> Result<TypeTable> {
        Ok(self.types.clone())
    }

    fn translate_alias(&self, id: &Id) -> Result<Option<Id>> {
        Ok(self.aliases.get(id).cloned())
    }

    fn get_item(&self, id: &Id) -> Result<Option<ItemData>> {
        Ok(self.items.get(id).cloned())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }
}
