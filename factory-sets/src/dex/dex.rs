use std::str::FromStr;

use ahash::HashSet;
use factory_data::{
    DataStore,
    Id,
    ItemData,
    SpeciesData,
    Type,
};
use log::warn;

use crate::{
    error::{
        Error,
        WrapResultError,
        general_error,
    },
    variants::{
        MoveResolver,
        ResolvedMove,
        VariantRules,
    },
};

/// Collection of all game data, looked up by name.
///
/// Names are normalized to IDs and aliases are followed to the end of their chain before any
/// lookup.
pub struct Dex<'d> {
    data: &'d dyn DataStore,
}

impl<'d> Dex<'d> {
    /// ID of the move that may be written with a type suffix.
    const HIDDEN_POWER: &'static str = "hiddenpower";

    /// Creates a new [`Dex`], backed by the given [`DataStore`].
    pub fn new(data: &'d dyn DataStore) -> Self {
        Self { data }
    }

    fn resolve_alias(&self, mut id: Id) -> Result<Id, Error> {
        let mut visited = HashSet::default();
        while let Some(next) = self.data.translate_alias(&id)? {
            if !visited.insert(id.clone()) {
                return Err(general_error(format!("alias cycle detected at {id}")));
            }
            id = next;
        }
        Ok(id)
    }

    /// Looks up a species by name.
    pub fn species(&self, name: &str) -> Result<Option<SpeciesData>, Error> {
        let id = self.resolve_alias(Id::from(name))?;
        self.data
            .get_species(&id)
            .wrap_error_with_format(format_args!("failed to look up species {id}"))
    }

    /// Looks up an item by name.
    pub fn item(&self, name: &str) -> Result<Option<ItemData>, Error> {
        let id = self.resolve_alias(Id::from(name))?;
        self.data
            .get_item(&id)
            .wrap_error_with_format(format_args!("failed to look up item {id}"))
    }

    /// Looks up a move by name.
    ///
    /// Moves that change type based on IVs may be written with the type after the move name, such
    /// as "Hidden Power Ice".
    pub fn move_by_name(&self, name: &str) -> Result<Option<ResolvedMove>, Error> {
        let id = self.resolve_alias(Id::from(name))?;
        if let Some(data) = self
            .data
            .get_move(&id)
            .wrap_error_with_format(format_args!("failed to look up move {id}"))?
        {
            return Ok(Some(ResolvedMove {
                id,
                name: data.name,
                hidden_power_type: None,
            }));
        }

        let hidden_power = Id::from(Self::HIDDEN_POWER);
        let Some(typ) = id
            .strip_prefix(&hidden_power)
            .and_then(|suffix| Type::from_str(suffix).ok())
        else {
            return Ok(None);
        };
        let data = match self
            .data
            .get_move(&hidden_power)
            .wrap_error_with_format(format_args!("failed to look up move {hidden_power}"))?
        {
            Some(data) if data.typed_by_ivs => data,
            _ => return Ok(None),
        };
        Ok(Some(ResolvedMove {
            id: hidden_power,
            name: format!("{} {typ}", data.name),
            hidden_power_type: Some(typ),
        }))
    }

    /// Checks if the species has a Mega Evolution forme.
    pub fn has_mega_evolution(&self, species: &SpeciesData) -> Result<bool, Error> {
        for forme in &species.other_formes {
            if self.species(forme)?.is_some_and(|forme| forme.is_mega()) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Builds variant rules from game data.
    ///
    /// Hidden Power IVs come from the type table; everything else keeps its default.
    pub fn variant_rules(&self) -> Result<VariantRules, Error> {
        let types = self
            .data
            .get_type_table()
            .wrap_error_with_message("failed to read type table")?;
        Ok(VariantRules {
            hidden_power_ivs: types
                .into_iter()
                .filter_map(|(typ, data)| Some((typ, data.hidden_power_ivs?)))
                .collect(),
            ..Default::default()
        })
    }
}

impl MoveResolver for Dex<'_> {
    fn resolve_move(&self, name: &str) -> Option<ResolvedMove> {
        match self.move_by_name(name) {
            Ok(mov) => mov,
            Err(error) => {
                warn!("failed to resolve move {name}: {error:#}");
                None
            }
        }
    }
}

#[cfg(test)]
mod dex_test {
    use factory_data::{
        Id,
        Stat,
        Type,
    };
    use factory_test_utils::test_data_store;
    use pretty_assertions::assert_eq;

    use crate::{
        dex::Dex,
        variants::{
            MoveResolver,
            ResolvedMove,
        },
    };

    #[test]
    fn looks_up_species_through_aliases() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        assert_eq!(
            dex.species("Chomp").unwrap().map(|species| species.name),
            Some("Garchomp".to_owned())
        );
        assert_eq!(
            dex.species("Mega Chomp").unwrap().map(|species| species.name),
            Some("Garchomp-Mega".to_owned())
        );
        assert_eq!(dex.species("Missingno").unwrap(), None);
    }

    #[test]
    fn looks_up_items_by_display_name() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        assert_eq!(
            dex.item("Choice Specs").unwrap().map(|item| item.name),
            Some("Choice Specs".to_owned())
        );
        assert_eq!(dex.item("Soul Dew").unwrap(), None);
    }

    #[test]
    fn resolves_canonical_move_names() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        assert_eq!(
            dex.resolve_move("thunder wave"),
            Some(ResolvedMove {
                id: Id::from("thunderwave"),
                name: "Thunder Wave".to_owned(),
                hidden_power_type: None,
            })
        );
        assert_eq!(
            dex.resolve_move("TWave").map(|mov| mov.name),
            Some("Thunder Wave".to_owned())
        );
        assert_eq!(dex.resolve_move("Shadow Rush"), None);
    }

    #[test]
    fn resolves_typed_hidden_power() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        assert_eq!(
            dex.resolve_move("Hidden Power [Ground]"),
            Some(ResolvedMove {
                id: Id::from("hiddenpower"),
                name: "Hidden Power Ground".to_owned(),
                hidden_power_type: Some(Type::Ground),
            })
        );
        assert_eq!(
            dex.resolve_move("Hidden Power").map(|mov| mov.hidden_power_type),
            Some(None)
        );
        assert_eq!(dex.resolve_move("Hidden Power Sound"), None);
    }

    #[test]
    fn only_typed_moves_accept_type_suffix() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        assert_eq!(dex.resolve_move("Return Ground"), None);
    }

    #[test]
    fn finds_mega_evolutions() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        let garchomp = dex.species("Garchomp").unwrap().unwrap();
        assert!(dex.has_mega_evolution(&garchomp).unwrap());
        let klefki = dex.species("Klefki").unwrap().unwrap();
        assert!(!dex.has_mega_evolution(&klefki).unwrap());
    }

    #[test]
    fn builds_variant_rules_from_type_table() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        let rules = dex.variant_rules().unwrap();
        assert_eq!(
            rules.hidden_power_ivs(Type::Ice).get(&Stat::Atk),
            Some(&30)
        );
        assert!(rules.hidden_power_ivs(Type::Dark).is_empty());
        assert!(rules.hidden_power_ivs(Type::Fairy).is_empty());
        assert!(rules.is_unique_forced(&Id::from("stealthrock")));
    }
}
