use crate::{
    dex::Dex,
    error::{
        Error,
        WrapOptionError,
    },
    sets::{
        FactorySets,
        SpeciesTierEntry,
    },
};

fn all_sets_hold_mega_stone(dex: &Dex, entry: &SpeciesTierEntry) -> Result<bool, Error> {
    for set in &entry.sets {
        let Some(item) = &set.item else {
            return Ok(false);
        };
        if !dex.item(item)?.is_some_and(|item| item.is_mega_stone()) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Computes the flags describing each species' sets.
pub fn add_flags(sets: &mut FactorySets, dex: &Dex) -> Result<(), Error> {
    for (species_id, entry) in sets.values_mut().flat_map(|tier| tier.iter_mut()) {
        let species = dex
            .species(species_id.as_ref())?
            .wrap_not_found_error_with_format(format_args!("species {species_id}"))?;
        if dex.has_mega_evolution(&species)? {
            entry.flags.mega_only = all_sets_hold_mega_stone(dex, entry)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod species_flags_test {
    use factory_data::Id;
    use factory_test_utils::test_data_store;

    use crate::{
        dex::Dex,
        error::NotFoundError,
        flags::add_flags,
        sets::{
            FactorySets,
            SetData,
            SpeciesTierEntry,
            TierSets,
        },
    };

    fn set(item: Option<&str>) -> SetData {
        SetData {
            species: "Gengar".to_owned(),
            item: item.map(|item| item.to_owned()),
            ..Default::default()
        }
    }

    fn catalog(species: &str, sets: Vec<SetData>) -> FactorySets {
        FactorySets::from_iter([(
            "ubers".to_owned(),
            TierSets::from_iter([(
                Id::from(species),
                SpeciesTierEntry {
                    sets,
                    ..Default::default()
                },
            )]),
        )])
    }

    fn mega_only(sets: &FactorySets, species: &str) -> bool {
        sets["ubers"][&Id::from(species)].flags.mega_only
    }

    #[test]
    fn mega_only_when_every_set_holds_mega_stone() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        let mut sets = catalog("gengar", vec![set(Some("Gengarite")), set(Some("Gengarite"))]);
        add_flags(&mut sets, &dex).unwrap();
        assert!(mega_only(&sets, "gengar"));
    }

    #[test]
    fn not_mega_only_when_any_set_lacks_mega_stone() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        let mut sets = catalog("gengar", vec![set(Some("Gengarite")), set(Some("Life Orb"))]);
        add_flags(&mut sets, &dex).unwrap();
        assert!(!mega_only(&sets, "gengar"));

        let mut sets = catalog("gengar", vec![set(Some("Gengarite")), set(None)]);
        add_flags(&mut sets, &dex).unwrap();
        assert!(!mega_only(&sets, "gengar"));
    }

    #[test]
    fn species_without_mega_evolution_is_never_mega_only() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        let mut sets = catalog("zekrom", vec![set(Some("Gengarite"))]);
        add_flags(&mut sets, &dex).unwrap();
        assert!(!mega_only(&sets, "zekrom"));
    }

    #[test]
    fn fails_for_unknown_species() {
        let store = test_data_store();
        let dex = Dex::new(&store);
        let mut sets = catalog("missingno", vec![]);
        let error = add_flags(&mut sets, &dex).unwrap_err();
        assert!(error.is::<NotFoundError>());
    }
}
