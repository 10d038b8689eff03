use std::str::FromStr;

use factory_data::{
    Id,
    Nature,
    SpeciesData,
    Stat,
    Tier,
};
use indexmap::{
    IndexMap,
    IndexSet,
};
use itertools::Itertools;
use log::debug;

use crate::{
    dex::Dex,
    error::{
        Error,
        general_error,
    },
    proofread::{
        SetValidationProblems,
        valid_evs,
        valid_ivs,
        valid_level,
    },
    sets::{
        FactorySets,
        MAX_MOVE_SLOTS,
        SetData,
        SpeciesTierEntry,
    },
    variants::{
        VariantExpander,
        VariantRules,
    },
};

/// Parsed sets grouped by tier key and species, before proofreading.
pub type SetsByTier = IndexMap<String, IndexMap<Id, Vec<SetData>>>;

/// The result of proofreading all tiers.
#[derive(Debug, Default)]
pub struct ProofreadOutput {
    /// Expanded sets of every species that had no problems.
    pub sets: FactorySets,
    /// Every problem found.
    pub problems: Vec<String>,
}

/// Checks parsed sets against game data and expands them into resolved variants.
pub struct Proofreader<'b, 'd> {
    /// Resource dex.
    pub dex: &'b Dex<'d>,
    /// Rules for expanding slashed move slots.
    pub rules: &'b VariantRules,
    /// Report collisions between slashed alternatives as problems?
    pub strict: bool,
}

impl<'b, 'd> Proofreader<'b, 'd> {
    /// Creates a new [`Proofreader`].
    pub fn new(dex: &'b Dex<'d>, rules: &'b VariantRules, strict: bool) -> Self {
        Self { dex, rules, strict }
    }

    /// Proofreads the sets of every tier.
    ///
    /// A species with any problem is left out of the output sets.
    pub fn proofread(&self, tiers: &SetsByTier) -> ProofreadOutput {
        let mut output = ProofreadOutput::default();
        for (tier, species_sets) in tiers {
            for (species_id, sets) in species_sets {
                let species = match self.dex.species(species_id.as_ref()) {
                    Ok(Some(species)) => species,
                    Ok(None) => {
                        output
                            .problems
                            .push(format!("Invalid species id: {species_id}"));
                        continue;
                    }
                    Err(error) => {
                        output.problems.push(format!(
                            "Failed to look up species {species_id}: {error:#}"
                        ));
                        continue;
                    }
                };

                let (sets, problems) = self.proofread_species_sets(tier, species_id, &species, sets);
                debug!(
                    "{tier} {species_id}: {} sets, {} problems",
                    sets.len(),
                    problems.problems.len()
                );
                if problems.is_empty() {
                    output.sets.entry(tier.clone()).or_default().insert(
                        species_id.clone(),
                        SpeciesTierEntry {
                            sets,
                            ..Default::default()
                        },
                    );
                } else {
                    output.problems.extend(problems.problems);
                }
            }
        }
        output
    }

    /// Proofreads and expands all sets of one species in one tier.
    pub fn proofread_species_sets(
        &self,
        tier: &str,
        species_id: &Id,
        species: &SpeciesData,
        sets: &[SetData],
    ) -> (Vec<SetData>, SetValidationProblems) {
        let mut problems = SetValidationProblems::default();
        let mut output = Vec::new();
        let expander = VariantExpander::new(self.dex, self.rules);
        for set in sets {
            problems.merge(self.validate_set(tier, species_id, species, set));
            let expansion = expander.expand(set);
            for problem in expansion.problems(self.strict) {
                problems.add_problem(problem.describe(tier, species_id.as_ref()));
            }
            output.extend(expansion.valid.into_iter().map(|variant| variant.set));
        }
        (output, problems)
    }

    fn validate_set(
        &self,
        tier: &str,
        species_id: &Id,
        species: &SpeciesData,
        set: &SetData,
    ) -> SetValidationProblems {
        let mut result = SetValidationProblems::default();

        let item = match set.item.as_deref().map(|item| self.dex.item(item)) {
            Some(Ok(Some(item))) => Some(item),
            Some(Ok(None)) => {
                result.add_problem(format!(
                    "Invalid item for {tier} {species_id}: '{}'.",
                    set.item.as_deref().unwrap_or_default()
                ));
                None
            }
            Some(Err(error)) => {
                result.merge(error.into());
                None
            }
            None => None,
        };

        if let Some(nature) = &set.nature {
            if Nature::from_str(nature).is_err() {
                result.add_problem(format!(
                    "Invalid nature for {tier} {species_id}: '{nature}'."
                ));
            }
        }

        if !valid_evs(&set.evs) {
            result.add_problem(format!(
                "Invalid EVs for {tier} {species_id}: '{}'.",
                set.evs.values().join(", ")
            ));
        }

        if !valid_ivs(&set.ivs) {
            result.add_problem(format!(
                "Invalid IVs for {tier} {species_id}: '{}'.",
                Stat::ALL.iter().map(|stat| set.iv(*stat)).join(", ")
            ));
        }

        if let Some(level) = set.level {
            if !valid_level(level) {
                result.add_problem(format!(
                    "Level out of bounds for {tier} {species_id}: '{level}'."
                ));
            }
        }

        if set.moves.len() > MAX_MOVE_SLOTS {
            result.add_problem(format!(
                "Too many moves for {tier} {species_id}: '{}'.",
                set.moves.len()
            ));
        }

        let ability = set.ability.as_deref().unwrap_or_default();
        if !species.has_ability(ability) {
            result.add_problem(format!(
                "Invalid ability for {tier} {species_id}: '{ability}'."
            ));
        }

        // Mega Evolutions are tiered separately from their base forme.
        let mega = item
            .filter(|item| {
                item.mega_evolves_from
                    .as_ref()
                    .is_some_and(|from| Id::from(from.as_str()) == *species_id)
            })
            .and_then(|item| item.mega_evolves_into);
        let tiered = match mega {
            Some(mega) => match self.dex.species(&mega) {
                Ok(Some(mega)) => mega,
                Ok(None) => {
                    result.add_problem(format!("Invalid species id: {}", Id::from(mega)));
                    return result;
                }
                Err(error) => {
                    result.merge(error.into());
                    return result;
                }
            },
            None => species.clone(),
        };
        if let Err(error) = self.check_tier(tier, &tiered) {
            result.merge(error.into());
        }

        result.merge(self.validate_moves(tier, species_id, set));
        result
    }

    fn check_tier(&self, tier: &str, species: &SpeciesData) -> Result<(), Error> {
        let (Some(format_tier), Some(species_tier)) =
            (Tier::from_label(tier), Tier::from_label(&species.tier))
        else {
            return Ok(());
        };
        if species_tier.allowed_in(format_tier) {
            Ok(())
        } else {
            Err(general_error(format!(
                "Pokémon {} is banned from {tier}",
                Id::from(species.name.as_str())
            )))
        }
    }

    fn validate_moves(&self, tier: &str, species_id: &Id, set: &SetData) -> SetValidationProblems {
        let mut result = SetValidationProblems::default();
        let mut reported = IndexSet::new();
        for name in set.move_names() {
            match self.dex.move_by_name(name) {
                Ok(Some(_)) => (),
                Ok(None) => {
                    if reported.insert(name) {
                        result.add_problem(format!(
                            "Invalid move for {tier} {species_id}: '{name}'"
                        ));
                    }
                }
                Err(error) => result.merge(error.into()),
            }
        }
        result
    }
}

#[cfg(test)]
mod proofreader_test {
    use factory_data::{
        Id,
        StatTable,
    };
    use factory_test_utils::{
        setup_test_environment,
        test_data_store,
    };
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    use crate::{
        dex::Dex,
        proofread::{
            Proofreader,
            SetsByTier,
        },
        sets::{
            MoveSlot,
            SetData,
        },
    };

    fn garchomp() -> SetData {
        SetData {
            species: "Garchomp".to_owned(),
            item: Some("Choice Scarf".to_owned()),
            ability: Some("Rough Skin".to_owned()),
            nature: Some("Jolly".to_owned()),
            evs: StatTable {
                hp: 0,
                atk: 252,
                def: 0,
                spa: 0,
                spd: 4,
                spe: 252,
            },
            moves: vec![
                MoveSlot::single("Earthquake"),
                MoveSlot::single("Outrage"),
                MoveSlot::new(["Stone Edge", "Fire Blast"]),
                MoveSlot::single("Stealth Rock"),
            ],
            ..Default::default()
        }
    }

    fn tiers(tier: &str, species: &str, sets: Vec<SetData>) -> SetsByTier {
        SetsByTier::from_iter([(
            tier.to_owned(),
            IndexMap::from_iter([(Id::from(species), sets)]),
        )])
    }

    fn proofread(tiers: &SetsByTier, strict: bool) -> (Vec<String>, usize) {
        setup_test_environment();
        let store = test_data_store();
        let dex = Dex::new(&store);
        let rules = dex.variant_rules().unwrap();
        let output = Proofreader::new(&dex, &rules, strict).proofread(tiers);
        let count = output
            .sets
            .values()
            .flat_map(|species| species.values())
            .map(|entry| entry.sets.len())
            .sum();
        (output.problems, count)
    }

    #[test]
    fn accepts_valid_set() {
        assert_eq!(
            proofread(&tiers("ou", "garchomp", vec![garchomp()]), false),
            (Vec::<String>::new(), 1)
        );
    }

    #[test]
    fn reports_invalid_fields() {
        let mut set = garchomp();
        set.item = Some("Soul Dew".to_owned());
        set.nature = Some("Grumpy".to_owned());
        set.ability = Some("Levitate".to_owned());
        set.level = Some(0);
        set.evs.hp = 8;
        set.moves[1] = MoveSlot::new(["Outrage", "Shadow Rush"]);
        let (problems, count) = proofread(&tiers("ou", "garchomp", vec![set]), false);
        assert_eq!(
            problems,
            vec![
                "Invalid item for ou garchomp: 'Soul Dew'.",
                "Invalid nature for ou garchomp: 'Grumpy'.",
                "Invalid EVs for ou garchomp: '8, 252, 0, 0, 4, 252'.",
                "Level out of bounds for ou garchomp: '0'.",
                "Invalid ability for ou garchomp: 'Levitate'.",
                "Invalid move for ou garchomp: 'Shadow Rush'",
            ]
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn reports_unknown_species() {
        let (problems, _) = proofread(&tiers("ou", "missingno", vec![garchomp()]), false);
        assert_eq!(problems, vec!["Invalid species id: missingno"]);
    }

    #[test]
    fn bans_species_from_lower_tiers() {
        let mut set = garchomp();
        set.species = "Zekrom".to_owned();
        set.ability = Some("Teravolt".to_owned());
        let (problems, _) = proofread(&tiers("ou", "zekrom", vec![set]), false);
        assert_eq!(problems, vec!["Pokémon zekrom is banned from ou"]);
    }

    #[test]
    fn tiers_mega_stone_holders_by_their_mega_forme() {
        let mut set = garchomp();
        set.item = Some("Garchompite".to_owned());
        let (problems, _) = proofread(&tiers("ou", "garchomp", vec![set.clone()]), false);
        assert_eq!(problems, vec!["Pokémon garchompmega is banned from ou"]);

        let (problems, count) = proofread(&tiers("ubers", "garchomp", vec![set]), false);
        assert_eq!(problems, Vec::<String>::new());
        assert_eq!(count, 1);
    }

    #[test]
    fn provisional_tier_label_ranks_as_its_tier() {
        let set = SetData {
            species: "Starmie".to_owned(),
            ability: Some("Natural Cure".to_owned()),
            nature: Some("Timid".to_owned()),
            moves: vec![MoveSlot::single("Rapid Spin")],
            ..Default::default()
        };
        let (problems, count) = proofread(&tiers("uu", "starmie", vec![set.clone()]), false);
        assert_eq!(problems, Vec::<String>::new());
        assert_eq!(count, 1);

        let (problems, _) = proofread(&tiers("ou", "starmie", vec![set]), false);
        assert_eq!(problems, Vec::<String>::new());
    }

    #[test]
    fn strict_mode_reports_discarded_combinations() {
        let set = SetData {
            species: "Klefki".to_owned(),
            item: Some("Leftovers".to_owned()),
            ability: Some("Prankster".to_owned()),
            nature: Some("Careful".to_owned()),
            moves: vec![
                MoveSlot::single("Spikes"),
                MoveSlot::new(["Thunder Wave", "Toxic"]),
                MoveSlot::new(["Toxic", "Light Screen"]),
                MoveSlot::single("Play Rough"),
            ],
            ..Default::default()
        };
        assert_eq!(
            proofread(&tiers("uu", "klefki", vec![set.clone()]), false),
            (Vec::<String>::new(), 3)
        );
        assert_eq!(
            proofread(&tiers("uu", "klefki", vec![set]), true),
            (
                vec!["Conflict between alternate moves for uu klefki: 'Toxic'".to_owned()],
                0
            )
        );
    }

    #[test]
    fn rejects_more_than_four_move_slots() {
        let mut set = garchomp();
        set.moves.push(MoveSlot::single("Swords Dance"));
        assert_eq!(
            proofread(&tiers("ou", "garchomp", vec![set]), true),
            (
                vec!["Too many moves for ou garchomp: '5'.".to_owned()],
                0
            )
        );
    }
}
