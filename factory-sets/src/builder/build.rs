use std::{
    fs,
    io::Write,
};

use factory_data::Id;
use indexmap::IndexMap;
use log::info;

use crate::{
    builder::BuildOptions,
    dex::Dex,
    error::{
        Error,
        ValidationError,
        WrapResultError,
    },
    flags::add_flags,
    parser::parse_sets,
    proofread::{
        Proofreader,
        SetsByTier,
    },
    sets::{
        FactorySets,
        SetData,
    },
};

/// Groups the sets of one tier by species, in the order each species first appears.
///
/// Species names are replaced by their canonical spelling when the species exists.
pub fn group_sets(sets: Vec<SetData>, dex: &Dex) -> Result<IndexMap<Id, Vec<SetData>>, Error> {
    let mut grouped = IndexMap::<Id, Vec<SetData>>::new();
    for mut set in sets {
        if let Some(species) = dex.species(&set.species)? {
            set.species = species.name;
        }
        grouped
            .entry(Id::from(set.species.as_str()))
            .or_default()
            .push(set);
    }
    Ok(grouped)
}

/// Builds the set catalog from the team exports of every tier and writes it to `out` as JSON.
///
/// Nothing is written if proofreading finds any problem; the returned [`ValidationError`] lists
/// all of them.
pub fn build_sets(
    options: &BuildOptions,
    dex: &Dex,
    out: &mut dyn Write,
) -> Result<FactorySets, Error> {
    let mut by_tier = SetsByTier::default();
    for (tier, path) in &options.tiers {
        let text = fs::read_to_string(path).wrap_error_with_format(format_args!(
            "failed to read {tier} sets from {}",
            path.display()
        ))?;
        let sets = parse_sets(&text)
            .wrap_error_with_format(format_args!("failed to parse {tier} sets"))?;
        info!("Read {} sets for {tier}", sets.len());
        by_tier.insert(tier.clone(), group_sets(sets, dex)?);
    }

    let rules = match &options.rules {
        Some(rules) => rules.clone(),
        None => dex.variant_rules()?,
    };
    let output = Proofreader::new(dex, &rules, options.strict).proofread(&by_tier);
    if !output.problems.is_empty() {
        return Err(ValidationError::new(output.problems).into());
    }

    let mut sets = output.sets;
    add_flags(&mut sets, dex)?;

    serde_json::to_writer(&mut *out, &sets).wrap_error_with_message("failed to write sets")?;
    out.write_all(b"\n")
        .wrap_error_with_message("failed to write sets")?;
    info!("Built sets for {} tiers", sets.len());
    Ok(sets)
}

/// Builds the set catalog and writes it to [`BuildOptions::output`].
///
/// The file is only created once the catalog builds without problems.
pub fn build_sets_to_file(options: &BuildOptions, dex: &Dex) -> Result<FactorySets, Error> {
    let mut buffer = Vec::new();
    let sets = build_sets(options, dex, &mut buffer)?;
    fs::write(&options.output, buffer).wrap_error_with_format(format_args!(
        "failed to write sets to {}",
        options.output.display()
    ))?;
    info!("Wrote sets to {}", options.output.display());
    Ok(sets)
}
