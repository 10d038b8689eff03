use std::str::FromStr;

use anyhow::Error;
use factory_data::{
    Gender,
    Id,
    PartialStatTable,
    Stat,
    StatTable,
};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::sets::{
    DEFAULT_IV,
    MoveSlot,
    SetData,
};

/// An error for a line of a team export that could not be understood.
#[derive(Error, Debug)]
#[error("line {line}: {message}")]
pub struct ExportParseError {
    line: usize,
    message: String,
}

impl ExportParseError {
    fn new<M>(line: usize, message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            line,
            message: message.into(),
        }
    }
}

static NATURE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]+) [Nn]ature").unwrap());
static MOVE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*/\s*").unwrap());

/// Stat labels accepted in EV and IV lines.
fn stat_from_label(label: &str) -> Option<Stat> {
    match label {
        "HP" | "hp" => Some(Stat::HP),
        "Atk" | "atk" => Some(Stat::Atk),
        "Def" | "def" => Some(Stat::Def),
        "SpA" | "SAtk" | "SpAtk" | "spa" => Some(Stat::SpAtk),
        "SpD" | "SDef" | "SpDef" | "spd" => Some(Stat::SpDef),
        "Spe" | "Spd" | "spe" => Some(Stat::Spe),
        _ => None,
    }
}

fn parse_number<T>(line: usize, value: &str, what: &str) -> Result<T, ExportParseError>
where
    T: FromStr,
{
    value
        .trim()
        .parse()
        .map_err(|_| ExportParseError::new(line, format!("invalid {what}: {value}")))
}

/// Parses a list of stat values, such as `252 SpA / 4 SpD / 252 Spe`.
///
/// Entries with unknown stat labels are skipped.
fn parse_stat_list(
    line: usize,
    list: &str,
    what: &str,
) -> Result<Vec<(Stat, u16)>, ExportParseError> {
    let mut out = Vec::new();
    for entry in list.split('/').map(|entry| entry.trim()) {
        let Some((value, label)) = entry.split_once(' ') else {
            continue;
        };
        let Some(stat) = stat_from_label(label.trim()) else {
            continue;
        };
        out.push((stat, parse_number(line, value, what)?));
    }
    Ok(out)
}

/// Parses the first line of a set, such as `Nickname (Garchomp) (M) @ Choice Scarf`.
fn parse_header(line: &str) -> SetData {
    let mut set = SetData::default();
    let mut line = line;
    if let Some((rest, item)) = line.rsplit_once(" @ ") {
        if Id::from(item) != Id::from("noitem") {
            set.item = Some(item.trim().to_owned());
        }
        line = rest;
    }
    let (line, gender) = Gender::strip_export_marker(line);
    set.gender = gender;
    set.species = match (line.strip_suffix(')'), line.rfind(" (")) {
        (Some(rest), Some(open)) => rest[open + 2..].to_owned(),
        _ => line.to_owned(),
    };
    set
}

fn parse_set_line(set: &mut SetData, number: usize, line: &str) -> Result<(), ExportParseError> {
    if let Some(ability) = line
        .strip_prefix("Ability: ")
        .or_else(|| line.strip_prefix("Trait: "))
    {
        set.ability = Some(ability.to_owned());
    } else if line == "Shiny: Yes" {
        set.shiny = true;
    } else if let Some(level) = line.strip_prefix("Level: ") {
        set.level = Some(parse_number(number, level, "level")?);
    } else if let Some(happiness) = line.strip_prefix("Happiness: ") {
        set.happiness = Some(parse_number(number, happiness, "happiness")?);
    } else if let Some(evs) = line.strip_prefix("EVs: ") {
        set.evs = StatTable::from_iter(parse_stat_list(number, evs, "EV")?);
    } else if let Some(ivs) = line.strip_prefix("IVs: ") {
        set.ivs = PartialStatTable::from_iter(
            parse_stat_list(number, ivs, "IV")?
                .into_iter()
                .filter(|(_, value)| *value != DEFAULT_IV),
        );
    } else if let Some(captures) = NATURE_LINE.captures(line) {
        set.nature = Some(captures[1].to_owned());
    } else if let Some(moves) = line.strip_prefix('-').or_else(|| line.strip_prefix('~')) {
        let slot = MOVE_SEPARATOR
            .split(moves.trim())
            .filter(|name| !name.is_empty())
            .collect::<MoveSlot>();
        if !slot.is_empty() {
            set.moves.push(slot);
        }
    }
    Ok(())
}

/// Parses every set in a team export.
///
/// Sets are separated by blank lines or `---`. Lines starting with `===` (team headers) are
/// ignored, as are lines that do not describe any known set attribute.
pub fn parse_sets(text: &str) -> Result<Vec<SetData>, Error> {
    let mut sets = Vec::new();
    let mut current: Option<SetData> = None;
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line == "---" {
            sets.extend(current.take());
        } else if line.starts_with("===") {
            continue;
        } else {
            match current.as_mut() {
                Some(set) => parse_set_line(set, i + 1, line)?,
                None => current = Some(parse_header(line)),
            }
        }
    }
    sets.extend(current);
    Ok(sets)
}

#[cfg(test)]
mod export_test {
    use assert_matches::assert_matches;
    use factory_data::{
        Gender,
        PartialStatTable,
        Stat,
        StatTable,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        parser::{
            ExportParseError,
            parse_sets,
        },
        sets::{
            MoveSlot,
            SetData,
        },
    };

    #[test]
    fn parses_full_set() {
        let sets = parse_sets(
            r#"
=== [gen6] Ubers ===

Xerneas @ Power Herb
Ability: Fairy Aura
Level: 100
Shiny: Yes
EVs: 4 HP / 252 SpA / 252 Spe
IVs: 0 Atk
Modest Nature
- Geomancy
- Moonblast / Dazzling Gleam
- Hidden Power Ground
~ Thunder
"#,
        )
        .unwrap();
        assert_eq!(
            sets,
            vec![SetData {
                species: "Xerneas".to_owned(),
                gender: Gender::Unknown,
                item: Some("Power Herb".to_owned()),
                ability: Some("Fairy Aura".to_owned()),
                nature: Some("Modest".to_owned()),
                level: Some(100),
                shiny: true,
                happiness: None,
                evs: StatTable {
                    hp: 4,
                    atk: 0,
                    def: 0,
                    spa: 252,
                    spd: 0,
                    spe: 252,
                },
                ivs: PartialStatTable::from_iter([(Stat::Atk, 0)]),
                moves: vec![
                    MoveSlot::single("Geomancy"),
                    MoveSlot::new(["Moonblast", "Dazzling Gleam"]),
                    MoveSlot::single("Hidden Power Ground"),
                    MoveSlot::single("Thunder"),
                ],
            }]
        );
    }

    #[test]
    fn parses_nickname_gender_and_separators() {
        let sets = parse_sets(
            "Chompy (Garchomp) (F) @ No Item\nTrait: Rough Skin\n- Earthquake\n---\nKlefki (M)\nHappiness: 0\nCareful nature\n-Frustration\n",
        )
        .unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].species, "Garchomp");
        assert_eq!(sets[0].gender, Gender::Female);
        assert_eq!(sets[0].item, None);
        assert_eq!(sets[0].ability, Some("Rough Skin".to_owned()));
        assert_eq!(sets[1].species, "Klefki");
        assert_eq!(sets[1].gender, Gender::Male);
        assert_eq!(sets[1].happiness, Some(0));
        assert_eq!(sets[1].nature, Some("Careful".to_owned()));
        assert_eq!(sets[1].moves, vec![MoveSlot::single("Frustration")]);
    }

    #[test]
    fn reads_speed_abbreviation_and_skips_unknown_stats() {
        let sets = parse_sets("Starmie\nEVs: 252 Spd / 4 Foo / 252 SAtk\nIVs: 31 HP / 30 SDef\n")
            .unwrap();
        assert_eq!(sets[0].evs.get(Stat::Spe), 252);
        assert_eq!(sets[0].evs.get(Stat::SpAtk), 252);
        assert_eq!(sets[0].evs.sum(), 504);
        assert_eq!(sets[0].ivs, PartialStatTable::from_iter([(Stat::SpDef, 30)]));
    }

    #[test]
    fn fails_on_malformed_numbers() {
        let error = parse_sets("Zekrom\nLevel: high\n").unwrap_err();
        assert_matches!(error.downcast_ref::<ExportParseError>(), Some(_));
        assert_eq!(error.to_string(), "line 2: invalid level: high");

        assert!(parse_sets("Zekrom\nHappiness: 300\n").is_err());
    }

    #[test]
    fn empty_text_has_no_sets() {
        assert_eq!(parse_sets("\n\n=== Team ===\n").unwrap(), Vec::<SetData>::new());
    }
}
