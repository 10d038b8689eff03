use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The gender a set asks for.
///
/// Team exports mark gender with a trailing `(M)` or `(F)` on the first line of a set. Sets without
/// a marker are [`Gender::Unknown`], which lets the game pick one when the set is used. The gender
/// is carried through variant expansion unchanged and written to the catalog as its short label.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Gender {
    #[string = "U"]
    #[alias = "Unknown"]
    #[default]
    Unknown,
    #[string = "F"]
    #[alias = "Female"]
    Female,
    #[string = "M"]
    #[alias = "Male"]
    Male,
}

impl Gender {
    /// Splits a trailing export marker, such as `" (F)"`, off the first line of a set.
    ///
    /// Lines without a marker are returned whole with [`Gender::Unknown`].
    pub fn strip_export_marker(line: &str) -> (&str, Self) {
        if let Some(rest) = line.strip_suffix(" (M)") {
            (rest, Self::Male)
        } else if let Some(rest) = line.strip_suffix(" (F)") {
            (rest, Self::Female)
        } else {
            (line, Self::Unknown)
        }
    }
}

#[cfg(test)]
mod gender_test {
    use crate::{
        Gender,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Gender::Unknown, "U");
        test_string_serialization(Gender::Female, "F");
        test_string_serialization(Gender::Male, "M");
    }

    #[test]
    fn deserializes_full_name() {
        test_string_deserialization("Unknown", Gender::Unknown);
        test_string_deserialization("Female", Gender::Female);
        test_string_deserialization("Male", Gender::Male);
    }

    #[test]
    fn strips_export_marker() {
        assert_eq!(
            Gender::strip_export_marker("Chompy (Garchomp) (F)"),
            ("Chompy (Garchomp)", Gender::Female)
        );
        assert_eq!(Gender::strip_export_marker("Klefki (M)"), ("Klefki", Gender::Male));
        assert_eq!(
            Gender::strip_export_marker("Klefki"),
            ("Klefki", Gender::Unknown)
        );
    }
}
