use std::{
    borrow::Cow,
    fmt,
    fmt::Display,
    str::FromStr,
};

use anyhow::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};

/// An ID for a resource.
///
/// IDs are the normalized form of a resource name: lowercase ASCII alphanumeric characters only.
/// Resources of the same type should have a unique ID, so two names that only differ in casing,
/// spacing, or punctuation refer to the same resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(String);

impl Id {
    /// Checks if the ID is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the remainder of the ID after the given ID prefix, if the prefix matches.
    pub fn strip_prefix(&self, prefix: &Id) -> Option<&str> {
        self.0.strip_prefix(prefix.as_ref())
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        normalize_id(&value)
    }
}

impl From<&String> for Id {
    fn from(value: &String) -> Self {
        normalize_id(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        normalize_id(value)
    }
}

impl FromStr for Id {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::from(s))
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(IdVisitor)
    }
}

static NON_ID_CHARACTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]").unwrap());

/// Normalizes the given ID.
///
/// IDs must have lowercase alphanumeric characters. Non-alphanumeric characters are removed.
fn normalize_id(id: &str) -> Id {
    match NON_ID_CHARACTERS.replace_all(&id.to_ascii_lowercase(), "") {
        Cow::Borrowed(str) => Id(str.to_owned()),
        Cow::Owned(str) => Id(str),
    }
}
