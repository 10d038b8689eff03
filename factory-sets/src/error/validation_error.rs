use std::fmt::Display;

use thiserror::Error;

/// An error resulting from some validation process.
///
/// Holds every problem found, so callers can report all of them at once.
#[derive(Debug, Default, Error)]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    /// Creates a new validation error from a list of problems.
    pub fn new(problems: Vec<String>) -> Self {
        Self { problems }
    }

    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed:\n{}", self.problems.join("\n"))
    }
}

impl<S> FromIterator<S> for ValidationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}
