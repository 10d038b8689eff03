use crate::error::{
    Error,
    ValidationError,
};

/// Problems produced by proofreading.
///
/// Converted to [`ValidationError`] when returned to callers.
#[derive(Debug, Default)]
pub struct SetValidationProblems {
    pub problems: Vec<String>,
}

impl SetValidationProblems {
    pub fn problem(problem: String) -> Self {
        let mut problems = Self::default();
        problems.add_problem(problem);
        problems
    }

    pub fn add_problem(&mut self, problem: String) {
        self.problems.push(problem)
    }

    pub fn merge(&mut self, mut other: Self) {
        self.problems.append(&mut other.problems);
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

impl From<Error> for SetValidationProblems {
    fn from(value: Error) -> Self {
        Self::problem(format!("{value:#}"))
    }
}

impl From<SetValidationProblems> for Result<(), ValidationError> {
    fn from(value: SetValidationProblems) -> Self {
        if value.problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(value.problems))
        }
    }
}
