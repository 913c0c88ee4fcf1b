//! Declared variable state.

use serde::Serialize;

/// How a variable was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Must be non-empty for resolution to succeed.
    Need,
    /// Optional; an empty value is simply not delivered.
    Want,
    /// Optional; falls back to the example text when unset.
    May,
}

impl Requirement {
    /// Whether an empty value fails resolution.
    pub fn is_required(self) -> bool {
        matches!(self, Requirement::Need)
    }
}

/// One declared environment variable.
///
/// Built once at declaration time from the looked-up value and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableSpec {
    pub description: String,
    pub example: String,
    /// Resolved value; empty when unset and no default applies.
    pub value: String,
    pub requirement: Requirement,
    /// False only for a `Need` whose value is empty.
    pub satisfied: bool,
    /// True when a `May` fell back to its example text.
    pub default_applied: bool,
}

impl VariableSpec {
    /// Build a spec from the result of an environment lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use envexist::registry::{Requirement, VariableSpec};
    ///
    /// let spec = VariableSpec::declare(Requirement::May, "port", "8080", None);
    /// assert_eq!(spec.value, "8080");
    /// assert!(spec.satisfied);
    /// assert!(spec.default_applied);
    ///
    /// let spec = VariableSpec::declare(Requirement::Need, "host", "localhost", Some(String::new()));
    /// assert!(!spec.satisfied);
    /// ```
    pub fn declare(
        requirement: Requirement,
        description: impl Into<String>,
        example: impl Into<String>,
        looked_up: Option<String>,
    ) -> Self {
        let example = example.into();
        let looked_up = looked_up.unwrap_or_default();

        let (value, default_applied) = match requirement {
            Requirement::May if looked_up.is_empty() => (example.clone(), true),
            _ => (looked_up, false),
        };
        let satisfied = !requirement.is_required() || !value.is_empty();

        Self {
            description: description.into(),
            example,
            value,
            requirement,
            satisfied,
            default_applied,
        }
    }

    /// Whether the spec was declared with `Need`.
    pub fn is_required(&self) -> bool {
        self.requirement.is_required()
    }

    /// Whether the example text doubles as a default.
    pub fn has_default(&self) -> bool {
        self.requirement == Requirement::May
    }
}
