//! Roadmap model definitions.

use serde::{Deserialize, Serialize};

/// Sentinel focus used when a week header does not follow the
/// `Week <n>: <focus>` convention.
pub const UNDEFINED_FOCUS: &str = "Undefined";

/// A task within a week, with zero or more bullet subtasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Short task name, captured from the bold marker in the source text
    pub name: String,

    /// Bullet items belonging to this task, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<String>,
}

impl Task {
    /// Create a task with no subtasks yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subtasks: Vec::new(),
        }
    }
}

/// One week of a roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Week {
    /// Week index, taken from the header when present, otherwise the
    /// 1-based position of the chunk in the source text
    pub number: u32,

    /// Free-text theme of the week; [`UNDEFINED_FOCUS`] when the header
    /// was malformed
    pub focus: String,

    /// Tasks in source order; may be empty
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A parsed roadmap: weeks in the order they appeared in the source text.
///
/// Week order is chunk order, not numeric order; a generator that emits
/// weeks out of sequence is preserved as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roadmap {
    pub weeks: Vec<Week>,
}

impl Roadmap {
    /// A roadmap with no weeks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the roadmap contains no weeks.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Number of weeks.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Find the first week with the given number, if any.
    pub fn week(&self, number: u32) -> Option<&Week> {
        self.weeks.iter().find(|w| w.number == number)
    }

    /// Iterate over the weeks in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Week> {
        self.weeks.iter()
    }
}

impl<'a> IntoIterator for &'a Roadmap {
    type Item = &'a Week;
    type IntoIter = std::slice::Iter<'a, Week>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}
