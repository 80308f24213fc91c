//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Habit, Todo};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub record: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(record: T) -> Self {
        Self { record }
    }
}

impl fmt::Display for CreateResult<Habit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created habit with ID: {}", self.record.id)?;
        writeln!(f)?;
        write!(f, "{}", self.record)
    }
}

impl fmt::Display for CreateResult<Todo> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created todo with ID: {}", self.record.id)?;
        writeln!(f)?;
        write!(f, "{}", self.record)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of the changes that were applied.
pub struct UpdateResult<T> {
    pub record: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an update result with no change annotations.
    pub fn new(record: T) -> Self {
        Self {
            record,
            changes: Vec::new(),
        }
    }

    /// Create an update result annotated with the changes made.
    pub fn with_changes(record: T, changes: Vec<String>) -> Self {
        Self { record, changes }
    }
}

impl<T: fmt::Display> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated:")?;
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.record)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// Shows the removed record so the caller can confirm what was deleted.
pub struct DeleteResult<T> {
    pub record: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(record: T) -> Self {
        Self { record }
    }
}

impl fmt::Display for DeleteResult<Habit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted habit with ID: {}", self.record.id)?;
        writeln!(f)?;
        write!(f, "{}", self.record)
    }
}

impl fmt::Display for DeleteResult<Todo> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted todo with ID: {}", self.record.id)?;
        writeln!(f)?;
        write!(f, "{}", self.record)
    }
}
