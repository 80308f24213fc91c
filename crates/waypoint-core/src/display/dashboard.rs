//! Display implementations and collection wrappers for dashboard records.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Habit, Todo};

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Streak: {} day(s)", self.streak)?;
        if let Some(day) = self.last_completed {
            writeln!(f, "- Last completed: {day}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        Ok(())
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.completed { "✓" } else { "○" };
        writeln!(f, "- {icon} {}. {}", self.id, self.title)
    }
}

/// Newtype wrapper for displaying a user's habits.
///
/// Handles the empty case with a friendly message instead of silence.
pub struct Habits(pub Vec<Habit>);

impl Habits {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of habits in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the habits.
    pub fn iter(&self) -> std::slice::Iter<'_, Habit> {
        self.0.iter()
    }
}

impl fmt::Display for Habits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No habits found.");
        }
        for habit in &self.0 {
            write!(f, "{habit}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a user's todos as a checklist.
pub struct Todos(pub Vec<Todo>);

impl Todos {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of todos in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the todos.
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.0.iter()
    }
}

impl fmt::Display for Todos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No todos found.");
        }
        for todo in &self.0 {
            write!(f, "{todo}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    #[test]
    fn test_empty_collections_have_messages() {
        assert!(format!("{}", Habits(vec![])).contains("No habits found."));
        assert!(format!("{}", Todos(vec![])).contains("No todos found."));
    }

    #[test]
    fn test_todo_checklist_icons() {
        let todo = Todo {
            id: 1,
            title: "Ship".to_string(),
            completed: true,
            user_id: "u".to_string(),
            created_at: Timestamp::now(),
        };
        assert!(format!("{todo}").contains("✓ 1. Ship"));
    }
}
