//! Parameter structures for Waypoint operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, other
//! front ends later) without framework-specific derives. Interface layers
//! wrap these with their own derives (clap args in the CLI) and convert via
//! `From` implementations, keeping the core free of UI framework
//! dependencies.

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the record to operate on
    pub id: u64,
}

/// Parameters for listing records owned by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListForUser {
    /// Identifier of the owning user
    pub user_id: String,
}

/// Parameters for creating a new habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateHabit {
    /// Title of the habit (required, non-empty)
    pub title: String,
    /// Identifier of the owning user
    pub user_id: String,
}

/// Parameters for partially updating a habit.
///
/// Fields left as `None` are not modified.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHabit {
    /// Habit ID to update (required)
    pub id: u64,
    /// Updated title
    pub title: Option<String>,
    /// Manually corrected streak value
    pub streak: Option<u32>,
}

/// Parameters for creating a new todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Title of the todo (required, non-empty)
    pub title: String,
    /// Identifier of the owning user
    pub user_id: String,
}

/// Parameters for partially updating a todo.
///
/// Fields left as `None` are not modified.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    /// Todo ID to update (required)
    pub id: u64,
    /// Updated title
    pub title: Option<String>,
    /// Updated completion flag
    pub completed: Option<bool>,
}

impl CreateHabit {
    /// Validate creation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WaypointError::InvalidInput`] when the trimmed
    /// title is empty.
    pub fn validate(&self) -> crate::Result<()> {
        validate_title(&self.title)
    }
}

impl CreateTodo {
    /// Validate creation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WaypointError::InvalidInput`] when the trimmed
    /// title is empty.
    pub fn validate(&self) -> crate::Result<()> {
        validate_title(&self.title)
    }
}

fn validate_title(title: &str) -> crate::Result<()> {
    if title.trim().is_empty() {
        return Err(crate::WaypointError::invalid_input("title")
            .with_reason("title must not be empty or whitespace-only"));
    }
    Ok(())
}
