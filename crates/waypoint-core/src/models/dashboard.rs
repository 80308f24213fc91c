//! Dashboard record definitions: habits and todos.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A recurring habit tracked per user, with a consecutive-day streak.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    /// Unique identifier for the habit
    pub id: u64,

    /// Title of the habit
    pub title: String,

    /// Current consecutive-day streak
    pub streak: u32,

    /// Identifier of the owning user
    pub user_id: String,

    /// Calendar day the habit was last marked done, if ever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<Date>,

    /// Timestamp when the habit was created (UTC)
    pub created_at: Timestamp,
}

impl Habit {
    /// Record a completion for the given calendar day and update the streak.
    ///
    /// Marking the same day twice is a no-op. Marking the day after the last
    /// completion extends the streak by one. Any other day (a gap, or a day
    /// in the past) restarts the streak at 1.
    pub fn mark_done(&mut self, day: Date) {
        let extends = self
            .last_completed
            .and_then(|last| last.tomorrow().ok())
            .is_some_and(|next| next == day);

        if self.last_completed == Some(day) {
            return;
        }
        self.streak = if extends { self.streak + 1 } else { 1 };
        self.last_completed = Some(day);
    }
}

/// A one-off todo item tracked per user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    /// Unique identifier for the todo
    pub id: u64,

    /// Title of the todo
    pub title: String,

    /// Whether the todo has been completed
    pub completed: bool,

    /// Identifier of the owning user
    pub user_id: String,

    /// Timestamp when the todo was created (UTC)
    pub created_at: Timestamp,
}
