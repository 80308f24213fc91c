//! Session-scoped dashboard store for habits and todos.
//!
//! The store keeps per-user dashboard records for the lifetime of one
//! session; nothing is written to disk. It mirrors the operation surface of
//! the hosted CRUD backend the rest of the application talks to:
//! list-by-user, create, partial update by id, and delete by id, each
//! returning the affected record.
//!
//! Ids are allocated monotonically per store and never reused within a
//! session. List results preserve insertion order.

use jiff::civil::Date;
use jiff::Timestamp;

use crate::error::{Result, WaypointError};
use crate::models::{Habit, Todo};
use crate::params::{CreateHabit, CreateTodo, Id, ListForUser, UpdateHabit, UpdateTodo};

/// In-memory store of dashboard records for one session.
#[derive(Debug, Default)]
pub struct SessionStore {
    habits: Vec<Habit>,
    todos: Vec<Todo>,
    next_habit_id: u64,
    next_todo_id: u64,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new habit with a zero streak.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::InvalidInput`] for a blank title.
    pub fn create_habit(&mut self, params: &CreateHabit) -> Result<Habit> {
        params.validate()?;
        self.next_habit_id += 1;
        let habit = Habit {
            id: self.next_habit_id,
            title: params.title.trim().to_string(),
            streak: 0,
            user_id: params.user_id.clone(),
            last_completed: None,
            created_at: Timestamp::now(),
        };
        self.habits.push(habit.clone());
        Ok(habit)
    }

    /// List a user's habits in insertion order.
    pub fn list_habits(&self, params: &ListForUser) -> Vec<Habit> {
        self.habits
            .iter()
            .filter(|h| h.user_id == params.user_id)
            .cloned()
            .collect()
    }

    /// Partially update a habit; unset fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::HabitNotFound`] for an unknown id.
    pub fn update_habit(&mut self, params: &UpdateHabit) -> Result<Habit> {
        let habit = self.habit_mut(params.id)?;
        if let Some(title) = &params.title {
            habit.title = title.clone();
        }
        if let Some(streak) = params.streak {
            habit.streak = streak;
        }
        Ok(habit.clone())
    }

    /// Record a completion of a habit for the given calendar day.
    ///
    /// Streak semantics live on [`Habit::mark_done`]: same day is a no-op,
    /// the following day extends the streak, anything else resets it.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::HabitNotFound`] for an unknown id.
    pub fn mark_habit_done(&mut self, params: &Id, day: Date) -> Result<Habit> {
        let habit = self.habit_mut(params.id)?;
        habit.mark_done(day);
        Ok(habit.clone())
    }

    /// Delete a habit, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::HabitNotFound`] for an unknown id.
    pub fn delete_habit(&mut self, params: &Id) -> Result<Habit> {
        let index = self
            .habits
            .iter()
            .position(|h| h.id == params.id)
            .ok_or(WaypointError::HabitNotFound { id: params.id })?;
        Ok(self.habits.remove(index))
    }

    /// Create a new, uncompleted todo.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::InvalidInput`] for a blank title.
    pub fn create_todo(&mut self, params: &CreateTodo) -> Result<Todo> {
        params.validate()?;
        self.next_todo_id += 1;
        let todo = Todo {
            id: self.next_todo_id,
            title: params.title.trim().to_string(),
            completed: false,
            user_id: params.user_id.clone(),
            created_at: Timestamp::now(),
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// List a user's todos in insertion order.
    pub fn list_todos(&self, params: &ListForUser) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|t| t.user_id == params.user_id)
            .cloned()
            .collect()
    }

    /// Partially update a todo; unset fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::TodoNotFound`] for an unknown id.
    pub fn update_todo(&mut self, params: &UpdateTodo) -> Result<Todo> {
        let todo = self.todo_mut(params.id)?;
        if let Some(title) = &params.title {
            todo.title = title.clone();
        }
        if let Some(completed) = params.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    /// Flip a todo's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::TodoNotFound`] for an unknown id.
    pub fn toggle_todo(&mut self, params: &Id) -> Result<Todo> {
        let todo = self.todo_mut(params.id)?;
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    /// Delete a todo, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::TodoNotFound`] for an unknown id.
    pub fn delete_todo(&mut self, params: &Id) -> Result<Todo> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == params.id)
            .ok_or(WaypointError::TodoNotFound { id: params.id })?;
        Ok(self.todos.remove(index))
    }

    fn habit_mut(&mut self, id: u64) -> Result<&mut Habit> {
        self.habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(WaypointError::HabitNotFound { id })
    }

    fn todo_mut(&mut self, id: u64) -> Result<&mut Todo> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(WaypointError::TodoNotFound { id })
    }
}
