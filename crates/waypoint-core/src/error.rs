//! Error types for the waypoint library.

use thiserror::Error;

/// Comprehensive error type for all waypoint operations.
///
/// Note that the roadmap parser has no variant here: parsing is total and
/// degrades malformed input to a partially-empty model instead of failing.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The text-generation collaborator rejected a request
    #[error("Roadmap generation failed: {message}")]
    Generation { message: String },
    /// Habit not found for the given ID
    #[error("Habit with ID {id} not found")]
    HabitNotFound { id: u64 },
    /// Todo not found for the given ID
    #[error("Todo with ID {id} not found")]
    TodoNotFound { id: u64 },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WaypointError {
        WaypointError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WaypointError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a generation failure from any displayable cause.
    pub fn generation(message: impl Into<String>) -> Self {
        WaypointError::Generation {
            message: message.into(),
        }
    }
}

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;
