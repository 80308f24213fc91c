//! Display formatting for domain models and operation results.
//!
//! All output is markdown, rendered by the CLI's terminal renderer. Domain
//! models implement [`std::fmt::Display`] directly; collections and
//! operation outcomes get newtype wrappers so the same data can be
//! formatted differently depending on context (a habit inside a list, a
//! habit echoed back after creation, and so on).
//!
//! ## Module Organization
//!
//! - [`roadmap`]: roadmap, week, task, and view-state rendering
//! - [`dashboard`]: habit/todo rendering and collection wrappers
//! - [`results`]: operation result wrappers (create, update, delete)
//! - [`datetime`]: timestamp formatting in the local time zone

pub mod dashboard;
pub mod datetime;
pub mod results;
pub mod roadmap;

// Re-export commonly used types for convenience
pub use dashboard::{Habits, Todos};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
