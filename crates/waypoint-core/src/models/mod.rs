//! Data models for roadmaps and dashboard records.
//!
//! This module contains the core domain models of Waypoint: the parsed
//! roadmap hierarchy (weeks, tasks, subtasks), the view status enumeration,
//! and the per-user dashboard records (habits and todos). Display
//! implementations for these models live in [`crate::display`] to keep data
//! structures separate from presentation logic.
//!
//! # Display Architecture
//!
//! The models follow the same dual-display approach as the rest of the
//! crate:
//!
//! 1. **Model Display**: Display implementations in [`crate::display`]
//!    render each model as markdown
//! 2. **Wrapper Display**: Collection and result wrappers in
//!    [`crate::display`] add contextual formatting (lists, operation
//!    outcomes, expansion state)

pub mod dashboard;
pub mod roadmap;
pub mod status;


// Re-export all public types at the models level
pub use dashboard::{Habit, Todo};
pub use roadmap::{Roadmap, Task, Week};
pub use status::ViewStatus;
