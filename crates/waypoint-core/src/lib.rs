//! Core library for the Waypoint habit and roadmap application.
//!
//! This crate provides the business logic behind Waypoint: parsing
//! AI-generated roadmap text into a structured week/task/subtask model,
//! the expand/collapse view state machine that presents it, and the
//! session-scoped dashboard store for habits and todos.
//!
//! # Architecture
//!
//! ```text
//! topic ──▶ RoadmapGenerator ──▶ raw text ──▶ parser ──▶ Roadmap
//!                 (trait)                                   │
//!                                                           ▼
//!                                                      RoadmapView
//!                                           (status + expansion flags)
//! ```
//!
//! The parser is a total function: any string yields a (possibly empty)
//! [`models::Roadmap`], with malformed sections degrading to best-effort
//! structure instead of errors. The view owns the parsed model together
//! with per-week expansion flags and an `Idle -> Loading -> Ready | Failed`
//! status, and discards responses that arrive for superseded requests.
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{generator::CannedGenerator, view::RoadmapView};
//!
//! # async fn example() -> waypoint_core::Result<()> {
//! let generator = CannedGenerator::new(
//!     "### Week 1: Basics\n**Set up**\n- Install toolchain\n",
//! );
//!
//! let mut view = RoadmapView::new();
//! view.request_roadmap("learn rust", &generator).await?;
//!
//! assert!(view.is_expanded(1));
//! let roadmap = view.model().expect("roadmap is loaded");
//! assert_eq!(roadmap.weeks[0].focus, "Basics");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod parser;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, Habits, LocalDateTime, Todos, UpdateResult};
pub use error::{Result, WaypointError};
pub use generator::{CannedGenerator, OutlineGenerator, RoadmapGenerator};
pub use models::{Habit, Roadmap, Task, Todo, ViewStatus, Week};
pub use params::{CreateHabit, CreateTodo, Id, ListForUser, UpdateHabit, UpdateTodo};
pub use session::SessionStore;
pub use view::{RequestId, RoadmapView};
