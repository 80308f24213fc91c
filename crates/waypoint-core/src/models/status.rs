//! View status enumeration for the roadmap view state machine.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a [`crate::view::RoadmapView`].
///
/// Transitions: `Idle -> Loading -> Ready | Failed`, with `Loading`
/// re-entered on every new request. A `Failed` transition does not clear a
/// previously loaded model; the stale model stays visible next to the error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", tag = "state", content = "message")]
pub enum ViewStatus {
    /// No roadmap has been requested yet
    #[default]
    Idle,

    /// A generation request is in flight
    Loading,

    /// A roadmap was generated and parsed
    Ready,

    /// The last request failed; carries the failure message
    Failed(String),
}

impl ViewStatus {
    /// Whether this is a terminal state (ready or failed).
    pub fn is_settled(&self) -> bool {
        matches!(self, ViewStatus::Ready | ViewStatus::Failed(_))
    }

    /// The failure message, if the view is in the failed state.
    pub fn failure(&self) -> Option<&str> {
        match self {
            ViewStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
