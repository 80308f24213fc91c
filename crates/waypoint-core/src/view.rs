//! Roadmap view state machine.
//!
//! [`RoadmapView`] owns the parsed model, per-week expansion flags, and the
//! request lifecycle status. It is a plain value owned by whatever layer
//! renders it; there is no process-wide singleton.
//!
//! The request lifecycle is split into explicit phases so the state machine
//! stays synchronous and testable: [`RoadmapView::begin_request`] validates
//! the topic and hands back a [`RequestId`], and
//! [`RoadmapView::complete`] / [`RoadmapView::fail`] apply the outcome.
//! Each `begin_request` bumps a monotonic sequence; an outcome carrying a
//! superseded id is discarded, so a slow response can never overwrite the
//! result of a newer request. [`RoadmapView::request_roadmap`] wires the
//! phases together around a [`RoadmapGenerator`] call for the common case.

use std::collections::HashMap;

use crate::error::{Result, WaypointError};
use crate::generator::RoadmapGenerator;
use crate::models::{Roadmap, ViewStatus};
use crate::parser;

/// Week number pre-expanded after a successful request.
///
/// This is the fixed key 1, not "the lowest-numbered week": a roadmap whose
/// weeks start at 2 comes back fully collapsed.
const PRE_EXPANDED_WEEK: u32 = 1;

/// Opaque handle tying a request outcome back to the request that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Per-session view state for one rendered roadmap.
#[derive(Debug, Default)]
pub struct RoadmapView {
    topic: String,
    model: Option<Roadmap>,
    expanded: HashMap<u32, bool>,
    status: ViewStatus,
    seq: u64,
}

impl RoadmapView {
    /// Create an empty view in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The topic of the most recent accepted request.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The parsed model, if one has been loaded.
    ///
    /// Stays populated across a failed re-request: the stale model is shown
    /// next to the error rather than cleared.
    pub fn model(&self) -> Option<&Roadmap> {
        self.model.as_ref()
    }

    /// Current lifecycle status.
    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    /// Whether the given week is expanded. Absent weeks are collapsed.
    pub fn is_expanded(&self, week: u32) -> bool {
        self.expanded.get(&week).copied().unwrap_or(false)
    }

    /// Start a generation request for `topic`.
    ///
    /// Transitions to `Loading` and supersedes any in-flight request. The
    /// existing model and expansion flags are left in place until an
    /// outcome arrives.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::InvalidInput`] without any state change
    /// when the trimmed topic is empty.
    pub fn begin_request(&mut self, topic: &str) -> Result<RequestId> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(WaypointError::invalid_input("topic")
                .with_reason("topic must not be empty or whitespace-only"));
        }

        self.topic = topic.to_string();
        self.status = ViewStatus::Loading;
        self.seq += 1;
        Ok(RequestId(self.seq))
    }

    /// Apply a successful generation outcome.
    ///
    /// Parses the text, replaces the model, resets expansion to week 1
    /// only, and transitions to `Ready`. Outcomes for superseded requests
    /// are dropped.
    pub fn complete(&mut self, id: RequestId, raw_text: &str) {
        if !self.is_current(id) {
            return;
        }
        self.model = Some(parser::parse(raw_text));
        self.expanded = HashMap::from([(PRE_EXPANDED_WEEK, true)]);
        self.status = ViewStatus::Ready;
    }

    /// Apply a failed generation outcome.
    ///
    /// Transitions to `Failed` with the message; the previous model and
    /// expansion flags are deliberately left untouched. Outcomes for
    /// superseded requests are dropped.
    pub fn fail(&mut self, id: RequestId, message: impl Into<String>) {
        if !self.is_current(id) {
            return;
        }
        self.status = ViewStatus::Failed(message.into());
    }

    /// Run a full request cycle against a generator.
    ///
    /// Generation failures are recorded in the status rather than
    /// propagated, so callers can always render the resulting state; only
    /// topic validation is surfaced as an error.
    ///
    /// # Errors
    ///
    /// Returns [`WaypointError::InvalidInput`] for a whitespace-only topic,
    /// with no state change.
    pub async fn request_roadmap(
        &mut self,
        topic: &str,
        generator: &dyn RoadmapGenerator,
    ) -> Result<()> {
        let id = self.begin_request(topic)?;
        let topic = self.topic.clone();
        match generator.generate(&topic).await {
            Ok(text) => self.complete(id, &text),
            Err(err) => self.fail(id, err.to_string()),
        }
        Ok(())
    }

    /// Flip the expansion flag for a week.
    ///
    /// Absent weeks count as collapsed, so the first toggle expands. Two
    /// toggles restore the original observable state. Does not touch the
    /// model or status.
    pub fn toggle_week(&mut self, week: u32) {
        let flag = self.expanded.entry(week).or_insert(false);
        *flag = !*flag;
    }

    fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.seq
    }
}
