//! Display implementations for roadmaps and the view state machine.
//!
//! Standalone model Display produces canonical roadmap markdown (every
//! week fully written out), which round-trips through the parser. The
//! [`RoadmapView`] Display honors the view's expansion flags and lifecycle
//! status instead: collapsed weeks render as a single header line, and the
//! failed state renders its error above whatever stale model is still
//! loaded.

use std::fmt;

use crate::models::{Roadmap, Task, ViewStatus, Week};
use crate::view::RoadmapView;

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**", self.name)?;
        for subtask in &self.subtasks {
            writeln!(f, "- {subtask}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Week {}: {}", self.number, self.focus)?;
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No weeks recognized.");
        }
        for week in self {
            write!(f, "{week}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for ViewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewStatus::Idle => write!(f, "idle"),
            ViewStatus::Loading => write!(f, "loading"),
            ViewStatus::Ready => write!(f, "ready"),
            ViewStatus::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

impl Week {
    /// Render the week honoring an expansion flag.
    ///
    /// Collapsed weeks show the header line only, with a chevron marking
    /// the state.
    fn fmt_with_expansion(&self, f: &mut fmt::Formatter<'_>, expanded: bool) -> fmt::Result {
        let chevron = if expanded { "▾" } else { "▸" };
        writeln!(f, "## {chevron} Week {}: {}", self.number, self.focus)?;
        if !expanded {
            return Ok(());
        }

        writeln!(f)?;
        if self.tasks.is_empty() {
            writeln!(f, "No tasks this week.")?;
        }
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for RoadmapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status() {
            ViewStatus::Idle => return writeln!(f, "No roadmap requested yet."),
            ViewStatus::Loading => {
                return writeln!(f, "Generating roadmap for {}...", self.topic())
            }
            ViewStatus::Failed(message) => {
                writeln!(f, "Error: {message}")?;
                // Fall through: a previously loaded model stays visible.
            }
            ViewStatus::Ready => {}
        }

        let Some(roadmap) = self.model() else {
            return Ok(());
        };

        writeln!(f, "# Roadmap for {}", self.topic())?;
        writeln!(f)?;
        for week in roadmap {
            week.fmt_with_expansion(f, self.is_expanded(week.number))?;
        }
        Ok(())
    }
}
