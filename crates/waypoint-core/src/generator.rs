//! Roadmap text generation collaborators.
//!
//! The view state machine does not care where roadmap text comes from; it
//! only needs something that can turn a topic into text. In production that
//! is a hosted AI text service. This module defines the trait for that
//! collaborator plus the two implementations the workspace ships: a
//! deterministic offline template and a canned-text generator for files and
//! tests.

use async_trait::async_trait;

use crate::error::Result;

/// A collaborator that produces roadmap text for a topic.
///
/// Implementations may suspend (network calls, subprocesses); the parser
/// downstream only requires the output to be a string following the
/// `### Week <n>: <focus>` conventions, and degrades gracefully when it
/// does not.
#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    /// Generate roadmap text for the given topic.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WaypointError::Generation`] when the underlying
    /// service rejects the request.
    async fn generate(&self, topic: &str) -> Result<String>;
}

/// Offline generator producing a fixed four-week outline for any topic.
///
/// Stands in for the hosted text service when running disconnected. The
/// output is deterministic, which also makes it convenient for tests.
#[derive(Debug, Clone, Default)]
pub struct OutlineGenerator;

#[async_trait]
impl RoadmapGenerator for OutlineGenerator {
    async fn generate(&self, topic: &str) -> Result<String> {
        let mut text = format!("Roadmap for {topic}\n\n");
        let weeks = [
            ("Foundations", "Survey the landscape", "Set up tools"),
            ("Core practice", "Work through fundamentals", "Build a small exercise"),
            ("Applied work", "Start a focused project", "Review and iterate"),
            ("Consolidation", "Fill remaining gaps", "Plan what comes next"),
        ];

        for (i, (focus, first, second)) in weeks.iter().enumerate() {
            text.push_str(&format!("### Week {}: {focus}\n", i + 1));
            text.push_str(&format!("**{first}**\n"));
            text.push_str(&format!("- Relate it to {topic}\n"));
            text.push_str("- Take notes on open questions\n");
            text.push_str(&format!("**{second}**\n"));
            text.push_str("- Timebox the session\n\n");
        }

        Ok(text)
    }
}

/// Generator that returns a fixed block of text regardless of topic.
///
/// Used by the CLI's `--from-file` mode and throughout the test suites.
#[derive(Debug, Clone)]
pub struct CannedGenerator {
    text: String,
}

impl CannedGenerator {
    /// Create a generator that always returns `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl RoadmapGenerator for CannedGenerator {
    async fn generate(&self, _topic: &str) -> Result<String> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[tokio::test]
    async fn test_outline_generator_output_parses() {
        let text = OutlineGenerator
            .generate("rust")
            .await
            .expect("offline generation cannot fail");
        let roadmap = parser::parse(&text);

        assert_eq!(roadmap.len(), 4);
        assert_eq!(roadmap.weeks[0].number, 1);
        assert_eq!(roadmap.weeks[0].tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_canned_generator_ignores_topic() {
        let canned = CannedGenerator::new("### Week 1: X\n**A**\n");
        let a = canned.generate("one").await.unwrap();
        let b = canned.generate("two").await.unwrap();
        assert_eq!(a, b);
    }
}
