//! Command handlers bridging CLI arguments to the core library.

use std::fs;

use anyhow::{bail, Context, Result};
use log::debug;
use waypoint_core::{
    generator::{CannedGenerator, OutlineGenerator, RoadmapGenerator},
    models::ViewStatus,
    parser,
    view::RoadmapView,
};

use crate::args::{ParseArgs, RoadmapArgs};
use crate::renderer::TerminalRenderer;

/// CLI command dispatcher holding the terminal renderer.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Generate a roadmap for a topic and render it.
    pub async fn handle_roadmap(&self, args: RoadmapArgs) -> Result<()> {
        let generator: Box<dyn RoadmapGenerator> = match &args.from_file {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Box::new(CannedGenerator::new(text))
            }
            None => Box::new(OutlineGenerator),
        };

        let mut view = RoadmapView::new();
        view.request_roadmap(&args.topic, generator.as_ref())
            .await
            .context("Invalid roadmap request")?;

        if let ViewStatus::Failed(message) = view.status() {
            bail!("Roadmap generation failed: {message}");
        }

        debug!(
            "Loaded roadmap with {} week(s)",
            view.model().map_or(0, |m| m.len())
        );

        for week in &args.expand {
            view.toggle_week(*week);
        }

        if args.json {
            let model = view.model().context("No roadmap was produced")?;
            println!("{}", serde_json::to_string_pretty(model)?);
        } else {
            self.renderer.render(&format!("{view}"))?;
        }
        Ok(())
    }

    /// Parse a roadmap text file and print the structured result.
    pub fn handle_parse(&self, args: ParseArgs) -> Result<()> {
        let text = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let roadmap = parser::parse(&text);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&roadmap)?);
        } else {
            self.renderer.render(&format!("{roadmap}"))?;
        }
        Ok(())
    }
}
