use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Main command-line interface for the Waypoint roadmap tool
///
/// Waypoint turns a learning topic into a structured multi-week roadmap and
/// renders it in the terminal with per-week expand/collapse state. Roadmap
/// text comes from a generator: a built-in offline outline by default, or a
/// pre-generated text file via `--from-file`.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate and render a roadmap for a topic
    #[command(alias = "r")]
    Roadmap(RoadmapArgs),
    /// Parse an existing roadmap text file and print the structured result
    #[command(alias = "p")]
    Parse(ParseArgs),
}

/// Generate a roadmap for a topic and render it
#[derive(ClapArgs)]
pub struct RoadmapArgs {
    /// Topic to build a roadmap for
    pub topic: String,

    /// Read roadmap text from a file instead of generating it
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Additionally toggle these week numbers before rendering
    /// (week 1 starts expanded; toggling 1 collapses it)
    #[arg(long, value_name = "WEEK")]
    pub expand: Vec<u32>,

    /// Print the parsed model as JSON instead of rendering markdown
    #[arg(long)]
    pub json: bool,
}

/// Parse a roadmap text file without going through a generator
#[derive(ClapArgs)]
pub struct ParseArgs {
    /// Path to the roadmap text file
    pub file: PathBuf,

    /// Print the parsed model as JSON instead of canonical markdown
    #[arg(long)]
    pub json: bool,
}
