//! Waypoint CLI Application
//!
//! Command-line interface for generating and rendering learning roadmaps.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();
    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Waypoint started");

    match command {
        Commands::Roadmap(roadmap_args) => cli.handle_roadmap(roadmap_args).await,
        Commands::Parse(parse_args) => cli.handle_parse(parse_args),
    }
}
