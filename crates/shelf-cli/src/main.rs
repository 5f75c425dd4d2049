//! Shelf CLI Application
//!
//! Command-line interface for the shelf book store.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use shelf_core::LibraryBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        script,
        json,
        no_color,
        command,
    } = Args::parse();

    let library = LibraryBuilder::new()
        .with_config_path(config)
        .with_script_path(script)
        .build();

    info!(
        "Shelf started with config {}",
        library.config_path().display()
    );

    Cli::new(library, TerminalRenderer::new(!no_color), json).run(command)
}
