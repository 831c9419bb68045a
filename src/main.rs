//! skillfix - frontmatter fixer for skill definitions
//!
//! Walks a skills directory and strips non-standard fields (`license`, the
//! `metadata` block, or whatever `skillfix.yaml` lists) from the frontmatter
//! of each skill's `SKILL.md`.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod discovery;
mod error;
mod frontmatter;
mod operations;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Completions(args)) => commands::completions::run(&args),
        None => commands::fix::run(&cli.fix),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
