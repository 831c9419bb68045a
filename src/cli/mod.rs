//! CLI definitions using clap derive API
//!
//! Without a subcommand the tool fixes a skills directory. Argument types live
//! in submodules:
//! - fix: Skills directory, dry-run and strictness options
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod fix;

pub use completions::CompletionsArgs;
pub use fix::FixArgs;

/// skillfix - strip non-standard frontmatter fields from skills
#[derive(Parser, Debug)]
#[command(
    name = "skillfix",
    author,
    version,
    args_conflicts_with_subcommands = true,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Strip non-standard frontmatter fields from skill definitions",
    long_about = "Rewrites the frontmatter of every <ROOT>/<skill>/SKILL.md, removing the \
                  'license' field and the 'metadata' block (or the fields listed in \
                  skillfix.yaml). The body of each file is left untouched. \
                  A skills directory named 'completions' must be given as './completions'.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skillfix                         \x1b[90m# Fix ./skills\x1b[0m\n   \
                  skillfix ./my-skills true        \x1b[90m# Dry run on ./my-skills\x1b[0m\n   \
                  skillfix ./my-skills --dry-run   \x1b[90m# Same as above\x1b[0m\n   \
                  skillfix --strict                \x1b[90m# Fail on malformed frontmatter\x1b[0m\n"
)]
pub struct Cli {
    #[command(flatten)]
    pub fix: FixArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}
