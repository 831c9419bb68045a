use clap::Args;
use std::path::PathBuf;

/// Arguments for fixing a skills directory
#[derive(Args, Debug)]
pub struct FixArgs {
    /// Skills directory, one sub-directory per skill
    #[arg(default_value = "skills")]
    pub root: PathBuf,

    /// Pass `true` (any case) to only report what would change
    #[arg(value_name = "DRY_RUN")]
    pub dry_run_literal: Option<String>,

    /// Show what would be fixed without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error when a skill has malformed frontmatter
    #[arg(long)]
    pub strict: bool,

    /// Configuration file (defaults to <ROOT>/skillfix.yaml when present)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also list skills that needed no change
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl FixArgs {
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
            || self
                .dry_run_literal
                .as_deref()
                .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}
