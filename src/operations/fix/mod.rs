//! Fix operation module
//!
//! Runs the frontmatter normalizer over every skill in a skills directory and
//! collects a [`FixReport`]. Files are handled one at a time in discovery
//! order; a read or write failure aborts the whole run.

pub mod display;

use std::path::{Path, PathBuf};

use crate::cli::FixArgs;
use crate::common::fs::{read_text, write_atomic};
use crate::config::{DeniedField, FixerConfig};
use crate::discovery::discover_skill_files;
use crate::error::Result;
use crate::frontmatter::{Normalized, normalize};

/// Configuration options for a fix run
#[derive(Debug, Clone)]
pub struct FixOptions {
    pub dry_run: bool,
    pub strict: bool,
    pub verbose: bool,
    pub skill_file: String,
    pub deny: Vec<DeniedField>,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self::new(&FixerConfig::default())
    }
}

impl FixOptions {
    pub fn new(config: &FixerConfig) -> Self {
        Self {
            dry_run: false,
            strict: false,
            verbose: false,
            skill_file: config.skill_file.clone(),
            deny: config.deny.clone(),
        }
    }

    pub fn from_args(args: &FixArgs, config: &FixerConfig) -> Self {
        Self {
            dry_run: args.is_dry_run(),
            strict: args.strict,
            verbose: args.verbose,
            ..Self::new(config)
        }
    }
}

/// What happened to a single skill file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    Fixed,
    WouldFix,
    Unchanged,
    /// Frontmatter opened but never closed; file left untouched
    Malformed,
}

/// Per-file outcomes of a run, in processing order
#[derive(Debug, Default)]
pub struct FixReport {
    pub entries: Vec<(PathBuf, FixOutcome)>,
}

impl FixReport {
    pub fn record(&mut self, path: PathBuf, outcome: FixOutcome) {
        self.entries.push((path, outcome));
    }

    /// Files fixed, or that would be fixed in a dry run
    pub fn fixed(&self) -> usize {
        self.count(|o| matches!(o, FixOutcome::Fixed | FixOutcome::WouldFix))
    }

    pub fn malformed(&self) -> usize {
        self.count(|o| o == FixOutcome::Malformed)
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    fn count(&self, pred: impl Fn(FixOutcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(*o)).count()
    }
}

/// Normalize one skill file, persisting the result unless dry-running.
pub fn fix_skill_file(path: &Path, options: &FixOptions) -> Result<FixOutcome> {
    let content = read_text(path)?;

    match normalize(&content, &options.deny) {
        Normalized::Unchanged => Ok(FixOutcome::Unchanged),
        Normalized::MissingClosingDelimiter => Ok(FixOutcome::Malformed),
        Normalized::Changed(_) if options.dry_run => Ok(FixOutcome::WouldFix),
        Normalized::Changed(new_content) => {
            write_atomic(path, &new_content)?;
            Ok(FixOutcome::Fixed)
        }
    }
}

/// High-level fix operation over a skills directory
pub struct FixOperation {
    options: FixOptions,
}

impl FixOperation {
    pub fn new(options: FixOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FixOptions {
        &self.options
    }

    /// Process every skill under `root`, printing each outcome as it happens.
    pub fn execute(&self, root: &Path) -> Result<FixReport> {
        let files = discover_skill_files(root, &self.options.skill_file)?;
        let mut report = FixReport::default();

        for path in files {
            let outcome = fix_skill_file(&path, &self.options)?;
            display::print_outcome(&path, outcome, self.options.verbose);
            report.record(path, outcome);
        }

        Ok(report)
    }
}
