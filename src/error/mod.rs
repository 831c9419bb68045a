//! Error types and handling for skillfix
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`fs`]: File system errors
//! - [`config`]: Configuration errors

pub mod config;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for skillfix operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillfixError {
    // File system errors
    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(
        code(skillfix::fs::dir_read_failed),
        help("Pass the skills directory as the first argument, e.g. 'skillfix ./skills'")
    )]
    DirectoryReadFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(skillfix::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(skillfix::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillfix::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(skillfix::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(skillfix::config::parse_failed),
        help("Expected keys: 'skill_file' and a 'deny' list of entries with 'key' and optional 'children'")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(skillfix::config::invalid))]
    ConfigInvalid { message: String },

    // Frontmatter errors
    #[error("{count} skill file(s) have malformed frontmatter")]
    #[diagnostic(
        code(skillfix::frontmatter::malformed),
        help("Add the closing '---' line to each reported file, or run without --strict")
    )]
    MalformedFrontmatter { count: usize },
}

impl From<std::io::Error> for SkillfixError {
    fn from(err: std::io::Error) -> Self {
        SkillfixError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillfixError>;
