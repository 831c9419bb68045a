//! Frontmatter detection and normalization for skill files.
//!
//! A skill file starts with a `---` line, a block of `key: value` lines and a
//! closing `---`. Everything from the closing delimiter onward is the body and
//! is never touched.

mod normalizer;

pub use normalizer::strip_denied_fields;

use crate::config::DeniedField;

/// Frontmatter delimiter
pub const DELIMITER: &str = "---";

/// A document split at its frontmatter delimiters
#[derive(Debug, PartialEq, Eq)]
pub enum Document<'a> {
    /// Does not start with a delimiter
    Plain,
    /// Starts with a delimiter that is never closed
    Unterminated,
    Frontmatter {
        /// Text between the delimiters, trimmed
        frontmatter: &'a str,
        /// Closing delimiter and everything after it
        body: &'a str,
    },
}

/// Split `content` into frontmatter and body.
///
/// The closing delimiter is the next `---` anywhere after the opening one,
/// not necessarily on a line of its own.
pub fn split(content: &str) -> Document<'_> {
    let Some(rest) = content.strip_prefix(DELIMITER) else {
        return Document::Plain;
    };
    match rest.find(DELIMITER) {
        Some(end) => Document::Frontmatter {
            frontmatter: rest[..end].trim(),
            body: &rest[end..],
        },
        None => Document::Unterminated,
    }
}

/// Result of normalizing a document
#[derive(Debug, PartialEq, Eq)]
pub enum Normalized {
    Unchanged,
    Changed(String),
    MissingClosingDelimiter,
}

/// Whether any top-level line of `frontmatter` introduces a denied field
pub fn has_denied_field(frontmatter: &str, deny: &[DeniedField]) -> bool {
    frontmatter
        .split('\n')
        .any(|line| deny.iter().any(|field| field.matches(line)))
}

/// Remove denied fields from the frontmatter of `content`.
pub fn normalize(content: &str, deny: &[DeniedField]) -> Normalized {
    let (frontmatter, body) = match split(content) {
        Document::Plain => return Normalized::Unchanged,
        Document::Unterminated => return Normalized::MissingClosingDelimiter,
        Document::Frontmatter { frontmatter, body } => (frontmatter, body),
    };

    if !has_denied_field(frontmatter, deny) {
        return Normalized::Unchanged;
    }

    let kept = strip_denied_fields(frontmatter, deny).join("\n");
    Normalized::Changed(format!("{DELIMITER}\n{kept}\n{body}"))
}
