//! Operations module
//!
//! High-level workflows behind the CLI commands:
//! - FixOperation: normalize frontmatter across a skills directory

pub mod fix;

pub use fix::{FixOperation, FixOptions};
