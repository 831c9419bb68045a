//! Command implementations for skillfix CLI

pub mod completions;
pub mod fix;
