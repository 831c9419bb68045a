//! Configuration errors

use std::path::Path;

use super::SkillfixError;

/// Creates a config read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> SkillfixError {
    SkillfixError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: &Path, reason: impl ToString) -> SkillfixError {
    SkillfixError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> SkillfixError {
    SkillfixError::ConfigInvalid {
        message: message.into(),
    }
}
