//! File system errors

use std::path::Path;

use super::SkillfixError;

/// Creates a directory read failed error
pub fn dir_read_failed(path: &Path, reason: impl ToString) -> SkillfixError {
    SkillfixError::DirectoryReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> SkillfixError {
    SkillfixError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> SkillfixError {
    SkillfixError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
