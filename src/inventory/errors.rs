//! Error types for inventory operations
//!
//! This module defines [`InventoryError`], which represents every failure a
//! container, persistence or menu operation can report. None of them are
//! fatal: the menu prints the error and returns to the command prompt.

use crate::records::{RecordKind, RecordParseError};
use std::fmt;
use std::path::PathBuf;

/// What was being done to a file when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Read,
    Write,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Read => write!(f, "reading"),
            FileAction::Write => write!(f, "writing"),
        }
    }
}

/// Errors that can occur while operating on the inventory
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryError {
    /// Insert of an id that is already present
    DuplicateKey { kind: RecordKind, id: i32 },

    /// Lookup or removal of an id that is not present
    NotFound { kind: RecordKind, id: i32 },

    /// A data file could not be opened, read or written
    FileError {
        path: PathBuf,
        action: FileAction,
        message: String,
    },

    /// A numeric field in a data file did not parse
    MalformedRecord {
        kind: RecordKind,
        path: PathBuf,
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A prompt answer could not be converted
    InvalidInput { field: String, value: String },
}

impl InventoryError {
    pub(crate) fn file(path: impl Into<PathBuf>, action: FileAction, err: std::io::Error) -> Self {
        InventoryError::FileError {
            path: path.into(),
            action,
            message: err.to_string(),
        }
    }

    pub(crate) fn malformed(
        kind: RecordKind,
        path: impl Into<PathBuf>,
        line: usize,
        err: RecordParseError,
    ) -> Self {
        InventoryError::MalformedRecord {
            kind,
            path: path.into(),
            line,
            field: err.field,
            value: err.value,
        }
    }

    /// Whether this is a duplicate-key conflict (skipped during bulk load)
    pub fn is_duplicate(&self) -> bool {
        matches!(self, InventoryError::DuplicateKey { .. })
    }
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::DuplicateKey { kind, id } => {
                write!(f, "Duplicate {} ID: {}", kind, id)
            }
            InventoryError::NotFound { kind, id } => {
                write!(f, "{} ID not found: {}", kind, id)
            }
            InventoryError::FileError {
                path,
                action,
                message,
            } => {
                write!(
                    f,
                    "Cannot open {} for {}: {}",
                    path.display(),
                    action,
                    message
                )
            }
            InventoryError::MalformedRecord {
                kind,
                path,
                line,
                field,
                value,
            } => {
                write!(
                    f,
                    "Malformed {} record at {}:{}: invalid {} '{}'",
                    kind.to_string().to_lowercase(),
                    path.display(),
                    line,
                    field,
                    value
                )
            }
            InventoryError::InvalidInput { field, value } => {
                write!(f, "Invalid input for {}: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for InventoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_duplicate() {
        let err = InventoryError::DuplicateKey {
            kind: RecordKind::Product,
            id: 7,
        };
        assert_eq!(err.to_string(), "Duplicate Product ID: 7");
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_display_malformed() {
        let err = InventoryError::malformed(
            RecordKind::Stock,
            "stocks.txt",
            3,
            RecordParseError {
                field: "quantity",
                value: "lots".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Malformed stock record at stocks.txt:3: invalid quantity 'lots'"
        );
        assert!(!err.is_duplicate());
    }
}
