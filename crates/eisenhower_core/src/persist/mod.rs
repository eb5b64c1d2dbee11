//! Task file persistence.
//!
//! # Responsibility
//! - Read and write the flat JSON task list used across sessions.
//! - Classify failures into I/O, malformed JSON and invalid records.
//!
//! # Invariants
//! - A missing file loads as zero tasks, never as an error.
//! - Read paths reject invalid persisted records instead of masking them.
//! - Records carry exactly `x`, `y`, `description`; no envelope or version.

use crate::model::task::TaskValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod task_file;

pub use task_file::{TaskFile, DEFAULT_TASK_FILE_NAME};

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Malformed(serde_json::Error),
    InvalidData {
        index: usize,
        source: TaskValidationError,
    },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed task file: {err}"),
            Self::InvalidData { index, source } => {
                write!(f, "invalid task record at index {index}: {source}")
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::InvalidData { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

impl From<tempfile::PersistError> for PersistError {
    fn from(value: tempfile::PersistError) -> Self {
        Self::Io(value.error)
    }
}
