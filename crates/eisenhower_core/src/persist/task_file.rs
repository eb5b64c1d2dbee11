//! JSON task file adapter.
//!
//! # Responsibility
//! - Load the task list at startup and save it at shutdown.
//! - Replace the target file in one rename so a crash mid-write leaves the
//!   previous contents intact.
//!
//! # Invariants
//! - `load` never creates the file.
//! - `save` always writes a JSON array, `[]` when there are no tasks.

use super::{PersistError, PersistResult};
use crate::model::task::{Task, TaskRecord};
use log::{error, info};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Default task file, resolved against the working directory.
pub const DEFAULT_TASK_FILE_NAME: &str = "tasks.json";

/// Handle to the on-disk task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every persisted record.
    ///
    /// # Errors
    /// - `Io` when the file exists but cannot be read.
    /// - `Malformed` when the content is not a JSON array of records.
    /// - `InvalidData` when a record has an empty description or a
    ///   non-finite coordinate.
    pub fn load(&self) -> PersistResult<Vec<TaskRecord>> {
        let started_at = Instant::now();
        info!("event=tasks_load module=persist status=start");

        match self.read_records() {
            Ok(records) => {
                info!(
                    "event=tasks_load module=persist status=ok count={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records)
            }
            Err(err) => {
                error!(
                    "event=tasks_load module=persist status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Overwrites the file with `records`.
    pub fn save(&self, records: &[TaskRecord]) -> PersistResult<()> {
        let started_at = Instant::now();
        info!(
            "event=tasks_save module=persist status=start count={}",
            records.len()
        );

        match self.write_records(records) {
            Ok(()) => {
                info!(
                    "event=tasks_save module=persist status=ok count={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=tasks_save module=persist status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn read_records(&self) -> PersistResult<Vec<TaskRecord>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let records: Vec<TaskRecord> = serde_json::from_str(&content)?;
        for (index, record) in records.iter().enumerate() {
            Task::from_record(record)
                .map_err(|source| PersistError::InvalidData { index, source })?;
        }
        Ok(records)
    }

    fn write_records(&self, records: &[TaskRecord]) -> PersistResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut staged, records)?;
        staged.flush()?;
        staged.persist(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TaskFile;
    use crate::model::task::TaskRecord;
    use crate::persist::PersistError;

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks.json"));
        assert!(file.load().unwrap().is_empty());
        assert!(!file.path().exists());
    }

    #[test]
    fn empty_description_is_rejected_as_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(
            &path,
            r#"[{"x": 1, "y": 2, "description": "ok"}, {"x": 1, "y": 2, "description": ""}]"#,
        )
        .unwrap();

        let err = TaskFile::new(&path).load().unwrap_err();
        assert!(matches!(err, PersistError::InvalidData { index: 1, .. }));
    }

    #[test]
    fn save_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks.json"));
        file.save(&[TaskRecord::new(1.0, 2.0, "first")]).unwrap();
        file.save(&[]).unwrap();

        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "[]");
    }
}
