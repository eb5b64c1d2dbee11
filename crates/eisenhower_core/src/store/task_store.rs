//! Task store keyed by session handles.
//!
//! # Responsibility
//! - Provide create/move/remove/list over task records.
//! - Answer nearest-task and delete-button hit tests against stored geometry.
//!
//! # Invariants
//! - `create` silently rejects empty descriptions.
//! - Addressing an unknown handle is a caller bug and returns `NotFound`.

use crate::model::geometry::Point;
use crate::model::task::{Task, TaskHandle, TaskRecord};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(TaskHandle),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(handle) => write!(f, "task not found: {handle}"),
        }
    }
}

impl Error for StoreError {}

/// Arena of live tasks.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: BTreeMap<TaskHandle, Task>,
    next_handle: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task at `position`.
    ///
    /// Returns `None` without mutating when `description` is empty or the
    /// position is not finite.
    pub fn create(
        &mut self,
        position: Point,
        description: impl Into<String>,
    ) -> Option<TaskHandle> {
        let task = Task::new(position, description).ok()?;
        Some(self.insert(task))
    }

    /// Inserts an already validated task and returns its fresh handle.
    pub fn insert(&mut self, task: Task) -> TaskHandle {
        let handle = TaskHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        self.tasks.insert(handle, task);
        handle
    }

    /// Moves a task's centre; width and description are untouched.
    pub fn set_position(&mut self, handle: TaskHandle, position: Point) -> StoreResult<()> {
        let task = self
            .tasks
            .get_mut(&handle)
            .ok_or(StoreError::NotFound(handle))?;
        task.set_position(position);
        Ok(())
    }

    /// Removes a task and returns its final record.
    pub fn remove(&mut self, handle: TaskHandle) -> StoreResult<Task> {
        self.tasks
            .remove(&handle)
            .ok_or(StoreError::NotFound(handle))
    }

    pub fn get(&self, handle: TaskHandle) -> Option<&Task> {
        self.tasks.get(&handle)
    }

    pub fn contains(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Live tasks in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskHandle, &Task)> + '_ {
        self.tasks.iter().map(|(handle, task)| (*handle, task))
    }

    pub fn handles(&self) -> Vec<TaskHandle> {
        self.tasks.keys().copied().collect()
    }

    /// Persistable snapshot of every live task, in creation order.
    pub fn all(&self) -> Vec<TaskRecord> {
        self.tasks.values().map(Task::to_record).collect()
    }

    /// Returns the task whose box is nearest to `point`.
    ///
    /// A point inside a box has distance zero. Ties go to the most recently
    /// created task, which is the one drawn on top. Any task at all is a
    /// candidate, however far away.
    pub fn nearest(&self, point: Point) -> Option<TaskHandle> {
        let mut best: Option<(TaskHandle, f64)> = None;
        for (handle, task) in &self.tasks {
            let distance = task.bounds().distance_to(point);
            match best {
                Some((_, best_distance)) if distance > best_distance => {}
                _ => best = Some((*handle, distance)),
            }
        }
        best.map(|(handle, _)| handle)
    }

    /// Returns the task whose delete button contains `point`, topmost first.
    pub fn delete_button_at(&self, point: Point) -> Option<TaskHandle> {
        self.tasks
            .iter()
            .rev()
            .find(|(_, task)| task.delete_button_bounds().contains(point))
            .map(|(handle, _)| *handle)
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreError, TaskStore};
    use crate::model::geometry::Point;

    #[test]
    fn create_with_empty_description_is_a_no_op() {
        let mut store = TaskStore::new();
        assert!(store.create(Point::new(1.0, 1.0), "").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn handles_are_not_reused_after_remove() {
        let mut store = TaskStore::new();
        let first = store.create(Point::new(0.0, 0.0), "a").unwrap();
        store.remove(first).unwrap();
        let second = store.create(Point::new(0.0, 0.0), "b").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn nearest_prefers_later_task_on_tie() {
        let mut store = TaskStore::new();
        let _below = store.create(Point::new(100.0, 100.0), "below").unwrap();
        let above = store.create(Point::new(100.0, 100.0), "above").unwrap();
        assert_eq!(store.nearest(Point::new(100.0, 100.0)), Some(above));
    }

    #[test]
    fn unknown_handle_reports_not_found() {
        let mut store = TaskStore::new();
        let handle = store.create(Point::new(0.0, 0.0), "gone").unwrap();
        store.remove(handle).unwrap();
        assert_eq!(
            store.set_position(handle, Point::new(1.0, 1.0)),
            Err(StoreError::NotFound(handle))
        );
    }
}
