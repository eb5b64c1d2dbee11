//! Task domain model.
//!
//! # Responsibility
//! - Define the in-session task record and its persisted projection.
//! - Derive box geometry (width, bounds, delete-affordance anchor).
//!
//! # Invariants
//! - `description` is never empty for a constructed `Task`.
//! - `width >= MIN_TASK_WIDTH` always.
//! - Width is fixed at construction; moving a task only changes `position`.

use super::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lower bound for a task box width.
pub const MIN_TASK_WIDTH: f64 = 100.0;
/// Horizontal padding added around the estimated text width.
pub const TASK_TEXT_PADDING: f64 = 20.0;
/// Approximate rendered width of one description character.
pub const TASK_CHAR_WIDTH: f64 = 7.0;
/// Fixed task box height (the box spans `y - 20 ..= y + 20`).
pub const TASK_HEIGHT: f64 = 40.0;
/// Horizontal gap between the box's right edge and the delete anchor.
pub const DELETE_ANCHOR_GAP: f64 = 40.0;
/// Size of the per-task "Delete" button.
pub const DELETE_BUTTON_WIDTH: f64 = 60.0;
pub const DELETE_BUTTON_HEIGHT: f64 = 26.0;

/// Session-scoped opaque task identity.
///
/// Handles are allocated monotonically by the store and are never persisted;
/// reloading a file assigns fresh handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value, for diagnostics only.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Display for TaskHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// Validation failures for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyDescription,
    NonFinitePosition,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description must not be empty"),
            Self::NonFinitePosition => write!(f, "task position must be finite"),
        }
    }
}

impl Error for TaskValidationError {}

/// Computes the box width for a description: `max(100, 20 + 7 * chars)`.
pub fn task_width(description: &str) -> f64 {
    let chars = description.chars().count() as f64;
    MIN_TASK_WIDTH.max(TASK_TEXT_PADDING + TASK_CHAR_WIDTH * chars)
}

/// A positioned note on the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    position: Point,
    description: String,
    width: f64,
}

impl Task {
    /// Creates a task centred on `position`.
    ///
    /// # Errors
    /// - `EmptyDescription` when `description` is the empty string.
    /// - `NonFinitePosition` when either coordinate is NaN or infinite.
    pub fn new(
        position: Point,
        description: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let description = description.into();
        if description.is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(TaskValidationError::NonFinitePosition);
        }
        let width = task_width(&description);
        Ok(Self {
            position,
            description,
            width,
        })
    }

    /// Rebuilds a task from its persisted record, re-deriving the width.
    pub fn from_record(record: &TaskRecord) -> Result<Self, TaskValidationError> {
        Self::new(Point::new(record.x, record.y), record.description.clone())
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Box bounds used for drawing and nearest-shape hit-testing.
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position, self.width, TASK_HEIGHT)
    }

    /// Centre of the delete affordance: `(width/2 + 40, -20)` from the task centre.
    pub fn delete_anchor(&self) -> Point {
        self.position
            .offset(self.width / 2.0 + DELETE_ANCHOR_GAP, -TASK_HEIGHT / 2.0)
    }

    /// Clickable area of the delete button.
    pub fn delete_button_bounds(&self) -> Rect {
        Rect::centered(
            self.delete_anchor(),
            DELETE_BUTTON_WIDTH,
            DELETE_BUTTON_HEIGHT,
        )
    }

    /// Projects this task into the persisted record shape.
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            x: self.position.x,
            y: self.position.y,
            description: self.description.clone(),
        }
    }
}

/// Persisted task shape: exactly `x`, `y` and `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub x: f64,
    pub y: f64,
    pub description: String,
}

impl TaskRecord {
    pub fn new(x: f64, y: f64, description: impl Into<String>) -> Self {
        Self {
            x,
            y,
            description: description.into(),
        }
    }
}
