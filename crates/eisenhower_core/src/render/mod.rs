//! Rendering surface contract and the retained scene implementation.
//!
//! # Responsibility
//! - Define the drawing operations the controller drives.
//! - Keep each task's shape, label and delete button as one unit.
//!
//! # Invariants
//! - A `TaskVisual` is produced only by `draw_task` and consumed only by
//!   `remove_task`; its three parts live and die together.
//! - The surface holds no task state of its own beyond what it was told
//!   to draw.

use crate::model::task::Task;

pub mod grid;
pub mod scene;

pub use grid::{GridLabel, GridLayout, GridLine, LabelOrientation};
pub use scene::{Scene, Visual};

/// Identifier of a single drawn item on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualId(u64);

impl VisualId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The three visual parts of one task.
///
/// Deliberately not `Clone`: ownership of the triple is ownership of the
/// task's on-screen presence.
#[derive(Debug, PartialEq, Eq)]
pub struct TaskVisual {
    shape: VisualId,
    label: VisualId,
    delete_button: VisualId,
}

impl TaskVisual {
    pub fn new(shape: VisualId, label: VisualId, delete_button: VisualId) -> Self {
        Self {
            shape,
            label,
            delete_button,
        }
    }

    pub fn shape(&self) -> VisualId {
        self.shape
    }

    pub fn label(&self) -> VisualId {
        self.label
    }

    pub fn delete_button(&self) -> VisualId {
        self.delete_button
    }
}

/// Drawing backend driven by the interaction controller.
pub trait Surface {
    /// Draws the static centrelines and axis labels. Called once.
    fn draw_grid(&mut self, layout: &GridLayout);
    /// Draws a task's box, label and delete button.
    fn draw_task(&mut self, task: &Task) -> TaskVisual;
    /// Repositions all three parts to the task's current position.
    fn move_task(&mut self, visual: &TaskVisual, task: &Task);
    /// Erases all three parts.
    fn remove_task(&mut self, visual: TaskVisual);
}
