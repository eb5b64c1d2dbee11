//! Interaction controller.
//!
//! # Responsibility
//! - Run the gesture state machine: prompt-to-create, drag, delete.
//! - Own the task store and the drawing surface, and the per-task visual
//!   triples that tie them together.
//!
//! # Invariants
//! - A handle is in the store iff it has exactly one `TaskVisual`.
//! - `active` and the menu target never outlive the task they name.
//! - A primary press never selects a task for dragging by itself. Unless it
//!   closes the context menu, it also clears any earlier selection.

use super::menu::ContextMenu;
use crate::model::geometry::Point;
use crate::model::task::{Task, TaskHandle, TaskRecord, TaskValidationError};
use crate::render::{GridLayout, Surface, TaskVisual};
use crate::store::task_store::{StoreError, StoreResult, TaskStore};
use log::{debug, info, trace};
use std::collections::HashMap;

pub const PROMPT_TITLE: &str = "New Task";
pub const PROMPT_MESSAGE: &str = "Enter task description:";

/// Inputs accepted by the board, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardInput {
    PrimaryPress(Point),
    /// Pointer motion with the primary button held.
    PrimaryMove(Point),
    PrimaryRelease,
    SecondaryPress(Point),
    PromptSubmitted(String),
    PromptCancelled,
    /// "Delete Task" chosen from the context menu.
    MenuDelete,
    MenuDismissed,
    /// A task's own delete button was activated.
    DeleteAffordance(TaskHandle),
}

/// What a dispatched input changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardEffect {
    Ignored,
    PromptOpened { at: Point },
    PromptClosed,
    TaskCreated(TaskHandle),
    TaskMoved(TaskHandle),
    TaskDeleted(TaskHandle),
    MenuOpened(TaskHandle),
    MenuClosed,
    DragEnded,
}

/// The matrix board: task store, surface and gesture state.
pub struct Board<S: Surface> {
    store: TaskStore,
    surface: S,
    visuals: HashMap<TaskHandle, TaskVisual>,
    prompt_at: Option<Point>,
    active: Option<TaskHandle>,
    menu: Option<ContextMenu>,
}

impl<S: Surface> Board<S> {
    /// Creates an empty board and draws the grid on `surface`.
    pub fn new(mut surface: S, layout: &GridLayout) -> Self {
        surface.draw_grid(layout);
        Self {
            store: TaskStore::new(),
            surface,
            visuals: HashMap::new(),
            prompt_at: None,
            active: None,
            menu: None,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn visual(&self, handle: TaskHandle) -> Option<&TaskVisual> {
        self.visuals.get(&handle)
    }

    /// Task currently following primary-button motion, if any.
    pub fn active(&self) -> Option<TaskHandle> {
        self.active
    }

    pub fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    /// Where the pending task will be created once the prompt is answered.
    pub fn prompt_anchor(&self) -> Option<Point> {
        self.prompt_at
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt_at.is_some()
    }

    /// Replaces every task with `records`, assigning fresh handles.
    ///
    /// Records are validated up front; on error the board is left untouched.
    pub fn load(&mut self, records: &[TaskRecord]) -> Result<(), TaskValidationError> {
        let tasks = records
            .iter()
            .map(Task::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        for handle in self.store.handles() {
            if let Some(visual) = self.visuals.remove(&handle) {
                self.surface.remove_task(visual);
            }
        }
        self.store = TaskStore::new();
        self.prompt_at = None;
        self.active = None;
        self.menu = None;

        for task in tasks {
            self.spawn(task);
        }
        info!(
            "event=board_load module=controller status=ok count={}",
            self.store.len()
        );
        Ok(())
    }

    /// Persistable snapshot of the current tasks.
    pub fn snapshot(&self) -> Vec<TaskRecord> {
        self.store.all()
    }

    /// Applies one input.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when an input names a task that no longer
    ///   exists. This only happens through a frontend bug.
    pub fn dispatch(&mut self, input: BoardInput) -> StoreResult<BoardEffect> {
        if self.prompt_at.is_some() {
            return Ok(match input {
                BoardInput::PromptSubmitted(text) => self.submit_prompt(text),
                BoardInput::PromptCancelled => {
                    self.prompt_at = None;
                    debug!("event=prompt_cancel module=controller status=ok");
                    BoardEffect::PromptClosed
                }
                _ => BoardEffect::Ignored,
            });
        }

        match input {
            BoardInput::PrimaryPress(point) => self.primary_press(point),
            BoardInput::PrimaryMove(point) => self.drag_to(point),
            BoardInput::PrimaryRelease => {
                if self.menu.is_some() {
                    return Ok(BoardEffect::Ignored);
                }
                Ok(match self.active.take() {
                    Some(_) => BoardEffect::DragEnded,
                    None => BoardEffect::Ignored,
                })
            }
            BoardInput::SecondaryPress(point) => Ok(self.open_menu(point)),
            BoardInput::MenuDelete => match self.menu.take() {
                Some(menu) => self.delete(menu.target()),
                None => Ok(BoardEffect::Ignored),
            },
            BoardInput::MenuDismissed => Ok(match self.menu.take() {
                Some(_) => BoardEffect::MenuClosed,
                None => BoardEffect::Ignored,
            }),
            BoardInput::DeleteAffordance(handle) => self.delete(handle),
            BoardInput::PromptSubmitted(_) | BoardInput::PromptCancelled => {
                Ok(BoardEffect::Ignored)
            }
        }
    }

    fn primary_press(&mut self, point: Point) -> StoreResult<BoardEffect> {
        if let Some(menu) = self.menu {
            if menu.hits_delete_item(point) {
                self.menu = None;
                return self.delete(menu.target());
            }
            // Dismissing press is consumed; the selected task stays active
            // so motion with the button held drags it.
            self.menu = None;
            return Ok(BoardEffect::MenuClosed);
        }

        // Any other press ends an earlier selection.
        self.active = None;
        if let Some(handle) = self.store.delete_button_at(point) {
            return self.delete(handle);
        }

        self.prompt_at = Some(point);
        Ok(BoardEffect::PromptOpened { at: point })
    }

    fn submit_prompt(&mut self, text: String) -> BoardEffect {
        let Some(at) = self.prompt_at.take() else {
            return BoardEffect::Ignored;
        };
        match Task::new(at, text) {
            Ok(task) => {
                let handle = self.spawn(task);
                info!(
                    "event=task_create module=controller status=ok handle={} x={} y={}",
                    handle, at.x, at.y
                );
                BoardEffect::TaskCreated(handle)
            }
            Err(err) => {
                debug!("event=task_create module=controller status=skipped reason={err}");
                BoardEffect::PromptClosed
            }
        }
    }

    fn drag_to(&mut self, point: Point) -> StoreResult<BoardEffect> {
        let Some(handle) = self.active else {
            return Ok(BoardEffect::Ignored);
        };
        if self.menu.is_some() {
            return Ok(BoardEffect::Ignored);
        }

        self.store.set_position(handle, point)?;
        let task = self.store.get(handle).ok_or(StoreError::NotFound(handle))?;
        let visual = self
            .visuals
            .get(&handle)
            .ok_or(StoreError::NotFound(handle))?;
        self.surface.move_task(visual, task);
        trace!(
            "event=task_move module=controller status=ok handle={} x={} y={}",
            handle,
            point.x,
            point.y
        );
        Ok(BoardEffect::TaskMoved(handle))
    }

    fn open_menu(&mut self, point: Point) -> BoardEffect {
        match self.store.nearest(point) {
            Some(handle) => {
                self.active = Some(handle);
                self.menu = Some(ContextMenu::new(handle, point));
                debug!(
                    "event=menu_open module=controller status=ok handle={}",
                    handle
                );
                BoardEffect::MenuOpened(handle)
            }
            None => BoardEffect::Ignored,
        }
    }

    fn delete(&mut self, handle: TaskHandle) -> StoreResult<BoardEffect> {
        self.despawn(handle)?;
        info!(
            "event=task_delete module=controller status=ok handle={}",
            handle
        );
        Ok(BoardEffect::TaskDeleted(handle))
    }

    fn spawn(&mut self, task: Task) -> TaskHandle {
        let visual = self.surface.draw_task(&task);
        let handle = self.store.insert(task);
        self.visuals.insert(handle, visual);
        handle
    }

    fn despawn(&mut self, handle: TaskHandle) -> StoreResult<Task> {
        let task = self.store.remove(handle)?;
        if let Some(visual) = self.visuals.remove(&handle) {
            self.surface.remove_task(visual);
        }
        if self.active == Some(handle) {
            self.active = None;
        }
        if self.menu.is_some_and(|menu| menu.target() == handle) {
            self.menu = None;
        }
        Ok(task)
    }
}
