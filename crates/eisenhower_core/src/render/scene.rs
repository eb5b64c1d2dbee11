//! Retained display list.
//!
//! `Scene` records what has been drawn so a GUI frontend can paint it each
//! frame and tests can inspect it. Items paint in ascending `VisualId`
//! order, so later items sit on top.

use super::grid::{GridLayout, LabelOrientation};
use super::{Surface, TaskVisual, VisualId};
use crate::model::geometry::{Point, Rect};
use crate::model::task::Task;
use std::collections::BTreeMap;

pub const TASK_LABEL_SIZE: f64 = 10.0;
pub const DELETE_BUTTON_CAPTION: &str = "Delete";

/// One drawn item.
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    Line {
        from: Point,
        to: Point,
        width: f64,
    },
    Text {
        at: Point,
        content: String,
        size: f64,
        orientation: LabelOrientation,
    },
    /// Filled task box with outline.
    TaskBox { bounds: Rect },
    Button { bounds: Rect, caption: String },
}

#[derive(Debug, Default)]
pub struct Scene {
    items: BTreeMap<VisualId, Visual>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in paint order.
    pub fn items(&self) -> impl Iterator<Item = (VisualId, &Visual)> + '_ {
        self.items.iter().map(|(id, visual)| (*id, visual))
    }

    pub fn get(&self, id: VisualId) -> Option<&Visual> {
        self.items.get(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, visual: Visual) -> VisualId {
        let id = VisualId::from_raw(self.next_id);
        self.next_id += 1;
        self.items.insert(id, visual);
        id
    }

    fn replace(&mut self, id: VisualId, visual: Visual) {
        let previous = self.items.insert(id, visual);
        debug_assert!(previous.is_some(), "moved unknown visual {id:?}");
    }

    fn erase(&mut self, id: VisualId) {
        let previous = self.items.remove(&id);
        debug_assert!(previous.is_some(), "erased unknown visual {id:?}");
    }
}

fn task_box(task: &Task) -> Visual {
    Visual::TaskBox {
        bounds: task.bounds(),
    }
}

fn task_label(task: &Task) -> Visual {
    Visual::Text {
        at: task.position(),
        content: task.description().to_string(),
        size: TASK_LABEL_SIZE,
        orientation: LabelOrientation::Horizontal,
    }
}

fn delete_button(task: &Task) -> Visual {
    Visual::Button {
        bounds: task.delete_button_bounds(),
        caption: DELETE_BUTTON_CAPTION.to_string(),
    }
}

impl Surface for Scene {
    fn draw_grid(&mut self, layout: &GridLayout) {
        for line in &layout.lines {
            self.push(Visual::Line {
                from: line.from,
                to: line.to,
                width: line.width,
            });
        }
        for label in &layout.labels {
            self.push(Visual::Text {
                at: label.at,
                content: label.text.to_string(),
                size: label.size,
                orientation: label.orientation,
            });
        }
    }

    fn draw_task(&mut self, task: &Task) -> TaskVisual {
        let shape = self.push(task_box(task));
        let label = self.push(task_label(task));
        let button = self.push(delete_button(task));
        TaskVisual::new(shape, label, button)
    }

    fn move_task(&mut self, visual: &TaskVisual, task: &Task) {
        self.replace(visual.shape(), task_box(task));
        self.replace(visual.label(), task_label(task));
        self.replace(visual.delete_button(), delete_button(task));
    }

    fn remove_task(&mut self, visual: TaskVisual) {
        self.erase(visual.shape());
        self.erase(visual.label());
        self.erase(visual.delete_button());
    }
}
