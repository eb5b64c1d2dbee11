use crate::model::geometry::{Point, Rect};
use crate::model::task::TaskHandle;

pub const MENU_DELETE_LABEL: &str = "Delete Task";
pub const MENU_ITEM_WIDTH: f64 = 120.0;
pub const MENU_ITEM_HEIGHT: f64 = 26.0;

/// Single-action context menu posted at the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenu {
    target: TaskHandle,
    anchor: Point,
}

impl ContextMenu {
    pub fn new(target: TaskHandle, anchor: Point) -> Self {
        Self { target, anchor }
    }

    /// Task the "Delete Task" action applies to.
    pub fn target(&self) -> TaskHandle {
        self.target
    }

    /// Top-left corner, at the pointer position that opened the menu.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn delete_item_bounds(&self) -> Rect {
        Rect::from_origin(self.anchor, MENU_ITEM_WIDTH, MENU_ITEM_HEIGHT)
    }

    pub fn hits_delete_item(&self, point: Point) -> bool {
        self.delete_item_bounds().contains(point)
    }
}
