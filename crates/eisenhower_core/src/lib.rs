//! Core logic for the Eisenhower matrix board.
//! This crate owns the task model, storage, persistence and gesture handling;
//! frontends only translate input and paint the scene.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod persist;
pub mod render;
pub mod store;

pub use config::AppConfig;
pub use controller::{Board, BoardEffect, BoardInput, ContextMenu};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::geometry::{Point, Rect};
pub use model::task::{task_width, Task, TaskHandle, TaskRecord, TaskValidationError};
pub use persist::{PersistError, PersistResult, TaskFile};
pub use render::{GridLayout, Scene, Surface, TaskVisual, Visual, VisualId};
pub use store::task_store::{StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
