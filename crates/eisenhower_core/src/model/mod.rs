//! Domain model for matrix tasks and canvas geometry.
//!
//! # Responsibility
//! - Define the task record and the derived box geometry used for drawing
//!   and hit-testing.
//! - Keep geometry in backend-neutral canvas units.
//!
//! # Invariants
//! - Task width is derived once from the description and never recomputed.
//! - Quadrant membership is never part of the model.

pub mod geometry;
pub mod task;
