//! In-memory task storage.
//!
//! # Responsibility
//! - Own every live task record for the current session.
//! - Resolve pointer positions to tasks via the nearest-shape rule.
//!
//! # Invariants
//! - Handles are never reused within a session.
//! - Iteration order is creation order.

pub mod task_store;
