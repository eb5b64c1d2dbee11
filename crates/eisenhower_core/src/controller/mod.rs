//! Pointer gesture handling for the matrix board.
//!
//! # Responsibility
//! - Translate pointer, prompt and menu inputs into store mutations.
//! - Keep the rendering surface in step with every mutation.
//!
//! # Invariants
//! - Every input enters through `Board::dispatch`.
//! - While the description prompt is open, pointer input is ignored.
//! - Dragging only follows a task picked by a secondary press.

mod board;
mod menu;

pub use board::{Board, BoardEffect, BoardInput, PROMPT_MESSAGE, PROMPT_TITLE};
pub use menu::{ContextMenu, MENU_DELETE_LABEL, MENU_ITEM_HEIGHT, MENU_ITEM_WIDTH};
