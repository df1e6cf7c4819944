//! # Kanban Core
//!
//! Board engine and persistence for a single-user kanban board.
//!
//! The board is a plain value: every command borrows the current [`Board`]
//! and returns an [`Outcome`] holding either a new board or the reason it
//! was left unchanged. [`Session`] wires the engine to a [`Storage`]
//! backend, saving after every applied command.

pub mod domain;
pub mod error;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, NoopReason, Outcome},
    card::{Card, CardId},
    column::{Column, ColumnId},
    command::{Command, Direction},
};
pub use error::{KanbanError, Result};
pub use session::{Dispatched, Session};
pub use storage::Storage;
