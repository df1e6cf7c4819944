//! The caller-facing loop around the board engine.
//!
//! A [`Session`] owns the current board, applies commands to it, and saves
//! every new board value. Per-column pending input text lives here rather
//! than on the board, so it is never persisted.

use crate::{
    domain::{Board, BoardConfig, ColumnId, Command, NoopReason, Outcome},
    error::{KanbanError, Result},
    storage::{load_or_seed, Storage},
};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info, warn};

/// What happened to a dispatched command
#[derive(Debug)]
pub struct Dispatched {
    /// Whether the board was replaced
    pub changed: bool,
    /// Why the board was left untouched, for no-ops
    pub noop: Option<NoopReason>,
    /// Save failure; the in-memory board keeps the new value regardless
    pub save_error: Option<KanbanError>,
}

impl Dispatched {
    fn unchanged(reason: NoopReason) -> Self {
        Self {
            changed: false,
            noop: Some(reason),
            save_error: None,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.changed && self.save_error.is_none()
    }
}

pub struct Session {
    board: Board,
    config: BoardConfig,
    storage: Arc<dyn Storage>,
    pending: HashMap<ColumnId, String>,
}

impl Session {
    /// Opens a session on the persisted board, or a fresh seed
    pub async fn open(storage: Arc<dyn Storage>, config: BoardConfig) -> Self {
        let board = load_or_seed(storage.as_ref(), &config).await;
        info!(
            board = %config.name,
            columns = board.columns.len(),
            cards = board.card_count(),
            "Opened board session"
        );

        Self {
            board,
            config,
            storage,
            pending: HashMap::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Applies a command and saves the resulting board
    ///
    /// Structural errors leave the board untouched and are returned as
    /// `Err`. A failed save is reported in [`Dispatched::save_error`].
    pub async fn dispatch(&mut self, command: Command) -> Result<Dispatched> {
        let outcome = command.apply(&self.board, &self.config)?;

        let next = match outcome {
            Outcome::Applied(board) => board,
            Outcome::Unchanged(reason) => {
                debug!(command = %command, ?reason, "Command left board unchanged");
                return Ok(Dispatched::unchanged(reason));
            }
        };

        if matches!(command, Command::ResetBoard) {
            info!(board = %self.config.name, "Board reset to default seed");
        } else {
            debug!(command = %command, "Applied command");
        }

        self.board = next;
        let board = &self.board;
        self.pending
            .retain(|column_id, _| board.column_by_id(column_id).is_some());

        let save_error = match self.storage.save_board(&self.board).await {
            Ok(()) => None,
            Err(e) => {
                warn!(command = %command, error = %e, "Failed to save board");
                Some(e)
            }
        };

        Ok(Dispatched {
            changed: true,
            noop: None,
            save_error,
        })
    }

    /// Replaces the pending input text of a column
    pub fn set_pending_input(
        &mut self,
        column_index: usize,
        text: impl Into<String>,
    ) -> Result<()> {
        let column_id = self.column_id(column_index)?;
        self.pending.insert(column_id, text.into());
        Ok(())
    }

    /// Pending input text of a column; empty when nothing was typed
    pub fn pending_input(&self, column_index: usize) -> &str {
        self.board
            .column(column_index)
            .and_then(|column| self.pending.get(&column.id))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Adds a card from the column's pending input
    ///
    /// The buffer is cleared only when a card was actually added.
    pub async fn submit_pending_input(&mut self, column_index: usize) -> Result<Dispatched> {
        let column_id = self.column_id(column_index)?;
        let title = self.pending.get(&column_id).cloned().unwrap_or_default();

        let dispatched = self
            .dispatch(Command::AddCard {
                column_index,
                title,
            })
            .await?;

        if dispatched.changed {
            self.pending.remove(&column_id);
        }
        Ok(dispatched)
    }

    fn column_id(&self, column_index: usize) -> Result<ColumnId> {
        self.board
            .column(column_index)
            .map(|column| column.id)
            .ok_or(KanbanError::ColumnIndexOutOfRange {
                index: column_index,
                len: self.board.columns.len(),
            })
    }
}
