use crate::domain::{
    card::{Card, CardId},
    column::{Column, ColumnId},
    command::Direction,
};
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    /// Column names of a freshly seeded board, left to right
    pub columns: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Kanban Board".to_string(),
            columns: vec!["Todo".to_string(), "Doing".to_string(), "Done".to_string()],
        }
    }
}

/// Why a command left the board untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoopReason {
    BlankTitle,
    BlankColumnName,
    MissingTitle,
    CardNotFound,
    DestinationOutOfRange,
}

/// Result of applying a command to a board
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The command produced a new board value
    Applied(Board),
    /// A precondition failed; the input board stands as-is
    Unchanged(NoopReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Returns the new board, or a copy of `current` for a no-op
    pub fn into_board(self, current: &Board) -> Board {
        match self {
            Self::Applied(board) => board,
            Self::Unchanged(_) => current.clone(),
        }
    }

    pub fn noop_reason(&self) -> Option<NoopReason> {
        match self {
            Self::Applied(_) => None,
            Self::Unchanged(reason) => Some(*reason),
        }
    }
}

/// Kanban board state: columns left to right
///
/// Every command borrows the current board and returns a new value, so a
/// reader holding the previous board never sees a half-applied change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Builds a fresh board from the configured seed columns
    ///
    /// Seed names are trimmed and blank ones skipped, matching `add_column`.
    pub fn seeded(config: &BoardConfig) -> Self {
        Self {
            columns: config
                .columns
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(|name| Column::new(name.to_string()))
                .collect(),
        }
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn column_by_id(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    /// Locates a card anywhere on the board as (column index, position)
    pub fn find_card(&self, card_id: &CardId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(col_idx, col)| col.position_of(card_id).map(|pos| (col_idx, pos)))
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|col| col.cards.len()).sum()
    }

    /// Checks identifier uniqueness for columns and cards
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for column in &self.columns {
            if !column_ids.insert(column.id) {
                return Err(KanbanError::InvariantViolation(format!(
                    "duplicate column id {}",
                    column.id
                )));
            }
            for card in &column.cards {
                if !card_ids.insert(card.id) {
                    return Err(KanbanError::InvariantViolation(format!(
                        "duplicate card id {}",
                        card.id
                    )));
                }
            }
        }

        Ok(())
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index < self.columns.len() {
            Ok(())
        } else {
            Err(KanbanError::ColumnIndexOutOfRange {
                index,
                len: self.columns.len(),
            })
        }
    }

    /// Appends a card with the trimmed title to the end of a column
    pub fn add_card(&self, column_index: usize, title: &str) -> Result<Outcome> {
        self.check_column(column_index)?;

        let title = title.trim();
        if title.is_empty() {
            return Ok(Outcome::Unchanged(NoopReason::BlankTitle));
        }

        let mut next = self.clone();
        next.columns[column_index]
            .cards
            .push(Card::new(title.to_string()));
        Ok(Outcome::Applied(next))
    }

    /// Removes a card from a column, keeping the others in order
    pub fn delete_card(&self, column_index: usize, card_id: &CardId) -> Result<Outcome> {
        self.check_column(column_index)?;

        let Some(position) = self.columns[column_index].position_of(card_id) else {
            return Ok(Outcome::Unchanged(NoopReason::CardNotFound));
        };

        let mut next = self.clone();
        next.columns[column_index].cards.remove(position);
        Ok(Outcome::Applied(next))
    }

    /// Replaces a card's title in place
    ///
    /// `None` models a cancelled prompt.
    pub fn edit_card(
        &self,
        column_index: usize,
        card_id: &CardId,
        new_title: Option<&str>,
    ) -> Result<Outcome> {
        self.check_column(column_index)?;

        let Some(new_title) = new_title else {
            return Ok(Outcome::Unchanged(NoopReason::MissingTitle));
        };
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Ok(Outcome::Unchanged(NoopReason::BlankTitle));
        }
        let Some(position) = self.columns[column_index].position_of(card_id) else {
            return Ok(Outcome::Unchanged(NoopReason::CardNotFound));
        };

        let mut next = self.clone();
        next.columns[column_index].cards[position].set_title(new_title.to_string());
        Ok(Outcome::Applied(next))
    }

    /// Moves a card to the end of the neighbouring column
    ///
    /// The destination is resolved before anything is removed, so a move
    /// off either edge of the board leaves the source column intact.
    pub fn move_card_horizontal(
        &self,
        column_index: usize,
        card_id: &CardId,
        direction: Direction,
    ) -> Result<Outcome> {
        self.check_column(column_index)?;

        let Some(destination) = direction.step(column_index, self.columns.len()) else {
            return Ok(Outcome::Unchanged(NoopReason::DestinationOutOfRange));
        };
        let Some(position) = self.columns[column_index].position_of(card_id) else {
            return Ok(Outcome::Unchanged(NoopReason::CardNotFound));
        };

        let mut next = self.clone();
        let card = next.columns[column_index].cards.remove(position);
        next.columns[destination].cards.push(card);
        Ok(Outcome::Applied(next))
    }

    /// Swaps a card with its neighbour above or below
    pub fn move_card_vertical(
        &self,
        column_index: usize,
        card_id: &CardId,
        direction: Direction,
    ) -> Result<Outcome> {
        self.check_column(column_index)?;

        let column = &self.columns[column_index];
        let Some(position) = column.position_of(card_id) else {
            return Ok(Outcome::Unchanged(NoopReason::CardNotFound));
        };
        let Some(neighbour) = direction.step(position, column.cards.len()) else {
            return Ok(Outcome::Unchanged(NoopReason::DestinationOutOfRange));
        };

        let mut next = self.clone();
        next.columns[column_index].cards.swap(position, neighbour);
        Ok(Outcome::Applied(next))
    }

    /// Appends an empty column with the trimmed name
    pub fn add_column(&self, name: &str) -> Result<Outcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Outcome::Unchanged(NoopReason::BlankColumnName));
        }

        let mut next = self.clone();
        next.columns.push(Column::new(name.to_string()));
        Ok(Outcome::Applied(next))
    }

    /// Discards every card and column in favour of the configured seed
    pub fn reset_board(&self, config: &BoardConfig) -> Outcome {
        Outcome::Applied(Self::seeded(config))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::seeded(&BoardConfig::default())
    }
}
