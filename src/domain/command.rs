use crate::domain::{
    board::{Board, BoardConfig, Outcome},
    card::CardId,
};
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step left/up (`-1`) or right/down (`+1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn offset(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }

    /// Index one step away from `index`, if it stays below `len`
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Self::Backward => index.checked_sub(1),
            Self::Forward => index.checked_add(1).filter(|next| *next < len),
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = KanbanError;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Backward),
            1 => Ok(Self::Forward),
            other => Err(KanbanError::InvalidDirection(other)),
        }
    }
}

impl From<Direction> for i64 {
    fn from(direction: Direction) -> Self {
        direction.offset()
    }
}

/// A user-issued board command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddCard {
        column_index: usize,
        title: String,
    },
    DeleteCard {
        column_index: usize,
        card_id: CardId,
    },
    EditCard {
        column_index: usize,
        card_id: CardId,
        #[serde(default)]
        new_title: Option<String>,
    },
    MoveCardLeft {
        column_index: usize,
        card_id: CardId,
    },
    MoveCardRight {
        column_index: usize,
        card_id: CardId,
    },
    MoveCardUp {
        column_index: usize,
        card_id: CardId,
    },
    MoveCardDown {
        column_index: usize,
        card_id: CardId,
    },
    AddColumn {
        name: String,
    },
    ResetBoard,
}

impl Command {
    /// Applies this command to `board`
    ///
    /// `config` supplies the seed columns for a reset.
    pub fn apply(&self, board: &Board, config: &BoardConfig) -> Result<Outcome> {
        match self {
            Self::AddCard {
                column_index,
                title,
            } => board.add_card(*column_index, title),
            Self::DeleteCard {
                column_index,
                card_id,
            } => board.delete_card(*column_index, card_id),
            Self::EditCard {
                column_index,
                card_id,
                new_title,
            } => board.edit_card(*column_index, card_id, new_title.as_deref()),
            Self::MoveCardLeft {
                column_index,
                card_id,
            } => board.move_card_horizontal(*column_index, card_id, Direction::Backward),
            Self::MoveCardRight {
                column_index,
                card_id,
            } => board.move_card_horizontal(*column_index, card_id, Direction::Forward),
            Self::MoveCardUp {
                column_index,
                card_id,
            } => board.move_card_vertical(*column_index, card_id, Direction::Backward),
            Self::MoveCardDown {
                column_index,
                card_id,
            } => board.move_card_vertical(*column_index, card_id, Direction::Forward),
            Self::AddColumn { name } => board.add_column(name),
            Self::ResetBoard => Ok(board.reset_board(config)),
        }
    }

    /// Short verb phrase for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddCard { .. } => "add card",
            Self::DeleteCard { .. } => "delete card",
            Self::EditCard { .. } => "edit card",
            Self::MoveCardLeft { .. } => "move card left",
            Self::MoveCardRight { .. } => "move card right",
            Self::MoveCardUp { .. } => "move card up",
            Self::MoveCardDown { .. } => "move card down",
            Self::AddColumn { .. } => "add column",
            Self::ResetBoard => "reset board",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::NoopReason;

    #[test]
    fn test_direction_from_offset() {
        assert_eq!(Direction::try_from(-1).unwrap(), Direction::Backward);
        assert_eq!(Direction::try_from(1).unwrap(), Direction::Forward);
        assert!(matches!(
            Direction::try_from(2),
            Err(KanbanError::InvalidDirection(2))
        ));
        assert!(Direction::try_from(0).is_err());
    }

    #[test]
    fn test_direction_step_bounds() {
        assert_eq!(Direction::Backward.step(0, 3), None);
        assert_eq!(Direction::Backward.step(2, 3), Some(1));
        assert_eq!(Direction::Forward.step(1, 3), Some(2));
        assert_eq!(Direction::Forward.step(2, 3), None);
        assert_eq!(Direction::Forward.step(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_direction_serializes_as_offset() {
        assert_eq!(serde_json::to_string(&Direction::Backward).unwrap(), "-1");
        let parsed: Direction = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Direction::Forward);
        assert!(serde_json::from_str::<Direction>("5").is_err());
    }

    #[test]
    fn test_apply_dispatches_to_board() {
        let config = BoardConfig::default();
        let board = Board::default();

        let added = Command::AddCard {
            column_index: 0,
            title: "Write spec".to_string(),
        }
        .apply(&board, &config)
        .unwrap()
        .into_board(&board);
        let card_id = added.columns[0].cards[0].id;

        let moved = Command::MoveCardRight {
            column_index: 0,
            card_id,
        }
        .apply(&added, &config)
        .unwrap()
        .into_board(&added);
        assert_eq!(moved.find_card(&card_id), Some((1, 0)));

        let outcome = Command::MoveCardUp {
            column_index: 1,
            card_id,
        }
        .apply(&moved, &config)
        .unwrap();
        assert_eq!(
            outcome,
            Outcome::Unchanged(NoopReason::DestinationOutOfRange)
        );
    }

    #[test]
    fn test_reset_uses_configured_seed() {
        let config = BoardConfig {
            name: "Ops".to_string(),
            columns: vec!["Inbox".to_string()],
        };
        let board = Board::default();

        let outcome = Command::ResetBoard.apply(&board, &config).unwrap();
        let reset = outcome.into_board(&board);
        assert_eq!(reset.columns.len(), 1);
        assert_eq!(reset.columns[0].name, "Inbox");
    }

    #[test]
    fn test_command_json_shape() {
        let card_id = CardId::new();
        let json = format!(
            r#"{{"type": "edit_card", "column_index": 2, "card_id": "{}"}}"#,
            card_id
        );

        let command: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(
            command,
            Command::EditCard {
                column_index: 2,
                card_id,
                new_title: None,
            }
        );
        assert_eq!(command.to_string(), "edit card");

        let reset: Command = serde_json::from_str(r#"{"type": "reset_board"}"#).unwrap();
        assert_eq!(reset, Command::ResetBoard);
    }
}
