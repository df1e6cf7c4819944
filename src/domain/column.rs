use crate::domain::card::{Card, CardId};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(Uuid);

impl ColumnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ColumnId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ColumnId {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| crate::error::KanbanError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named workflow stage holding cards top to bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(name: String) -> Self {
        Self {
            id: ColumnId::new(),
            name,
            cards: Vec::new(),
        }
    }

    /// Position of a card within this column
    pub fn position_of(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == card_id)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_column_is_empty() {
        let column = Column::new("Todo".to_string());
        assert_eq!(column.name, "Todo");
        assert!(column.is_empty());
    }

    #[test]
    fn test_position_of() {
        let mut column = Column::new("Todo".to_string());
        let first = Card::new("First".to_string());
        let second = Card::new("Second".to_string());
        let (first_id, second_id) = (first.id, second.id);
        column.cards.push(first);
        column.cards.push(second);

        assert_eq!(column.position_of(&first_id), Some(0));
        assert_eq!(column.position_of(&second_id), Some(1));
        assert_eq!(column.position_of(&CardId::new()), None);
    }

    #[test]
    fn test_pending_input_field_is_ignored_on_load() {
        let json = r#"{
            "id": "0b8f5a52-3c1e-4f57-9d0a-7c0e2f1b6a11",
            "name": "Doing",
            "cards": [],
            "newTask": "half typed"
        }"#;

        let column: Column = serde_json::from_str(json).unwrap();
        assert_eq!(column.name, "Doing");
        assert!(column.is_empty());

        let reserialized = serde_json::to_string(&column).unwrap();
        assert!(!reserialized.contains("newTask"));
    }
}
