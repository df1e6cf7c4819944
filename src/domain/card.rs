use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a card, stable for the card's whole life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    /// Generates a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CardId {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| crate::error::KanbanError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A titled unit of work living in exactly one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Creates a card with a fresh identifier
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: CardId::new(),
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ids_are_unique() {
        let a = CardId::new();
        let b = CardId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_card_id_parsing() {
        let id = CardId::new();
        let parsed = CardId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(CardId::from_str("not-a-uuid").is_err());
        assert!(CardId::from_str("").is_err());
    }

    #[test]
    fn test_set_title_updates_timestamp() {
        let mut card = Card::new("Draft".to_string());
        let created = card.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        card.set_title("Final".to_string());

        assert_eq!(card.title, "Final");
        assert_eq!(card.created_at, created);
        assert!(card.updated_at > created);
    }

    #[test]
    fn test_card_without_timestamps_deserializes() {
        let json = r#"{"id": "6f1c2d4e-8a7b-4c3d-9e2f-1a2b3c4d5e6f", "title": "Legacy"}"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.title, "Legacy");
        assert_eq!(
            card.id.to_string(),
            "6f1c2d4e-8a7b-4c3d-9e2f-1a2b3c4d5e6f"
        );
    }

    #[test]
    fn test_card_id_serializes_as_plain_string() {
        let card = Card::new("Test".to_string());
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["id"], serde_json::json!(card.id.to_string()));
    }
}
