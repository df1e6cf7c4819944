use crate::{
    domain::Board,
    error::{KanbanError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// In-process storage holding the snapshot as serialized JSON text
///
/// Mirrors a browser-style key/value slot, including an optional byte quota.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the size of a saved snapshot in bytes
    pub fn with_quota(quota: usize) -> Self {
        Self {
            slot: Mutex::new(None),
            quota: Some(quota),
        }
    }

    /// Replaces the stored text verbatim
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.lock() = Some(raw.into());
    }

    /// Returns the stored text, if any
    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds the last complete write
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        let mut slot = self.lock();
        if slot.is_none() {
            *slot = Some(serde_json::to_string(&Board::default())?);
        }
        Ok(())
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        let json = serde_json::to_string(board)?;

        if let Some(quota) = self.quota {
            if json.len() > quota {
                return Err(KanbanError::StorageError(format!(
                    "quota exceeded: snapshot is {} bytes, limit is {}",
                    json.len(),
                    quota
                )));
            }
        }

        *self.lock() = Some(json);
        Ok(())
    }

    async fn load_board(&self) -> Result<Option<Board>> {
        let Some(json) = self.raw() else {
            return Ok(None);
        };

        let board: Board = serde_json::from_str(&json)?;
        Ok(Some(board))
    }

    async fn is_initialized(&self) -> bool {
        self.lock().is_some()
    }
}
