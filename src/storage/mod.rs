use crate::{
    domain::{Board, BoardConfig},
    error::Result,
};
use async_trait::async_trait;
use tracing::{info, warn};

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Storage trait for persisting the board snapshot
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Saves the board snapshot, replacing any previous one
    async fn save_board(&self, board: &Board) -> Result<()>;

    /// Loads the board snapshot, or `None` if nothing has been saved yet
    async fn load_board(&self) -> Result<Option<Board>>;

    /// Checks if the backend holds a snapshot
    async fn is_initialized(&self) -> bool;
}

/// Loads the persisted board, falling back to a fresh seed
///
/// Missing, unreadable, malformed or inconsistent snapshots never fail
/// startup.
pub async fn load_or_seed(storage: &dyn Storage, config: &BoardConfig) -> Board {
    match storage.load_board().await {
        Ok(Some(board)) => match board.validate() {
            Ok(()) => return board,
            Err(e) => warn!(error = %e, "Persisted board is inconsistent, using default seed"),
        },
        Ok(None) => info!("No persisted board found, using default seed"),
        Err(e) => warn!(error = %e, "Failed to load persisted board, using default seed"),
    }

    Board::seeded(config)
}
