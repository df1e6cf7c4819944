use crate::{
    domain::{Board, BoardConfig},
    error::{KanbanError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// File-based storage implementation
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const KANBAN_DIR: &'static str = ".kanban";
    const BOARD_FILE: &'static str = "board.json";
    const CONFIG_FILE: &'static str = "config.json";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::KANBAN_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    fn config_file(&self) -> PathBuf {
        self.root_path.join(Self::CONFIG_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }

    /// Loads the board configuration, defaulting when no file exists
    pub async fn load_config(&self) -> Result<BoardConfig> {
        let config_file = self.config_file();

        if !config_file.exists() {
            return Ok(BoardConfig::default());
        }

        let contents = fs::read_to_string(&config_file).await?;
        let config: BoardConfig = serde_json::from_str(&contents)
            .map_err(|e| KanbanError::ConfigError(format!("{}: {}", config_file.display(), e)))?;

        if config.columns.iter().any(|name| name.trim().is_empty()) {
            return Err(KanbanError::ConfigError(format!(
                "{}: seed column names must not be blank",
                config_file.display()
            )));
        }

        Ok(config)
    }

    /// Writes the board configuration
    pub async fn save_config(&self, config: &BoardConfig) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(config)?;
        fs::write(self.config_file(), json).await?;
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        if !self.board_file().exists() {
            let config = self.load_config().await?;
            self.save_board(&Board::seeded(&config)).await?;
            info!(path = %self.root_path.display(), "Initialized board storage");
        }

        Ok(())
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(board)?;
        let board_file = self.board_file();
        let tmp_file = board_file.with_extension("json.tmp");

        // Readers only ever see a complete snapshot
        fs::write(&tmp_file, json).await?;
        if let Err(e) = fs::rename(&tmp_file, &board_file).await {
            let _ = fs::remove_file(&tmp_file).await;
            return Err(e.into());
        }

        debug!(path = %board_file.display(), "Saved board");
        Ok(())
    }

    async fn load_board(&self) -> Result<Option<Board>> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let board: Board = serde_json::from_str(&contents)?;

        Ok(Some(board))
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.board_file().exists()
    }
}
