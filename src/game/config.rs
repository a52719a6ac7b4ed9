use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board extent per side, in board units
    pub board_size: i32,
    /// Size of one grid cell, in board units
    pub cell_size: i32,
    /// Milliseconds between game ticks
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 400,
            cell_size: 20,
            tick_interval_ms: 100,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom geometry
    pub fn new(board_size: i32, cell_size: i32) -> Self {
        Self {
            board_size,
            cell_size,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(200, 20)
    }

    /// Number of cells per side of the grid
    pub fn cells_per_side(&self) -> i32 {
        self.board_size / self.cell_size
    }

    /// Reject geometry the game cannot run on
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(self.board_size > 0, "board size must be positive");
        ensure!(
            self.board_size % self.cell_size == 0,
            "board size {} is not a multiple of cell size {}",
            self.board_size,
            self.cell_size
        );
        ensure!(
            self.cells_per_side() >= 4,
            "grid of {} cells per side is too small for the initial snake",
            self.cells_per_side()
        );
        ensure!(self.tick_interval_ms > 0, "tick interval must be positive");
        Ok(())
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 400);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.cells_per_side(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(600, 30);
        assert_eq!(config.cells_per_side(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        assert!(GameConfig::new(410, 20).validate().is_err()); // not divisible
        assert!(GameConfig::new(60, 20).validate().is_err()); // 3 cells per side
        assert!(GameConfig::new(0, 20).validate().is_err());
        assert!(GameConfig::new(400, 0).validate().is_err());

        let config = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"board_size": 200, "cell_size": 10, "tick_interval_ms": 50}}"#
        )
        .unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.board_size, 200);
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.tick_interval_ms, 50);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(GameConfig::load(file.path()).is_err());

        let mut bad_geometry = tempfile::NamedTempFile::new().unwrap();
        write!(
            bad_geometry,
            r#"{{"board_size": 30, "cell_size": 20, "tick_interval_ms": 100}}"#
        )
        .unwrap();
        assert!(GameConfig::load(bad_geometry.path()).is_err());
    }
}
