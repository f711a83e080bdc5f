use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Board width in pixels of the reference layout
pub const SCREEN_WIDTH: u32 = 640;
/// Board height in pixels of the reference layout
pub const SCREEN_HEIGHT: u32 = 480;
/// Pixels per grid cell
pub const GRID_SIZE: u32 = 20;
pub const GRID_WIDTH: usize = (SCREEN_WIDTH / GRID_SIZE) as usize;
pub const GRID_HEIGHT: usize = (SCREEN_HEIGHT / GRID_SIZE) as usize;
/// Smallest grid side, in cells
pub const MIN_GRID_DIMENSION: usize = 2;
/// Largest grid side, in cells
pub const MAX_GRID_DIMENSION: usize = 256;
/// Ticks per second
pub const SPEED: u32 = 20;
pub const TITLE: &str = "Snake";

/// Bring a grid side into `MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION`
pub fn clamp_dimension(cells: usize) -> usize {
    cells.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION)
}

/// Rule set the engine plays by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Pending steering, collision probed before the move with the two
    /// cells behind the head ignored, then re-checked after eating
    Classic,
    /// Pending steering, one collision check after the move
    Checked,
    /// Turn-table steering applied on key press
    #[default]
    TurnTable,
}

impl Variant {
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Checked => "checked",
            Variant::TurnTable => "turn-table",
        }
    }

    /// Whether steering goes through the turn table instead of a pending slot
    pub fn uses_turn_table(&self) -> bool {
        matches!(self, Variant::TurnTable)
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Game ticks per second
    pub ticks_per_second: u32,
    /// Rule set
    pub variant: Variant,
    /// Fixed RNG seed, entropy when absent
    pub seed: Option<u64>,
    /// Title shown on the board frame
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            ticks_per_second: SPEED,
            variant: Variant::default(),
            seed: None,
            title: TITLE.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size, clamped to the
    /// supported range
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: clamp_dimension(width),
            grid_height: clamp_dimension(height),
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Time between two game ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second.max(1)))
    }

    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.ticks_per_second, 20);
        assert_eq!(config.variant, Variant::TurnTable);
        assert_eq!(config.grid_width as u32 * GRID_SIZE, SCREEN_WIDTH);
        assert_eq!(config.grid_height as u32 * GRID_SIZE, SCREEN_HEIGHT);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12).with_variant(Variant::Classic);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.cell_count(), 180);
        assert_eq!(config.variant, Variant::Classic);
    }

    #[test]
    fn test_grid_dimensions_are_clamped() {
        let config = GameConfig::new(1, usize::MAX);
        assert_eq!(config.grid_width, MIN_GRID_DIMENSION);
        assert_eq!(config.grid_height, MAX_GRID_DIMENSION);

        assert_eq!(clamp_dimension(40), 40);
    }

    #[test]
    fn test_tick_interval() {
        let mut config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(50));

        config.ticks_per_second = 0;
        assert_eq!(config.tick_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_config_serializes_variant_in_kebab_case() {
        let config = GameConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"turn-table\""));

        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
