use color_eyre::eyre::{Result, ensure};
use std::time::Duration;

use crate::constants::{
    CELL_HEIGHT, CELL_WIDTH, DEFAULT_HEIGHT, DEFAULT_WIDTH, HUD_HEIGHT, LIVES, SPAWN_INTERVAL,
    TARGET_PADDING, TICK_RATE,
};

/// Immutable settings for one round, built once and handed to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub tick_rate: u32,
    pub spawn_interval: Duration,
    pub padding: f64,
    pub hud_height: f64,
    pub lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            tick_rate: TICK_RATE,
            spawn_interval: SPAWN_INTERVAL,
            padding: TARGET_PADDING,
            hud_height: HUD_HEIGHT,
            lives: LIVES,
        }
    }
}

impl GameConfig {
    /// Rejects settings the game loop cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.tick_rate > 0, "tick rate must be positive");
        ensure!(self.lives > 0, "a round needs at least one life");
        ensure!(
            !self.spawn_interval.is_zero(),
            "spawn interval must be non-zero"
        );
        ensure!(
            self.cell_width > 0.0 && self.cell_height > 0.0,
            "cell size must be positive, got {}x{}",
            self.cell_width,
            self.cell_height
        );
        ensure!(self.padding >= 0.0, "padding cannot be negative");
        ensure!(self.hud_height >= 0.0, "HUD height cannot be negative");
        Ok(())
    }

    /// Duration of one tick at the configured rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Playfield size in pixels for a terminal of `columns` x `rows` cells
    pub fn playfield_size(&self, columns: u16, rows: u16) -> (f64, f64) {
        (
            f64::from(columns) * self.cell_width,
            f64::from(rows) * self.cell_height,
        )
    }

    /// Centre of a terminal cell in playfield pixels
    pub fn cell_to_pixel(&self, column: u16, row: u16) -> (f64, f64) {
        (
            (f64::from(column) + 0.5) * self.cell_width,
            (f64::from(row) + 0.5) * self.cell_height,
        )
    }

    /// Number of terminal rows covered by the HUD band
    pub fn hud_rows(&self) -> u16 {
        (self.hud_height / self.cell_height).ceil() as u16
    }
}
