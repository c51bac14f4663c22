//! Default tuning values for a round.

use std::time::Duration;

/// Initial playfield width in pixels, used until the first terminal resize.
pub const DEFAULT_WIDTH: f64 = 800.0;
/// Initial playfield height in pixels.
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Pixels per terminal column. Braille gives 2 dots per column.
pub const CELL_WIDTH: f64 = 6.0;
/// Pixels per terminal row. Braille gives 4 dots per row.
pub const CELL_HEIGHT: f64 = 12.0;

/// Simulation and render rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Time between target spawns.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(400);

/// Minimum distance between a spawned target centre and the playfield edge.
pub const TARGET_PADDING: f64 = 30.0;

/// Height of the HUD band at the top of the screen (four rows).
pub const HUD_HEIGHT: f64 = 48.0;

/// Missed targets allowed before the round ends.
pub const LIVES: u32 = 3;

/// File the logger writes to, since stdout is the game surface.
pub const LOG_FILE: &str = "aim-trainer.log";
