//! Round controller: one fixed-rate tick of the aim trainer simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::config::GameConfig;
use crate::entities::{GameState, Target};
use crate::scoring::Stats;

/// Everything the platform reported for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Window close / quit key seen this tick
    pub quit: bool,
    /// Spawn timer fired this tick
    pub spawn: bool,
    /// Number of mouse-down events this tick
    pub clicks: u32,
    /// Final pointer position this tick in playfield pixels, if known
    pub pointer: Option<(f64, f64)>,
    /// Round clock time at this tick
    pub elapsed: Duration,
}

/// What the app loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The last life was lost this tick
    Ended,
    Quit,
}

pub struct Round {
    config: GameConfig,
    state: GameState,
    targets: Vec<Target>,
    stats: Stats,
    /// Current playfield size in pixels
    width: f64,
    height: f64,
    rng: StdRng,
}

impl Round {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Round with a fixed spawn sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            state: GameState::Running,
            targets: Vec::new(),
            stats: Stats::default(),
            width: config.width,
            height: config.height,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Live counters while running, frozen once the round has ended
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn lives_remaining(&self) -> u32 {
        self.stats.lives_remaining(self.config.lives)
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Track a new playfield size. Existing targets keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Place a target at a chosen position
    pub fn spawn_target_at(&mut self, x: f64, y: f64) {
        log::debug!("spawned target at ({:.0}, {:.0})", x, y);
        self.targets.push(Target::new(x, y));
    }

    /// Place a target uniformly at random inside the padded area below the HUD
    pub fn spawn_target(&mut self) {
        let padding = self.config.padding;
        let x = random_in(&mut self.rng, padding, self.width - padding);
        let y = random_in(
            &mut self.rng,
            padding + self.config.hud_height,
            self.height - padding,
        );
        self.spawn_target_at(x, y);
    }

    /// Run one tick. Does nothing once the round has ended.
    pub fn tick(&mut self, input: &TickInput) -> TickOutcome {
        if self.state == GameState::Ended {
            return TickOutcome::Ended;
        }
        if input.quit {
            return TickOutcome::Quit;
        }

        self.stats.elapsed = input.elapsed;
        self.stats.clicks += input.clicks;

        if input.spawn {
            self.spawn_target();
        }

        self.update_targets(input);

        if self.stats.misses >= self.config.lives {
            self.state = GameState::Ended;
            log::info!(
                "round ended: time {:.1}s, hits {}, clicks {}, misses {}",
                self.stats.elapsed_secs(),
                self.stats.hits,
                self.stats.clicks,
                self.stats.misses
            );
            return TickOutcome::Ended;
        }

        TickOutcome::Continue
    }

    /// Advance every target, then settle expiries before clicks.
    /// Each click this tick can hit at most one target, oldest first.
    fn update_targets(&mut self, input: &TickInput) {
        let mut clicks_left = if input.pointer.is_some() {
            input.clicks
        } else {
            0
        };
        let mut targets_to_remove = Vec::new();

        for (idx, target) in self.targets.iter_mut().enumerate() {
            target.advance();

            if target.is_expired() {
                self.stats.misses += 1;
                targets_to_remove.push(idx);
                log::debug!("target at ({:.0}, {:.0}) expired", target.x, target.y);
                continue;
            }

            if clicks_left > 0
                && let Some((px, py)) = input.pointer
                && target.contains(px, py)
            {
                clicks_left -= 1;
                self.stats.hits += 1;
                targets_to_remove.push(idx);
                log::debug!(
                    "hit target at ({:.0}, {:.0}) size {:.1}",
                    target.x,
                    target.y,
                    target.size
                );
            }
        }

        // Remove in reverse order to avoid index issues
        for idx in targets_to_remove.into_iter().rev() {
            self.targets.remove(idx);
        }
    }
}

fn random_in(rng: &mut StdRng, low: f64, high: f64) -> f64 {
    if high <= low {
        return low;
    }
    rng.random_range(low..=high)
}
