use color_eyre::Result;
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;

use crate::config::GameConfig;
use crate::entities::GameState;
use crate::input::{InputFrame, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::round::{Round, TickInput, TickOutcome};
use crate::timing::{Clock, FrameLimiter, SpawnTimer};

/// The main application which holds the round and the platform plumbing around it.
pub struct App {
    running: bool,
    config: GameConfig,
    round: Round,
    /// internal components
    clock: Clock,
    spawn_timer: SpawnTimer,
    frame_limiter: FrameLimiter,
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: GameConfig) -> Self {
        Self::with_round(config, Round::new(config))
    }

    pub fn with_round(config: GameConfig, round: Round) -> Self {
        Self {
            running: true,
            config,
            round,
            clock: Clock::new(),
            spawn_timer: SpawnTimer::new(config.spawn_interval),
            frame_limiter: FrameLimiter::new(config.frame_duration()),
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        log::info!("round started");
        self.clock = Clock::new();

        while self.running {
            self.frame_limiter.wait();

            // Update playfield dimensions before ticking so spawns fit the terminal
            let area = terminal.size()?;
            let (width, height) = self.config.playfield_size(area.width, area.height);
            self.round.resize(width, height);

            // The end screen blocks for up to a frame waiting for input
            let timeout = match self.round.state() {
                GameState::Running => Duration::ZERO,
                GameState::Ended => self.config.frame_duration(),
            };
            let input = self.input_manager.poll_events(timeout)?;
            self.step(input);
            if !self.running {
                break;
            }

            terminal.draw(|frame| {
                let view = RenderView {
                    game_state: self.round.state(),
                    targets: self.round.targets(),
                    stats: self.round.stats(),
                    lives_remaining: self.round.lives_remaining(),
                    config: &self.config,
                    playfield: self.round.size(),
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;
        }
        Ok(())
    }

    /// Apply one frame of input to the round
    pub fn step(&mut self, input: InputFrame) {
        match self.round.state() {
            GameState::Running => {
                let elapsed = self.clock.elapsed();
                let tick_input = TickInput {
                    quit: input.quit,
                    spawn: self.spawn_timer.poll(elapsed),
                    clicks: input.mouse_downs,
                    pointer: input
                        .pointer
                        .map(|(column, row)| self.config.cell_to_pixel(column, row)),
                    elapsed,
                };
                match self.round.tick(&tick_input) {
                    TickOutcome::Quit => {
                        log::info!("quit during round");
                        self.running = false;
                    }
                    TickOutcome::Ended | TickOutcome::Continue => {}
                }
            }
            GameState::Ended => {
                if input.quit || input.key_pressed {
                    log::info!("end screen dismissed");
                    self.running = false;
                }
            }
        }
    }
}
