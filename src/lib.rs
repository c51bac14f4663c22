// Library exports for testing
pub use app::App;
pub use config::GameConfig;
pub use entities::{GameState, RingColor, Target};
pub use round::{Round, TickInput, TickOutcome};
pub use scoring::{Stats, accuracy, format_time, speed};

pub mod app;
pub mod config;
pub mod constants;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod round;
pub mod scoring;
pub mod timing;
