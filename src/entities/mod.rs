mod game_state;
mod target;

// Re-export all public types
pub use game_state::GameState;
pub use target::{RingColor, Target};
