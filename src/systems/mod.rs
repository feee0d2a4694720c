//! Bevy ECS Systems - Per-tick turn handling for human and AI seats

mod ai_player;
mod turn;

pub use ai_player::*;
pub use turn::*;
