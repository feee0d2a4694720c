//! AI seats: wait out the decision delay, then commit one move per turn.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ai;
use crate::constants::DEFAULT_AI_DELAY;
use crate::game::Game;

#[derive(Resource)]
pub struct AiPlayerConfig {
    /// Seconds an AI seat waits before moving. 0 plays instantly.
    pub decision_delay: f32,
}

impl Default for AiPlayerConfig {
    fn default() -> Self { Self { decision_delay: DEFAULT_AI_DELAY } }
}

/// Seconds the seat on turn has been waiting.
#[derive(Resource, Default)]
pub struct AiTurnTimer(pub f32);

#[derive(Resource)]
pub struct AiRng(pub StdRng);

impl Default for AiRng {
    fn default() -> Self { Self(StdRng::from_os_rng()) }
}

impl AiRng {
    pub fn seeded(seed: u64) -> Self { Self(StdRng::seed_from_u64(seed)) }
}

/// One decision per AI turn once the delay has elapsed. Never moves in a tick
/// where the game was already changed, so each tick commits at most one move.
pub fn ai_turn_system(
    time: Res<Time>,
    config: Res<AiPlayerConfig>,
    mut timer: ResMut<AiTurnTimer>,
    mut rng: ResMut<AiRng>,
    mut game: ResMut<Game>,
) {
    // Something else (a human click, a restart) already changed the game this tick
    if game.is_changed() { return; }
    if game.is_over() { return; }
    let Some(difficulty) = game.current().controller.difficulty() else {
        timer.0 = 0.0;
        return;
    };

    timer.0 += time.delta_secs();
    if timer.0 < config.decision_delay { return; }
    timer.0 = 0.0;

    let player = game.current_player;
    let Some(edge) = ai::select_move(&game.grid, player, difficulty, &mut rng.0) else {
        warn!("AI seat {} ({}) found no move on an unfinished board", player + 1, difficulty.label());
        return;
    };
    if game.apply_move(edge).is_none() {
        warn!("AI seat {} chose unplayable edge {}", player + 1, edge);
    }
}
