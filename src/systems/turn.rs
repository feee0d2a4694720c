//! Human input, hover preview, game start and game-over detection.

use bevy::prelude::*;

use crate::AppState;
use crate::game::{Game, Winner};
use crate::grid::Edge;
use crate::layout::BoardLayout;
use crate::settings::UserSettings;
use crate::systems::{AiPlayerConfig, AiTurnTimer};

/// Undrawn edge under the pointer while a human is on turn.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoveredEdge(pub Option<Edge>);

/// Fresh game from the saved menu choices.
pub fn new_game(settings: &UserSettings) -> Game {
    let s = settings.clone().sanitized();
    Game::new(s.mode, s.rows, s.cols, s.ai_difficulty)
}

/// Undrawn edge under the cursor, if any.
fn edge_under_cursor(window: &Window, layout: &BoardLayout, game: &Game) -> Option<Edge> {
    let cursor = window.cursor_position()?;
    let edge = layout.pick_edge(game.grid.rows(), game.grid.cols(), cursor)?;
    (!game.grid.is_drawn(edge)).then_some(edge)
}

/// Rebuild the game when entering Playing.
pub fn game_startup_system(
    settings: Res<UserSettings>,
    mut game: ResMut<Game>,
    mut ai_config: ResMut<AiPlayerConfig>,
    mut timer: ResMut<AiTurnTimer>,
    mut hovered: ResMut<HoveredEdge>,
) {
    *game = new_game(&settings);
    ai_config.decision_delay = settings.clone().sanitized().ai_delay;
    timer.0 = 0.0;
    hovered.0 = None;
    info!(
        "New game: {} on {}x{} ({} vs {})",
        game.mode.label(),
        game.grid.rows(),
        game.grid.cols(),
        game.players[0].controller.label(),
        game.players[1].controller.label(),
    );
}

/// Left click draws the edge under the cursor for a human seat.
pub fn human_move_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut egui_contexts: bevy_egui::EguiContexts,
    layout: Res<BoardLayout>,
    mut game: ResMut<Game>,
) {
    if !mouse.just_pressed(MouseButton::Left) { return; }
    if game.is_over() || game.current().is_ai() { return; }

    // Don't steal clicks from the HUD or banner
    if let Ok(ctx) = egui_contexts.ctx_mut() {
        if ctx.wants_pointer_input() { return; }
    }

    let Ok(window) = windows.single() else { return };
    let Some(edge) = edge_under_cursor(window, &layout, &game) else { return };
    game.apply_move(edge);
}

pub fn hover_system(
    windows: Query<&Window>,
    layout: Res<BoardLayout>,
    settings: Res<UserSettings>,
    game: Res<Game>,
    mut hovered: ResMut<HoveredEdge>,
) {
    let edge = windows.single().ok().and_then(|window| {
        if !settings.show_hover || game.is_over() || game.current().is_ai() {
            return None;
        }
        edge_under_cursor(window, &layout, &game)
    });
    hovered.set_if_neq(HoveredEdge(edge));
}

/// Log the result and leave Playing once every box is owned.
pub fn game_over_system(
    game: Res<Game>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !game.is_over() { return; }

    let [a, b] = game.scores();
    match game.winner() {
        Winner::Player(p) => info!("Game over: {} wins {}-{}", game.players[p].label(), a, b),
        Winner::Tie => info!("Game over: tie {}-{}", a, b),
    }
    next_state.set(AppState::GameOver);
}
