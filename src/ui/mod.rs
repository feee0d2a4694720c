//! UI module: main menu, in-game HUD, game-over banner and keyboard shortcuts.

pub mod main_menu;
pub mod game_hud;

use bevy::prelude::*;
use bevy_egui::{EguiPrimaryContextPass, egui};

use crate::game::Game;
use crate::settings::UserSettings;
use crate::systems::{AiTurnTimer, new_game};
use crate::{AppState, Step};

/// Register all UI systems.
pub fn register_ui(app: &mut App) {
    // Main menu (egui)
    app.add_systems(EguiPrimaryContextPass,
        main_menu::main_menu_system.run_if(in_state(AppState::MainMenu)));

    // HUD claims the left side before the banner centers itself in the rest
    app.add_systems(EguiPrimaryContextPass, (
        game_hud::game_hud_system,
        game_hud::game_over_banner_system.run_if(in_state(AppState::GameOver)),
    ).chain().run_if(in_state(AppState::Playing).or(in_state(AppState::GameOver))));

    app.add_systems(Update, game_shortcut_system
        .before(Step::Input)
        .run_if(in_state(AppState::Playing).or(in_state(AppState::GameOver))));
}

/// sRGB triple to an opaque egui color.
pub fn egui_color((r, g, b): (f32, f32, f32)) -> egui::Color32 {
    egui::Color32::from_rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// R restarts with the same settings, Escape returns to the main menu.
fn game_shortcut_system(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    settings: Res<UserSettings>,
    mut game: ResMut<Game>,
    mut timer: ResMut<AiTurnTimer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Returning to main menu");
        next_state.set(AppState::MainMenu);
        return;
    }
    if !keys.just_pressed(KeyCode::KeyR) { return; }

    match state.get() {
        AppState::Playing => {
            *game = new_game(&settings);
            timer.0 = 0.0;
            info!("Restarted {}x{} game", game.grid.rows(), game.grid.cols());
        }
        _ => next_state.set(AppState::Playing),
    }
}
