//! Dots and Boxes - Bevy ECS game with egui menus and four AI tiers.

// ============================================================================
// MODULES
// ============================================================================

pub mod ai;
pub mod claim;
pub mod constants;
pub mod game;
pub mod grid;
pub mod layout;
pub mod render;
pub mod settings;
pub mod systems;
pub mod ui;

// ============================================================================
// IMPORTS
// ============================================================================

use bevy::prelude::*;

use game::Game;
use layout::BoardLayout;
use settings::UserSettings;
use systems::*;

// ============================================================================
// APP STATE
// ============================================================================

#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppState {
    #[default]
    MainMenu,
    Playing,
    GameOver,
}

/// Per-tick phases while Playing. At most one move is committed per tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Input,   // Human click -> edge -> apply_move
    Ai,      // AI seat on turn -> select_move -> apply_move
    Resolve, // Game over detection
}

// ============================================================================
// BEVY APP
// ============================================================================

/// Game state, turn systems and AI. Needs only `MinimalPlugins` + `StatesPlugin`.
/// Inserts saved settings unless the caller already provided `UserSettings`.
pub fn build_core(app: &mut App) {
    if !app.world().contains_resource::<UserSettings>() {
        app.insert_resource(settings::load_settings());
    }

    app.init_state::<AppState>()
        .init_resource::<Game>()
        .init_resource::<BoardLayout>()
        .init_resource::<HoveredEdge>()
        .init_resource::<AiPlayerConfig>()
        .init_resource::<AiTurnTimer>()
        .init_resource::<AiRng>()
        .configure_sets(Update, (Step::Input, Step::Ai, Step::Resolve)
            .chain()
            .run_if(in_state(AppState::Playing)))
        .add_systems(OnEnter(AppState::Playing), game_startup_system)
        .add_systems(Update, ai_turn_system.in_set(Step::Ai))
        .add_systems(Update, game_over_system.in_set(Step::Resolve))
        .add_systems(Update, log_state_changes);
}

/// Full interactive game: core plus mouse input, sprites and egui UI.
/// Expects `DefaultPlugins` (window, input, rendering) to be added already.
pub fn build_app(app: &mut App) {
    app.add_plugins(bevy_egui::EguiPlugin::default());
    build_core(app);

    app.add_plugins(render::RenderPlugin)
        .add_systems(Update, (hover_system, human_move_system).chain().in_set(Step::Input));

    ui::register_ui(app);
}

fn log_state_changes(state: Res<State<AppState>>) {
    if state.is_changed() {
        info!("State: {:?}", state.get());
    }
}
