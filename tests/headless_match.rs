use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use dots_and_boxes::ai::Difficulty;
use dots_and_boxes::game::{Game, GameMode};
use dots_and_boxes::grid::Edge;
use dots_and_boxes::settings::UserSettings;
use dots_and_boxes::systems::{AiRng, AiTurnTimer};
use dots_and_boxes::{AppState, Step, build_core};

/// Edge a stand-in human seat draws on the next tick.
#[derive(Resource, Default)]
struct QueuedClick(Option<Edge>);

fn queued_click_system(mut click: ResMut<QueuedClick>, mut game: ResMut<Game>) {
    let Some(edge) = click.0.take() else { return };
    game.apply_move(edge);
}

fn headless_app(settings: UserSettings) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(settings);
    build_core(&mut app);
    app.insert_resource(AiRng::seeded(7));
    app
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

fn start(app: &mut App) {
    app.world_mut().resource_mut::<NextState<AppState>>().set(AppState::Playing);
    app.update();
    assert_eq!(state(app), AppState::Playing);
}

#[test]
fn ai_vs_ai_reaches_game_over() {
    let mut app = headless_app(UserSettings {
        rows: 3,
        cols: 3,
        mode: GameMode::AiVsAi,
        ai_difficulty: [Difficulty::Medium, Difficulty::Hard],
        ai_delay: 0.0,
        show_hover: false,
    });
    app.update();
    assert_eq!(state(&app), AppState::MainMenu);
    start(&mut app);

    let edges = app.world().resource::<Game>().grid.edge_count();
    for _ in 0..edges * 2 {
        if state(&app) == AppState::GameOver { break; }
        app.update();
    }

    assert_eq!(state(&app), AppState::GameOver);
    let game = app.world().resource::<Game>();
    assert!(game.is_over());
    assert_eq!(game.moves_played, edges);
    assert_eq!(game.scores().iter().sum::<usize>(), 9);

    // Play Again: a fresh board and a reset AI clock
    app.world_mut().resource_mut::<AiTurnTimer>().0 = 5.0;
    app.world_mut().resource_mut::<NextState<AppState>>().set(AppState::Playing);
    app.update();
    assert_eq!(state(&app), AppState::Playing);
    let game = app.world().resource::<Game>();
    assert_eq!(game.grid.remaining_edges(), game.grid.edge_count());
    assert_eq!(game.grid.claimed_count(), 0);
    assert_eq!(game.scores(), [0, 0]);
    assert_eq!(game.current_player, 0);
    assert_eq!(game.moves_played, 0);
    assert!(game.last_move.is_none());
    assert_eq!(app.world().resource::<AiTurnTimer>().0, 0.0);
}

#[test]
fn one_move_per_tick_when_a_human_hands_over_to_an_instant_ai() {
    let mut app = headless_app(UserSettings {
        rows: 3,
        cols: 3,
        mode: GameMode::HumanVsAi,
        ai_difficulty: [Difficulty::Medium; 2],
        ai_delay: 0.0,
        show_hover: false,
    });
    app.init_resource::<QueuedClick>()
        .add_systems(Update, queued_click_system.in_set(Step::Input));
    start(&mut app);
    assert_eq!(app.world().resource::<Game>().moves_played, 0);

    app.world_mut().resource_mut::<QueuedClick>().0 = Some(Edge::horizontal(0, 0));
    app.update();
    let game = app.world().resource::<Game>();
    assert_eq!(game.moves_played, 1);
    assert_eq!(game.current_player, 1);

    // The AI answers on the following tick
    app.update();
    let game = app.world().resource::<Game>();
    assert_eq!(game.moves_played, 2);
    assert_eq!(game.last_move.map(|m| m.player), Some(1));
}

#[test]
fn game_is_rebuilt_from_settings_on_play() {
    let mut app = headless_app(UserSettings {
        rows: 2,
        cols: 4,
        mode: GameMode::HumanVsHuman,
        ..default()
    });
    start(&mut app);

    let game = app.world().resource::<Game>();
    assert_eq!((game.grid.rows(), game.grid.cols()), (2, 4));
    assert!(game.players.iter().all(|p| !p.is_ai()));

    // Nobody moves for a human seat without input
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(app.world().resource::<Game>().moves_played, 0);
    assert_eq!(state(&app), AppState::Playing);
}

#[test]
fn ai_waits_for_its_delay() {
    let mut app = headless_app(UserSettings {
        rows: 2,
        cols: 2,
        mode: GameMode::AiVsAi,
        ai_delay: 1000.0,
        ..default()
    }.sanitized());
    start(&mut app);

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(app.world().resource::<Game>().moves_played, 0);
}
