//! Render Module - Bevy 2D sprites for dots, edges and claimed boxes.
//!
//! The board is rebuilt from scratch whenever the game, hover or layout changes.
//! Every sprite carries `BoardSprite` so a rebuild can despawn the previous set.

use bevy::prelude::*;

use crate::constants::*;
use crate::game::Game;
use crate::grid::{Edge, Orientation};
use crate::layout::{BoardLayout, screen_to_world};
use crate::systems::HoveredEdge;
use crate::{AppState, Step};

/// Marker for every sprite that belongs to the board.
#[derive(Component)]
pub struct BoardSprite;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        let (r, g, b) = BACKGROUND_COLOR;
        app.insert_resource(ClearColor(Color::srgb(r, g, b)))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, board_layout_sync.before(Step::Input))
            .add_systems(Update, draw_board_system
                .after(Step::Resolve)
                .run_if(in_state(AppState::Playing).or(in_state(AppState::GameOver))))
            .add_systems(OnEnter(AppState::MainMenu), board_cleanup_system);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("2D camera spawned at origin");
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::srgb(r, g, b)
}

fn rgba((r, g, b): (f32, f32, f32), a: f32) -> Color {
    Color::srgba(r, g, b, a)
}

/// Refit the board when the window or board size changes.
pub fn board_layout_sync(
    windows: Query<&Window>,
    game: Res<Game>,
    mut layout: ResMut<BoardLayout>,
) {
    let Ok(window) = windows.single() else { return };
    let viewport = Vec2::new(window.width(), window.height());
    let next = BoardLayout::fit(game.grid.rows(), game.grid.cols(), viewport, HUD_PANEL_WIDTH);
    layout.set_if_neq(next);
}

/// Sprite for one edge, `width` thick, centered on the line in world space.
fn edge_sprite(layout: &BoardLayout, edge: Edge, viewport: Vec2, width: f32, color: Color, z: f32) -> impl Bundle {
    let center = screen_to_world(layout.edge_center(edge), viewport);
    let size = match edge.orientation {
        Orientation::Horizontal => Vec2::new(layout.cell_size + width, width),
        Orientation::Vertical => Vec2::new(width, layout.cell_size + width),
    };
    (
        Sprite { color, custom_size: Some(size), ..default() },
        Transform::from_xyz(center.x, center.y, z),
        BoardSprite,
    )
}

pub fn draw_board_system(
    mut commands: Commands,
    existing: Query<Entity, With<BoardSprite>>,
    windows: Query<&Window>,
    game: Res<Game>,
    hovered: Res<HoveredEdge>,
    layout: Res<BoardLayout>,
) {
    // Only rebuild when something visible changed
    if !game.is_changed() && !hovered.is_changed() && !layout.is_changed() { return; }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let Ok(window) = windows.single() else { return };
    let viewport = Vec2::new(window.width(), window.height());
    let grid = &game.grid;

    // Claimed boxes
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let Some(owner) = grid.owner(r, c) else { continue };
            let rect = layout.box_rect(r, c).inflate(-BOX_INSET);
            let center = screen_to_world(rect.center(), viewport);
            commands.spawn((
                Sprite {
                    color: rgba(game.players[owner].color, BOX_FILL_ALPHA),
                    custom_size: Some(rect.size()),
                    ..default()
                },
                Transform::from_xyz(center.x, center.y, Z_BOX),
                BoardSprite,
            ));
        }
    }

    // Edges: thin gray until drawn, the last move in its mover's color
    let last = game.last_move;
    for edge in grid.edges() {
        let bundle = if !grid.is_drawn(edge) {
            edge_sprite(&layout, edge, viewport, UNDRAWN_LINE_WIDTH, rgb(UNDRAWN_LINE_COLOR), Z_LINE)
        } else if let Some(m) = last.filter(|m| m.edge == edge) {
            edge_sprite(&layout, edge, viewport, DRAWN_LINE_WIDTH, rgb(game.players[m.player].color), Z_LINE)
        } else {
            edge_sprite(&layout, edge, viewport, DRAWN_LINE_WIDTH, rgb(DRAWN_LINE_COLOR), Z_LINE)
        };
        commands.spawn(bundle);
    }

    if let Some(edge) = hovered.0 {
        let color = rgba(game.current().color, HOVER_ALPHA);
        commands.spawn(edge_sprite(&layout, edge, viewport, DRAWN_LINE_WIDTH, color, Z_HIGHLIGHT));
    }

    // Dots
    for r in 0..=grid.rows() {
        for c in 0..=grid.cols() {
            let pos = screen_to_world(layout.dot(r, c), viewport);
            commands.spawn((
                Sprite { color: rgb(DOT_COLOR), custom_size: Some(Vec2::splat(DOT_SIZE)), ..default() },
                Transform::from_xyz(pos.x, pos.y, Z_DOT),
                BoardSprite,
            ));
        }
    }
}

fn board_cleanup_system(
    mut commands: Commands,
    existing: Query<Entity, With<BoardSprite>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
}
