//! Dots and Boxes - two-player pencil game on a Bevy window.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::prelude::*;
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};

use dots_and_boxes::constants::{TARGET_FPS, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Dots and Boxes".into(),
            resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    // Fixed 60 FPS cadence
    app.add_plugins(FramepacePlugin)
        .insert_resource(FramepaceSettings { limiter: Limiter::from_framerate(TARGET_FPS) });

    // Wire up ECS systems
    dots_and_boxes::build_app(&mut app);

    app.run();
}
