//! In-game HUD: scores, turn indicator and the game-over banner.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::AppState;
use crate::constants::HUD_PANEL_WIDTH;
use crate::game::{Game, Winner};
use crate::ui::egui_color;

pub fn game_hud_system(
    mut contexts: EguiContexts,
    game: Res<Game>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::SidePanel::left("game_hud")
        .exact_width(HUD_PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Dots and Boxes");
            ui.label(format!("{}  ({}x{})", game.mode.label(), game.grid.rows(), game.grid.cols()));
            ui.separator();

            // Scores
            for player in &game.players {
                ui.label(egui::RichText::new(format!("{}: {}", player.label(), player.score))
                    .color(egui_color(player.color))
                    .size(18.0)
                    .strong());
                ui.small(player.controller.label());
            }
            ui.separator();

            // Turn
            if !game.is_over() {
                let current = game.current();
                ui.label(egui::RichText::new(format!("{} to move", current.label()))
                    .color(egui_color(current.color)));
                if game.extra_turn {
                    ui.label("extra turn!");
                }
                if current.is_ai() {
                    ui.label(egui::RichText::new("thinking…").italics().weak());
                }
                ui.separator();
            }

            ui.label(format!("Boxes claimed: {} / {}", game.grid.claimed_count(), game.grid.box_count()));
            ui.label(format!("Moves played: {}", game.moves_played));
            ui.label(format!("Edges left: {}", game.grid.remaining_edges()));
            ui.separator();
            ui.small("R = restart  Esc = menu");
        });

    Ok(())
}

/// Centered result banner with Play Again / Main Menu.
pub fn game_over_banner_system(
    mut contexts: EguiContexts,
    game: Res<Game>,
    mut next_state: ResMut<NextState<AppState>>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::Window::new("Game Over")
        .anchor(egui::Align2::CENTER_CENTER, [HUD_PANEL_WIDTH * 0.5, 0.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                match game.winner() {
                    Winner::Player(p) => {
                        let winner = &game.players[p];
                        ui.heading(egui::RichText::new(format!("{} wins!", winner.label()))
                            .color(egui_color(winner.color)));
                    }
                    Winner::Tie => {
                        ui.heading("It's a tie!");
                    }
                }
                let [a, b] = game.scores();
                ui.label(format!("Final score {} - {}", a, b));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Play Again").clicked() {
                        next_state.set(AppState::Playing);
                    }
                    if ui.button("Main Menu").clicked() {
                        next_state.set(AppState::MainMenu);
                    }
                });
            });
        });

    Ok(())
}
