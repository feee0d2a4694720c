//! Main menu: board size, seats and AI settings, plus Play / Quit buttons.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::AppState;
use crate::ai::Difficulty;
use crate::constants::{MAX_AI_DELAY, MAX_BOARD_SIDE};
use crate::game::GameMode;
use crate::settings::{self, UserSettings};

/// Widget state persisted across frames via Local.
#[derive(Default)]
pub struct MenuState {
    pub rows: usize,
    pub cols: usize,
    pub mode: GameMode,
    pub difficulty: [Difficulty; 2],
    pub ai_delay: f32,
    pub show_hover: bool,
    pub initialized: bool,
}

impl MenuState {
    fn load(&mut self, saved: &UserSettings) {
        self.rows = saved.rows;
        self.cols = saved.cols;
        self.mode = saved.mode;
        self.difficulty = saved.ai_difficulty;
        self.ai_delay = saved.ai_delay;
        self.show_hover = saved.show_hover;
        self.initialized = true;
    }

    fn to_settings(&self) -> UserSettings {
        UserSettings {
            rows: self.rows,
            cols: self.cols,
            mode: self.mode,
            ai_difficulty: self.difficulty,
            ai_delay: self.ai_delay,
            show_hover: self.show_hover,
        }
        .sanitized()
    }
}

fn difficulty_combo(ui: &mut egui::Ui, id: &str, label: &str, value: &mut Difficulty) {
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(value.label())
            .show_ui(ui, |ui| {
                for d in Difficulty::ALL {
                    ui.selectable_value(value, d, d.label()).on_hover_text(d.description());
                }
            });
    });
}

pub fn main_menu_system(
    mut contexts: EguiContexts,
    mut next_state: ResMut<NextState<AppState>>,
    mut user_settings: ResMut<UserSettings>,
    mut exit: MessageWriter<AppExit>,
    mut state: Local<MenuState>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    if !state.initialized {
        state.load(&user_settings);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(egui::RichText::new("Dots and Boxes").size(32.0));
            ui.add_space(20.0);
        });

        let panel_width = 360.0;
        ui.vertical_centered(|ui| {
            ui.set_max_width(panel_width);

            // ── Board ──────────────────────────────
            ui.separator();
            ui.label(egui::RichText::new("Board").strong());
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Rows:");
                ui.add(egui::Slider::new(&mut state.rows, 1..=MAX_BOARD_SIDE));
            });
            ui.horizontal(|ui| {
                ui.label("Columns:");
                ui.add(egui::Slider::new(&mut state.cols, 1..=MAX_BOARD_SIDE));
            });

            ui.add_space(8.0);

            // ── Players ────────────────────────────
            ui.separator();
            ui.label(egui::RichText::new("Players").strong());
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Mode:");
                egui::ComboBox::from_id_salt("game_mode")
                    .selected_text(state.mode.label())
                    .show_ui(ui, |ui| {
                        for mode in GameMode::ALL {
                            ui.selectable_value(&mut state.mode, mode, mode.label());
                        }
                    });
            });

            let mode = state.mode;
            for seat in 0..2 {
                if mode.seat_is_ai(seat) {
                    let label = format!("Player {} AI:", seat + 1);
                    difficulty_combo(ui, &format!("difficulty_{}", seat), &label, &mut state.difficulty[seat]);
                }
            }
            if mode.seat_is_ai(0) || mode.seat_is_ai(1) {
                ui.horizontal(|ui| {
                    ui.label("AI move delay:").on_hover_text("Seconds an AI waits before drawing. 0 is instant.");
                    ui.add(egui::Slider::new(&mut state.ai_delay, 0.0..=MAX_AI_DELAY).suffix(" s"));
                });
            }
            ui.checkbox(&mut state.show_hover, "Preview the edge under the cursor");

            ui.add_space(20.0);

            if ui.button(egui::RichText::new("  Play  ").size(18.0)).clicked() {
                let saved = state.to_settings();
                settings::save_settings(&saved);
                *user_settings = saved;
                next_state.set(AppState::Playing);
            }

            ui.add_space(8.0);

            if ui.button(egui::RichText::new("Quit").size(14.0)).clicked() {
                exit.write(AppExit::Success);
            }

            ui.add_space(20.0);
            let commit = option_env!("BUILD_COMMIT").unwrap_or("unknown");
            ui.small(format!("v{} ({})", env!("CARGO_PKG_VERSION"), commit));
        });
    });

    Ok(())
}
