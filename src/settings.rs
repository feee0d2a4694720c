//! User settings persistence: save/load menu choices to a JSON file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ai::Difficulty;
use crate::constants::*;
use crate::game::GameMode;

/// Persisted user settings. Saved to `Documents\DotsAndBoxes\settings.json`.
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserSettings {
    // Board (boxes per side)
    pub rows: usize,
    pub cols: usize,
    // Seats
    #[serde(default)]
    pub mode: GameMode,
    /// Difficulty for seat 0 and seat 1 when that seat is AI.
    #[serde(default)]
    pub ai_difficulty: [Difficulty; 2],
    #[serde(default = "default_ai_delay")]
    pub ai_delay: f32,
    // Display
    #[serde(default = "default_true")]
    pub show_hover: bool,
}

fn default_true() -> bool { true }
fn default_ai_delay() -> f32 { DEFAULT_AI_DELAY }

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            mode: GameMode::default(),
            ai_difficulty: [Difficulty::default(); 2],
            ai_delay: DEFAULT_AI_DELAY,
            show_hover: true,
        }
    }
}

impl UserSettings {
    /// Clamp hand-edited values back into the range the menu offers.
    pub fn sanitized(mut self) -> Self {
        self.rows = self.rows.clamp(1, MAX_BOARD_SIDE);
        self.cols = self.cols.clamp(1, MAX_BOARD_SIDE);
        self.ai_delay = if self.ai_delay.is_finite() {
            self.ai_delay.clamp(0.0, MAX_AI_DELAY)
        } else {
            DEFAULT_AI_DELAY
        };
        self
    }
}

fn settings_path() -> Option<PathBuf> {
    let home = std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .ok()?;
    let dir = PathBuf::from(home).join("Documents").join("DotsAndBoxes");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("settings.json"))
}

pub fn save_settings(settings: &UserSettings) {
    let Some(path) = settings_path() else { return };
    save_settings_to(settings, &path);
}

pub fn load_settings() -> UserSettings {
    let Some(path) = settings_path() else { return UserSettings::default() };
    load_settings_from(&path)
}

pub fn save_settings_to(settings: &UserSettings, path: &Path) {
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                warn!("Failed to save settings: {}", e);
            }
        }
        Err(e) => warn!("Failed to serialize settings: {}", e),
    }
}

/// Missing or unreadable files fall back to defaults.
pub fn load_settings_from(path: &Path) -> UserSettings {
    match std::fs::read_to_string(path) {
        Ok(json) => serde_json::from_str::<UserSettings>(&json)
            .unwrap_or_default()
            .sanitized(),
        Err(_) => UserSettings::default(),
    }
}
