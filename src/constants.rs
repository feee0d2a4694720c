//! Constants - Tuning parameters for the board, layout and AI

// Board
pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;
/// Largest board the menu offers (boxes per side).
pub const MAX_BOARD_SIDE: usize = 10;

// Window
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const TARGET_FPS: f64 = 60.0;

/// Width of the egui HUD panel on the left. The board is centered in the rest.
pub const HUD_PANEL_WIDTH: f32 = 200.0;

// Layout (screen pixels)
pub const MAX_CELL_SIZE: f32 = 40.0;
pub const MIN_CELL_SIZE: f32 = 24.0;
/// Margin kept clear around the board inside the play area.
pub const BOARD_MARGIN: f32 = 60.0;
/// Half-width of the band around a line that accepts clicks.
pub const CLICK_TOLERANCE: f32 = 8.0;

// Sprites
pub const DRAWN_LINE_WIDTH: f32 = 4.0;
pub const UNDRAWN_LINE_WIDTH: f32 = 1.5;
pub const DOT_SIZE: f32 = 8.0;
/// Gap between a claimed box fill and its edges.
pub const BOX_INSET: f32 = 2.0;
pub const BOX_FILL_ALPHA: f32 = 0.3;
pub const HOVER_ALPHA: f32 = 0.45;

// Z layers
pub const Z_BOX: f32 = 0.0;
pub const Z_LINE: f32 = 1.0;
pub const Z_HIGHLIGHT: f32 = 2.0;
pub const Z_DOT: f32 = 3.0;

// Colors (sRGB triples, shared by sprites and egui)
pub const BACKGROUND_COLOR: (f32, f32, f32) = (0.96, 0.96, 0.96);
pub const DRAWN_LINE_COLOR: (f32, f32, f32) = (0.1, 0.1, 0.1);
pub const UNDRAWN_LINE_COLOR: (f32, f32, f32) = (0.78, 0.78, 0.78);
pub const DOT_COLOR: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// Seat colors: Player 1 red, Player 2 blue.
pub const PLAYER_COLORS: [(f32, f32, f32); 2] = [
    (0.9, 0.16, 0.22),  // Red
    (0.0, 0.47, 0.95),  // Blue
];

// AI
/// Seconds an AI seat waits before committing its move.
pub const DEFAULT_AI_DELAY: f32 = 0.4;
pub const MAX_AI_DELAY: f32 = 2.0;
/// Plies searched by the Hard tier (the move itself plus one reply).
pub const HARD_SEARCH_DEPTH: usize = 2;
