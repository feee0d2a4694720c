//! Board geometry and pointer-to-edge mapping.
//!
//! Layout works in screen space (pixels from the window's top-left, y down), the
//! same space `Window::cursor_position` reports. `screen_to_world` converts to
//! Bevy's world space for a camera at the origin (y up).

use bevy::math::{Rect, Vec2};
use bevy::prelude::Resource;

use crate::constants::*;
use crate::grid::{Edge, Orientation};

/// Kept in sync with the window size and board dimensions.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    /// Screen position of dot (0, 0).
    pub origin: Vec2,
    pub cell_size: f32,
    /// Half-width of the clickable band around each line.
    pub tolerance: f32,
}

impl BoardLayout {
    /// Center a `rows x cols` board in the viewport to the right of `reserved_left`.
    pub fn fit(rows: usize, cols: usize, viewport: Vec2, reserved_left: f32) -> Self {
        let rows = rows.max(1) as f32;
        let cols = cols.max(1) as f32;
        let area = Vec2::new(viewport.x - reserved_left, viewport.y);
        let usable = (area - Vec2::splat(2.0 * BOARD_MARGIN)).max(Vec2::ZERO);
        let cell_size = (usable.x / cols)
            .min(usable.y / rows)
            .clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        let board = Vec2::new(cols * cell_size, rows * cell_size);
        let origin = Vec2::new(
            reserved_left + (area.x - board.x) * 0.5,
            (area.y - board.y) * 0.5,
        );
        Self { origin, cell_size, tolerance: CLICK_TOLERANCE }
    }

    pub fn dot(&self, r: usize, c: usize) -> Vec2 {
        self.origin + Vec2::new(c as f32, r as f32) * self.cell_size
    }

    pub fn edge_endpoints(&self, edge: Edge) -> (Vec2, Vec2) {
        let start = self.dot(edge.row, edge.col);
        match edge.orientation {
            Orientation::Horizontal => (start, self.dot(edge.row, edge.col + 1)),
            Orientation::Vertical => (start, self.dot(edge.row + 1, edge.col)),
        }
    }

    pub fn edge_center(&self, edge: Edge) -> Vec2 {
        let (a, b) = self.edge_endpoints(edge);
        (a + b) * 0.5
    }

    /// Screen rectangle of box (r, c).
    pub fn box_rect(&self, r: usize, c: usize) -> Rect {
        Rect::from_corners(self.dot(r, c), self.dot(r + 1, c + 1))
    }

    /// Edge whose band contains `pos`, nearest first. None outside every band.
    pub fn pick_edge(&self, rows: usize, cols: usize, pos: Vec2) -> Option<Edge> {
        let local = (pos - self.origin) / self.cell_size;
        let mut best: Option<(Edge, f32)> = None;

        // Nearest horizontal line, within the span of one segment.
        let line = local.y.round();
        let seg = local.x.floor();
        if line >= 0.0 && line <= rows as f32 && seg >= 0.0 && seg < cols as f32 {
            let dist = (local.y - line).abs() * self.cell_size;
            if dist <= self.tolerance {
                best = Some((Edge::horizontal(line as usize, seg as usize), dist));
            }
        }

        let line = local.x.round();
        let seg = local.y.floor();
        if line >= 0.0 && line <= cols as f32 && seg >= 0.0 && seg < rows as f32 {
            let dist = (local.x - line).abs() * self.cell_size;
            if dist <= self.tolerance && best.is_none_or(|(_, d)| dist < d) {
                best = Some((Edge::vertical(seg as usize, line as usize), dist));
            }
        }

        best.map(|(edge, _)| edge)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::fit(
            DEFAULT_ROWS,
            DEFAULT_COLS,
            Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
            HUD_PANEL_WIDTH,
        )
    }
}

/// Screen (top-left origin, y down) to world (centered, y up).
pub fn screen_to_world(pos: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(pos.x - viewport.x * 0.5, viewport.y * 0.5 - pos.y)
}
