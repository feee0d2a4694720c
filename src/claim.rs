//! Box claiming: after an edge is drawn, award the flanking boxes it completed.

use crate::grid::{Edge, Grid, Orientation};

impl Grid {
    /// Claim boxes above and below horizontal edge (edge_row, edge_col).
    /// Returns how many boxes went to `player` (0, 1 or 2).
    pub fn claim_after_horizontal(&mut self, edge_row: usize, edge_col: usize, player: usize) -> usize {
        let mut claimed = 0;
        if edge_row > 0 {
            claimed += self.claim_if_complete(edge_row - 1, edge_col, player) as usize;
        }
        if edge_row < self.rows() {
            claimed += self.claim_if_complete(edge_row, edge_col, player) as usize;
        }
        claimed
    }

    /// Claim boxes left and right of vertical edge (edge_row, edge_col).
    pub fn claim_after_vertical(&mut self, edge_row: usize, edge_col: usize, player: usize) -> usize {
        let mut claimed = 0;
        if edge_col > 0 {
            claimed += self.claim_if_complete(edge_row, edge_col - 1, player) as usize;
        }
        if edge_col < self.cols() {
            claimed += self.claim_if_complete(edge_row, edge_col, player) as usize;
        }
        claimed
    }

    pub fn claim_after(&mut self, edge: Edge, player: usize) -> usize {
        match edge.orientation {
            Orientation::Horizontal => self.claim_after_horizontal(edge.row, edge.col, player),
            Orientation::Vertical => self.claim_after_vertical(edge.row, edge.col, player),
        }
    }

    /// Draw `edge` and claim whatever it completes.
    /// None if the edge was already drawn (nothing changes).
    pub fn draw_and_claim(&mut self, edge: Edge, player: usize) -> Option<usize> {
        if !self.set(edge) { return None; }
        Some(self.claim_after(edge, player))
    }

    /// How many unclaimed boxes drawing `edge` would complete. Does not mutate.
    pub fn boxes_completed_by(&self, edge: Edge) -> usize {
        if self.is_drawn(edge) || !self.contains(edge) { return 0; }
        self.flanking_boxes(edge)
            .into_iter()
            .flatten()
            .filter(|&(r, c)| self.owner(r, c).is_none() && self.sides_drawn(r, c) == 3)
            .count()
    }

    /// The (up to two) boxes sharing `edge`.
    pub fn flanking_boxes(&self, edge: Edge) -> [Option<(usize, usize)>; 2] {
        match edge.orientation {
            Orientation::Horizontal => [
                (edge.row > 0).then(|| (edge.row - 1, edge.col)),
                (edge.row < self.rows()).then_some((edge.row, edge.col)),
            ],
            Orientation::Vertical => [
                (edge.col > 0).then(|| (edge.row, edge.col - 1)),
                (edge.col < self.cols()).then_some((edge.row, edge.col)),
            ],
        }
    }

    fn claim_if_complete(&mut self, r: usize, c: usize, player: usize) -> bool {
        self.owner(r, c).is_none() && self.is_box_complete(r, c) && self.assign_owner(r, c, player)
    }
}
