//! Edge grid: drawn/undrawn edges and box ownership stored as flat arrays.
//!
//! `rows`/`cols` count boxes, so the board has `(rows + 1) * (cols + 1)` dots.
//! Horizontal edges form `rows + 1` lines of `cols` segments; vertical edges form
//! `rows` lines of `cols + 1` segments. Edges are only ever set, never cleared.

/// Which way an edge runs between two adjacent dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A single edge. `row`/`col` address the edge within its orientation's array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Edge {
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self { orientation: Orientation::Horizontal, row, col }
    }

    pub const fn vertical(row: usize, col: usize) -> Self {
        Self { orientation: Orientation::Vertical, row, col }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "{}({},{})", tag, self.row, self.col)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    h_edges: Vec<bool>,
    v_edges: Vec<bool>,
    owners: Vec<Option<usize>>,
}

impl Grid {
    /// Empty grid of `rows x cols` boxes. Dimensions below 1 are raised to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            h_edges: vec![false; (rows + 1) * cols],
            v_edges: vec![false; rows * (cols + 1)],
            owners: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn box_count(&self) -> usize { self.rows * self.cols }

    /// Total number of edges on the board.
    pub fn edge_count(&self) -> usize {
        self.h_edges.len() + self.v_edges.len()
    }

    pub fn remaining_edges(&self) -> usize {
        self.h_edges.iter().chain(self.v_edges.iter()).filter(|drawn| !**drawn).count()
    }

    // ------------------------------------------------------------------------
    // Index arithmetic
    // ------------------------------------------------------------------------

    fn index_h(&self, r: usize, c: usize) -> Option<usize> {
        (r <= self.rows && c < self.cols).then(|| r * self.cols + c)
    }

    fn index_v(&self, r: usize, c: usize) -> Option<usize> {
        (r < self.rows && c <= self.cols).then(|| r * (self.cols + 1) + c)
    }

    fn index_box(&self, r: usize, c: usize) -> Option<usize> {
        (r < self.rows && c < self.cols).then(|| r * self.cols + c)
    }

    // ------------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------------

    /// Draw horizontal edge (r, c). False if already drawn or off the board.
    pub fn set_horizontal(&mut self, r: usize, c: usize) -> bool {
        let Some(idx) = self.index_h(r, c) else { return false };
        if self.h_edges[idx] { return false; }
        self.h_edges[idx] = true;
        true
    }

    /// Draw vertical edge (r, c). False if already drawn or off the board.
    pub fn set_vertical(&mut self, r: usize, c: usize) -> bool {
        let Some(idx) = self.index_v(r, c) else { return false };
        if self.v_edges[idx] { return false; }
        self.v_edges[idx] = true;
        true
    }

    pub fn set(&mut self, edge: Edge) -> bool {
        match edge.orientation {
            Orientation::Horizontal => self.set_horizontal(edge.row, edge.col),
            Orientation::Vertical => self.set_vertical(edge.row, edge.col),
        }
    }

    pub fn horizontal(&self, r: usize, c: usize) -> bool {
        self.index_h(r, c).is_some_and(|i| self.h_edges[i])
    }

    pub fn vertical(&self, r: usize, c: usize) -> bool {
        self.index_v(r, c).is_some_and(|i| self.v_edges[i])
    }

    pub fn is_drawn(&self, edge: Edge) -> bool {
        match edge.orientation {
            Orientation::Horizontal => self.horizontal(edge.row, edge.col),
            Orientation::Vertical => self.vertical(edge.row, edge.col),
        }
    }

    /// True if `edge` addresses a real edge on this board.
    pub fn contains(&self, edge: Edge) -> bool {
        match edge.orientation {
            Orientation::Horizontal => self.index_h(edge.row, edge.col).is_some(),
            Orientation::Vertical => self.index_v(edge.row, edge.col).is_some(),
        }
    }

    /// Every edge on the board: horizontal before vertical, row-major within each.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let (rows, cols) = (self.rows, self.cols);
        let horizontal = (0..=rows).flat_map(move |r| (0..cols).map(move |c| Edge::horizontal(r, c)));
        let vertical = (0..rows).flat_map(move |r| (0..=cols).map(move |c| Edge::vertical(r, c)));
        horizontal.chain(vertical)
    }

    /// Every undrawn edge, in `edges()` order.
    pub fn undrawn_edges(&self) -> Vec<Edge> {
        self.edges().filter(|&edge| !self.is_drawn(edge)).collect()
    }

    // ------------------------------------------------------------------------
    // Boxes
    // ------------------------------------------------------------------------

    /// All four sides of box (r, c) drawn. False for out-of-range boxes.
    pub fn is_box_complete(&self, r: usize, c: usize) -> bool {
        if self.index_box(r, c).is_none() { return false; }
        self.horizontal(r, c)
            && self.horizontal(r + 1, c)
            && self.vertical(r, c)
            && self.vertical(r, c + 1)
    }

    /// Number of drawn sides of box (r, c), 0 for out-of-range boxes.
    pub fn sides_drawn(&self, r: usize, c: usize) -> usize {
        if self.index_box(r, c).is_none() { return 0; }
        [
            self.horizontal(r, c),
            self.horizontal(r + 1, c),
            self.vertical(r, c),
            self.vertical(r, c + 1),
        ]
        .iter()
        .filter(|s| **s)
        .count()
    }

    pub fn owner(&self, r: usize, c: usize) -> Option<usize> {
        self.index_box(r, c).and_then(|i| self.owners[i])
    }

    /// Assign an owner to an unclaimed box. Claimed boxes keep their owner.
    pub(crate) fn assign_owner(&mut self, r: usize, c: usize, player: usize) -> bool {
        let Some(idx) = self.index_box(r, c) else { return false };
        if self.owners[idx].is_some() { return false; }
        self.owners[idx] = Some(player);
        true
    }

    pub fn claimed_count(&self) -> usize {
        self.owners.iter().filter(|o| o.is_some()).count()
    }

    /// Boxes owned by `player`.
    pub fn boxes_owned_by(&self, player: usize) -> usize {
        self.owners.iter().filter(|o| **o == Some(player)).count()
    }

    /// Every box has an owner.
    pub fn is_full(&self) -> bool {
        self.owners.iter().all(Option::is_some)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_ROWS, crate::constants::DEFAULT_COLS)
    }
}
