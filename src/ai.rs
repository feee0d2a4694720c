//! AI move selection: four difficulty tiers over the edge grid.
//!
//! Every tier simulates on value copies of the grid and only returns the chosen
//! edge; committing it (and claiming boxes) is the caller's job.
//!
//! Hard is a fixed 2-ply search (the move plus one reply) over box differential.
//! It does not search to terminal positions and has no pruning, so it still
//! walks into long chains that a real minimax would avoid.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::constants::HARD_SEARCH_DEPTH;
use crate::grid::{Edge, Grid};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Random,
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Random,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Random => "Draws any free edge.",
            Self::Easy => "Takes a box whenever it can.",
            Self::Medium => "Takes boxes and avoids handing them over.",
            Self::Hard => "Looks one reply ahead.",
        }
    }
}

/// Pick one undrawn edge for `player`. None only when every edge is drawn.
pub fn select_move<R: Rng + ?Sized>(
    grid: &Grid,
    player: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Edge> {
    let choice = match difficulty {
        Difficulty::Random => random_move(grid, rng),
        Difficulty::Easy => easy_move(grid, player, rng),
        Difficulty::Medium => medium_move(grid, player),
        Difficulty::Hard => hard_move(grid, player),
    };
    if let Some(edge) = choice {
        tracing::debug!("ai: player {} ({}) picks {}", player, difficulty.label(), edge);
    }
    choice
}

/// Uniform over all undrawn edges, horizontal and vertical pooled.
pub fn random_move<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Edge> {
    grid.undrawn_edges().choose(rng).copied()
}

/// First edge completing the most boxes; random if none completes any.
pub fn easy_move<R: Rng + ?Sized>(grid: &Grid, player: usize, rng: &mut R) -> Option<Edge> {
    let mut best: Option<(Edge, usize)> = None;
    for edge in grid.undrawn_edges() {
        let mut scratch = grid.clone();
        let claimed = scratch.draw_and_claim(edge, player).unwrap_or(0);
        if claimed > 0 && best.is_none_or(|(_, most)| claimed > most) {
            best = Some((edge, claimed));
        }
    }
    match best {
        Some((edge, _)) => Some(edge),
        None => random_move(grid, rng),
    }
}

/// Score = 2 * own claims + 1 if the opponent gets no box-completing reply.
/// Ties go to the first edge in enumeration order.
pub fn medium_move(grid: &Grid, player: usize) -> Option<Edge> {
    let mut best: Option<(Edge, usize)> = None;
    for edge in grid.undrawn_edges() {
        let mut scratch = grid.clone();
        let own = scratch.draw_and_claim(edge, player).unwrap_or(0);
        let safe = !has_capturable_box(&scratch);
        let score = 2 * own + safe as usize;
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((edge, score));
        }
    }
    best.map(|(edge, _)| edge)
}

/// Best box differential for `player` over `HARD_SEARCH_DEPTH` plies.
pub fn hard_move(grid: &Grid, player: usize) -> Option<Edge> {
    let mut best: Option<(Edge, i32)> = None;
    for edge in grid.undrawn_edges() {
        let value = evaluate(grid, edge, player, player, HARD_SEARCH_DEPTH);
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((edge, value));
        }
    }
    best.map(|(edge, _)| edge)
}

/// Value to `root` of `mover` drawing `edge`, searching `depth` plies including it.
/// Whoever moves next (the same player after a claim, else the opponent) replies
/// with their best move under the same measure.
fn evaluate(grid: &Grid, edge: Edge, mover: usize, root: usize, depth: usize) -> i32 {
    let mut scratch = grid.clone();
    let gained = scratch.draw_and_claim(edge, mover).unwrap_or(0) as i32;
    let signed = if mover == root { gained } else { -gained };
    if depth <= 1 || scratch.is_full() {
        return signed;
    }

    let next = if gained > 0 { mover } else { 1 - mover };
    let replies = scratch
        .undrawn_edges()
        .into_iter()
        .map(|reply| evaluate(&scratch, reply, next, root, depth - 1));
    let reply_value = if next == root { replies.max() } else { replies.min() };
    signed + reply_value.unwrap_or(0)
}

/// Some unclaimed box has exactly one side left.
pub fn has_capturable_box(grid: &Grid) -> bool {
    (0..grid.rows()).any(|r| {
        (0..grid.cols()).any(|c| grid.owner(r, c).is_none() && grid.sides_drawn(r, c) == 3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fill_except(grid: &mut Grid, keep: &[Edge]) {
        for edge in grid.undrawn_edges() {
            if !keep.contains(&edge) {
                grid.set(edge);
            }
        }
    }

    /// 3x3 board where box (1,1) has three sides and nothing else is close.
    fn one_capture_board() -> Grid {
        let mut g = Grid::new(3, 3);
        g.set_horizontal(1, 1);
        g.set_horizontal(2, 1);
        g.set_vertical(1, 1);
        g
    }

    #[test]
    fn random_takes_the_only_edge_left() {
        let last = Edge::vertical(1, 2);
        for seed in 0..32 {
            let mut g = Grid::new(2, 2);
            fill_except(&mut g, &[last]);
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(random_move(&g, &mut rng), Some(last));
        }
    }

    #[test]
    fn every_tier_returns_none_on_a_full_grid() {
        let mut g = Grid::new(2, 2);
        fill_except(&mut g, &[]);
        let mut rng = StdRng::seed_from_u64(7);
        for d in Difficulty::ALL {
            assert_eq!(select_move(&g, 0, d, &mut rng), None, "{:?}", d);
        }
    }

    #[test]
    fn every_tier_returns_an_undrawn_edge() {
        let g = one_capture_board();
        let mut rng = StdRng::seed_from_u64(11);
        for d in Difficulty::ALL {
            let edge = select_move(&g, 1, d, &mut rng).expect("move available");
            assert!(g.contains(edge));
            assert!(!g.is_drawn(edge), "{:?} chose drawn edge {}", d, edge);
        }
    }

    #[test]
    fn selection_leaves_the_live_grid_untouched() {
        let g = one_capture_board();
        let before = g.clone();
        let mut rng = StdRng::seed_from_u64(3);
        for d in Difficulty::ALL {
            let _ = select_move(&g, 0, d, &mut rng);
        }
        assert_eq!(g, before);
    }

    #[test]
    fn easy_takes_the_only_completing_move() {
        let g = one_capture_board();
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(easy_move(&g, 0, &mut rng), Some(Edge::vertical(1, 2)));
        }
    }

    #[test]
    fn easy_prefers_a_double_claim() {
        // Box (0,0) needs H(0,0) alone; boxes (1,0) and (1,1) share V(1,1).
        let mut g = Grid::new(2, 2);
        g.set_horizontal(1, 0);
        g.set_vertical(0, 0);
        g.set_vertical(0, 1);
        g.set_horizontal(2, 0);
        g.set_horizontal(2, 1);
        g.set_vertical(1, 0);
        g.set_vertical(1, 2);
        g.set_horizontal(1, 1);
        assert_eq!(g.boxes_completed_by(Edge::horizontal(0, 0)), 1);
        assert_eq!(g.boxes_completed_by(Edge::vertical(1, 1)), 2);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(easy_move(&g, 1, &mut rng), Some(Edge::vertical(1, 1)));
    }

    #[test]
    fn medium_claims_before_playing_safe() {
        let g = one_capture_board();
        assert_eq!(medium_move(&g, 0), Some(Edge::vertical(1, 2)));
    }

    #[test]
    fn medium_avoids_handing_over_a_box() {
        // Box (0,0) has two sides; H(1,0) or V(0,1) would give it a third.
        let mut g = Grid::new(1, 2);
        g.set_horizontal(0, 0);
        g.set_vertical(0, 0);
        let edge = medium_move(&g, 0).expect("move available");
        let mut after = g.clone();
        after.draw_and_claim(edge, 0);
        assert!(!has_capturable_box(&after), "medium chose unsafe {}", edge);
        assert_eq!(edge, Edge::horizontal(0, 1));
    }

    #[test]
    fn medium_falls_back_to_first_edge_when_nothing_is_safe() {
        // 1x1 with two sides: every remaining edge leaves a capturable box.
        let mut g = Grid::new(1, 1);
        g.set_horizontal(0, 0);
        g.set_vertical(0, 0);
        assert_eq!(medium_move(&g, 1), Some(Edge::horizontal(1, 0)));
    }

    #[test]
    fn hard_takes_a_free_box() {
        let g = one_capture_board();
        assert_eq!(hard_move(&g, 1), Some(Edge::vertical(1, 2)));
    }

    #[test]
    fn hard_does_not_give_the_opponent_a_box() {
        let mut g = Grid::new(1, 2);
        g.set_horizontal(0, 0);
        g.set_vertical(0, 0);
        let edge = hard_move(&g, 0).expect("move available");
        let mut after = g.clone();
        after.draw_and_claim(edge, 0);
        assert!(!has_capturable_box(&after), "hard chose unsafe {}", edge);
    }

    #[test]
    fn hard_is_deterministic() {
        let g = one_capture_board();
        assert_eq!(hard_move(&g, 0), hard_move(&g, 0));
    }

    #[test]
    fn capturable_box_detection() {
        let mut g = Grid::new(1, 1);
        assert!(!has_capturable_box(&g));
        g.set_horizontal(0, 0);
        g.set_horizontal(1, 0);
        g.set_vertical(0, 0);
        assert!(has_capturable_box(&g));
        g.draw_and_claim(Edge::vertical(0, 1), 0);
        assert!(!has_capturable_box(&g));
    }
}
