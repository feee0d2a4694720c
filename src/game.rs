//! Turn and player model: two seats, the extra-turn rule, and win/tie detection.

use bevy::prelude::Resource;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::constants::PLAYER_COLORS;
use crate::grid::{Edge, Grid};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsAi,
    AiVsAi,
    /// One person at the keyboard drawing for both seats.
    Solo,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::HumanVsHuman,
        GameMode::HumanVsAi,
        GameMode::AiVsAi,
        GameMode::Solo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::HumanVsHuman => "Human vs Human",
            Self::HumanVsAi => "Human vs AI",
            Self::AiVsAi => "AI vs AI",
            Self::Solo => "Solo",
        }
    }

    /// Controllers for seat 0 and seat 1. `difficulty[i]` applies when seat i is AI.
    pub fn controllers(self, difficulty: [Difficulty; 2]) -> [Controller; 2] {
        match self {
            Self::HumanVsHuman | Self::Solo => [Controller::Human, Controller::Human],
            Self::HumanVsAi => [Controller::Human, Controller::Ai(difficulty[1])],
            Self::AiVsAi => [Controller::Ai(difficulty[0]), Controller::Ai(difficulty[1])],
        }
    }

    /// Whether seat `seat` is AI-controlled in this mode.
    pub fn seat_is_ai(self, seat: usize) -> bool {
        self.controllers([Difficulty::default(); 2])[seat].is_ai()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai(Difficulty),
}

impl Controller {
    pub fn is_ai(self) -> bool { matches!(self, Self::Ai(_)) }

    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            Self::Ai(d) => Some(d),
            Self::Human => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Human => "Human".into(),
            Self::Ai(d) => format!("AI ({})", d.label()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: usize,
    pub color: (f32, f32, f32),
    pub score: usize,
    pub controller: Controller,
}

impl Player {
    pub fn new(id: usize, controller: Controller) -> Self {
        Self {
            id,
            color: PLAYER_COLORS[id % PLAYER_COLORS.len()],
            score: 0,
            controller,
        }
    }

    pub fn is_ai(&self) -> bool { self.controller.is_ai() }

    pub fn label(&self) -> String { format!("Player {}", self.id + 1) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Player(usize),
    Tie,
}

/// Seat with the strictly higher score, or a tie.
pub fn winner(scores: [usize; 2]) -> Winner {
    use std::cmp::Ordering;
    match scores[0].cmp(&scores[1]) {
        Ordering::Greater => Winner::Player(0),
        Ordering::Less => Winner::Player(1),
        Ordering::Equal => Winner::Tie,
    }
}

/// The turn passes only when a move claims nothing.
pub fn should_switch(claimed: usize) -> bool {
    claimed == 0
}

/// What one committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub edge: Edge,
    pub player: usize,
    pub claimed: usize,
    /// Turn passed to the other seat.
    pub switched: bool,
    pub game_over: bool,
}

/// One match: the board, both seats, and whose turn it is.
#[derive(Resource, Clone, Debug)]
pub struct Game {
    pub mode: GameMode,
    pub grid: Grid,
    pub players: [Player; 2],
    pub current_player: usize,
    /// The player on turn claimed a box with their last move.
    pub extra_turn: bool,
    pub last_move: Option<MoveOutcome>,
    pub moves_played: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(
            GameMode::default(),
            crate::constants::DEFAULT_ROWS,
            crate::constants::DEFAULT_COLS,
            [Difficulty::default(); 2],
        )
    }
}

impl Game {
    pub fn new(mode: GameMode, rows: usize, cols: usize, difficulty: [Difficulty; 2]) -> Self {
        let [c0, c1] = mode.controllers(difficulty);
        Self {
            mode,
            grid: Grid::new(rows, cols),
            players: [Player::new(0, c0), Player::new(1, c1)],
            current_player: 0,
            extra_turn: false,
            last_move: None,
            moves_played: 0,
        }
    }

    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn scores(&self) -> [usize; 2] {
        [self.players[0].score, self.players[1].score]
    }

    pub fn switch_player(&mut self) {
        self.current_player = 1 - self.current_player;
    }

    /// Every box has an owner.
    pub fn is_over(&self) -> bool {
        self.grid.is_full()
    }

    pub fn winner(&self) -> Winner {
        winner(self.scores())
    }

    /// Draw `edge` for the player on turn, award completed boxes and apply the
    /// turn rule. None (nothing changes) if the edge is taken or off the board,
    /// or the game is already over.
    pub fn apply_move(&mut self, edge: Edge) -> Option<MoveOutcome> {
        if self.is_over() { return None; }

        let player = self.current_player;
        let claimed = self.grid.draw_and_claim(edge, player)?;
        self.players[player].score += claimed;
        self.moves_played += 1;

        let switched = should_switch(claimed);
        if switched {
            self.switch_player();
        }
        self.extra_turn = !switched;

        let game_over = self.is_over();
        tracing::debug!(
            "move {}: {} draws {} claiming {}{}",
            self.moves_played,
            self.players[player].label(),
            edge,
            claimed,
            if game_over { " (game over)" } else { "" }
        );
        let outcome = MoveOutcome { edge, player, claimed, switched, game_over };
        self.last_move = Some(outcome);
        Some(outcome)
    }

    /// Let the AI seat on turn pick and commit one move.
    /// None for a human seat or a finished game.
    pub fn play_ai_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<MoveOutcome> {
        if self.is_over() { return None; }
        let difficulty = self.current().controller.difficulty()?;
        let edge = crate::ai::select_move(&self.grid, self.current_player, difficulty, rng)?;
        self.apply_move(edge)
    }
}
