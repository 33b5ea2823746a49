//! Game controller: turn state, seats and the public per-match API
//!
//! A [`Game`] owns its board and AI engine. Player input arrives 1-indexed
//! through [`Game::place`] and is fully validated; AI moves are chosen with
//! [`Game::ai_select_move`] and committed with [`Game::apply_raw`], or both at
//! once with [`Game::play_ai_turn`].
//!
//! # Example
//!
//! ```
//! use gomoku::{AiTier, Game, GameMode, Outcome, PlayerId, Seat, Seats};
//!
//! let alice = PlayerId(1);
//! let seats = Seats { black: Seat::Player(alice), white: Seat::Ai };
//! let mut game = Game::create(9, GameMode::VsAi, seats, Some(AiTier::Easy)).unwrap();
//!
//! let placed = game.place(5, 5, alice).unwrap();
//! assert_eq!(placed.outcome, Outcome::Continue);
//! assert!(game.is_ai_turn());
//!
//! game.play_ai_turn().unwrap();
//! assert_eq!(game.status(), "turn: Black");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::config::AiTier;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{EngineError, MoveError};
use crate::rules::{classify_placement, find_winning_line, is_winning_run, Placement};

/// Opaque handle of a human player, assigned by the integrating layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Who controls one color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    Player(PlayerId),
    Ai,
}

/// Seat assignment for both colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats {
    pub black: Seat,
    pub white: Seat,
}

impl Seats {
    pub fn seat(&self, side: Stone) -> Seat {
        match side {
            Stone::White => self.white,
            _ => self.black,
        }
    }

    /// Colors held by `user`
    fn sides_of(&self, user: PlayerId) -> impl Iterator<Item = Stone> + '_ {
        [Stone::Black, Stone::White]
            .into_iter()
            .filter(move |&s| self.seat(s) == Seat::Player(user))
    }

    fn ai_count(&self) -> usize {
        [self.black, self.white].iter().filter(|s| **s == Seat::Ai).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans
    PvP,
    /// One human against the engine
    VsAi,
}

/// Result of applying a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    Won(Stone),
    Draw,
}

/// An applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub pos: Pos,
    pub side: Stone,
    pub outcome: Outcome,
}

impl Placed {
    /// Short human-readable confirmation
    pub fn message(&self) -> String {
        match self.outcome {
            Outcome::Continue => "OK".to_string(),
            Outcome::Won(side) => format!("game over: {side} wins"),
            Outcome::Draw => "game over: draw".to_string(),
        }
    }
}

/// Read-only view of a game for rendering or shipping elsewhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: usize,
    /// Row-major cells
    pub cells: Vec<Stone>,
    pub last_move: Option<Pos>,
    pub turn: Stone,
    pub finished: bool,
    /// `None` with `finished` set means a draw
    pub winner: Option<Stone>,
    /// Cells of the winning run, ordered along the line
    pub winning_line: Option<Vec<Pos>>,
}

impl Snapshot {
    pub fn cell(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize * self.size + pos.col as usize]
    }
}

/// One match
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    mode: GameMode,
    seats: Seats,
    tier: AiTier,
    turn: Stone,
    finished: bool,
    winner: Option<Stone>,
    last_move: Option<Pos>,
    winning_line: Option<Vec<Pos>>,
    engine: AIEngine,
}

impl Game {
    /// Start a match on an empty `size` x `size` board with Black to move.
    ///
    /// `VsAi` needs exactly one AI seat and `PvP` none. A missing tier means
    /// easy.
    pub fn create(
        size: usize,
        mode: GameMode,
        seats: Seats,
        tier: Option<AiTier>,
    ) -> Result<Game, EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(EngineError::InvalidBoardSize(size));
        }
        match (mode, seats.ai_count()) {
            (GameMode::VsAi, 1) | (GameMode::PvP, 0) => {}
            (GameMode::VsAi, _) => {
                return Err(EngineError::InvalidSeats("an AI game needs exactly one AI seat"))
            }
            (GameMode::PvP, _) => {
                return Err(EngineError::InvalidSeats("a two-player game cannot seat the AI"))
            }
        }

        let tier = tier.unwrap_or_default();
        Ok(Game {
            board: Board::new(size),
            mode,
            seats,
            tier,
            turn: Stone::Black,
            finished: false,
            winner: None,
            last_move: None,
            winning_line: None,
            engine: AIEngine::new(tier),
        })
    }

    /// Replace the engine, e.g. with a seeded one for reproducible play.
    ///
    /// The engine is switched to this game's tier.
    #[must_use]
    pub fn with_engine(mut self, mut engine: AIEngine) -> Self {
        engine.set_tier(self.tier);
        self.engine = engine;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn seats(&self) -> Seats {
        self.seats
    }

    pub fn tier(&self) -> AiTier {
        self.tier
    }

    /// Side to move (the last mover once finished)
    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Seat to move, or `None` once the game is over
    pub fn current_seat(&self) -> Option<Seat> {
        (!self.finished).then(|| self.seats.seat(self.turn))
    }

    /// `user` holds the seat to move
    pub fn can_play(&self, user: PlayerId) -> bool {
        self.current_seat() == Some(Seat::Player(user))
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_seat() == Some(Seat::Ai)
    }

    /// Validate and apply a player's move at 1-indexed `(x1, y1)`.
    ///
    /// Checks run in a fixed order: finished, participant, turn, range,
    /// occupancy, then the rules for the mover's color. On error the game is
    /// unchanged.
    pub fn place(&mut self, x1: usize, y1: usize, user: PlayerId) -> Result<Placed, MoveError> {
        if self.finished {
            return Err(MoveError::GameFinished);
        }
        if self.seats.sides_of(user).next().is_none() {
            return Err(MoveError::NotAParticipant);
        }
        if !self.can_play(user) {
            return Err(MoveError::NotYourTurn);
        }

        let size = self.size();
        if !(1..=size).contains(&x1) || !(1..=size).contains(&y1) {
            return Err(MoveError::OutOfRange { size });
        }
        let pos = Pos::from_xy(x1 - 1, y1 - 1);

        let side = self.turn;
        let placement = classify_placement(&mut self.board, pos, side)?;
        let outcome = self.commit(pos, side, placement == Placement::Win);
        Ok(Placed { pos, side, outcome })
    }

    /// Choose the AI's move (0-indexed) without applying it.
    pub fn ai_select_move(&mut self) -> Result<Pos, EngineError> {
        self.ai_select_move_with_stats().map(|r| r.best_move)
    }

    /// Like [`Game::ai_select_move`] but with search statistics
    pub fn ai_select_move_with_stats(&mut self) -> Result<MoveResult, EngineError> {
        if !self.is_ai_turn() {
            return Err(EngineError::NotAiTurn);
        }
        self.engine.select_move(&mut self.board, self.turn)
    }

    /// Commit a move already known to be legal, at 0-indexed `(x0, y0)`.
    ///
    /// Forbidden patterns are not re-checked (debug builds assert legality).
    /// Structural misuse is rejected: a finished game, the wrong side, an
    /// off-board or occupied cell.
    pub fn apply_raw(&mut self, x0: usize, y0: usize, side: Stone) -> Result<Outcome, EngineError> {
        if self.finished {
            return Err(EngineError::RawMoveRejected { reason: "game already finished" });
        }
        if side != self.turn {
            return Err(EngineError::RawMoveRejected { reason: "not this side's turn" });
        }
        let size = self.size();
        if x0 >= size || y0 >= size {
            return Err(EngineError::RawMoveRejected { reason: "coordinate off the board" });
        }
        let pos = Pos::from_xy(x0, y0);
        if !self.board.is_empty(pos) {
            return Err(EngineError::RawMoveRejected { reason: "cell already occupied" });
        }
        debug_assert!(
            crate::rules::is_legal(&mut self.board, pos, side),
            "apply_raw with an illegal move {pos:?} for {side}"
        );

        let wins = is_winning_run(&self.board, pos, side);
        Ok(self.commit(pos, side, wins))
    }

    /// Select and commit the AI's move
    pub fn play_ai_turn(&mut self) -> Result<Placed, EngineError> {
        let pos = self.ai_select_move()?;
        let side = self.turn;
        let (x0, y0) = pos.xy();
        let outcome = self.apply_raw(x0, y0, side)?;
        Ok(Placed { pos, side, outcome })
    }

    /// `user` gives up; the other color wins.
    ///
    /// A user holding both seats resigns the side to move. Returns the winner.
    pub fn resign(&mut self, user: PlayerId) -> Result<Stone, MoveError> {
        if self.finished {
            return Err(MoveError::GameFinished);
        }
        let sides: Vec<Stone> = self.seats.sides_of(user).collect();
        let loser = match sides.as_slice() {
            [] => return Err(MoveError::NotAParticipant),
            [only] => *only,
            _ => self.turn,
        };

        let winner = loser.opponent();
        self.finished = true;
        self.winner = Some(winner);
        log::info!("{loser} ({user}) resigned, {winner} wins");
        Ok(winner)
    }

    /// `turn: Black`, `result: White wins`, `result: draw`, ...
    pub fn status(&self) -> String {
        match (self.finished, self.winner) {
            (false, _) => format!("turn: {}", self.turn),
            (true, Some(w)) => format!("result: {w} wins"),
            (true, None) => "result: draw".to_string(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size(),
            cells: self.board.cells(),
            last_move: self.last_move,
            turn: self.turn,
            finished: self.finished,
            winner: self.winner,
            winning_line: self.winning_line.clone(),
        }
    }

    /// Place the stone, then settle win, draw or the next turn
    fn commit(&mut self, pos: Pos, side: Stone, wins: bool) -> Outcome {
        self.board.place_stone(pos, side);
        self.last_move = Some(pos);

        if wins {
            self.finished = true;
            self.winner = Some(side);
            self.winning_line = find_winning_line(&self.board, pos, side);
            log::info!("{side} wins with {:?} after {} stones", pos.xy(), self.board.stone_count());
            return Outcome::Won(side);
        }
        if self.board.is_full() {
            self.finished = true;
            self.winner = None;
            log::info!("game drawn on a full {0}x{0} board", self.size());
            return Outcome::Draw;
        }

        self.turn = side.opponent();
        Outcome::Continue
    }
}
