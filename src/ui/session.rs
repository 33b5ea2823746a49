//! Match state for the Gomoku GUI
//!
//! Wraps a [`Game`] and runs the AI on a worker thread so the UI stays
//! responsive. The worker takes the game and hands it back after selecting,
//! which keeps the engine's RNG advancing between turns.

use crate::{
    AIEngine, AiTier, EngineConfig, EngineError, Game, GameMode, MoveResult, PlayerId, Pos, Seat,
    Seats, Snapshot, Stone, DEFAULT_BOARD_SIZE,
};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Local player ids; in hotseat play each color gets its own
const HUMAN: PlayerId = PlayerId(1);
const SECOND_HUMAN: PlayerId = PlayerId(2);

/// Who sits where in a local match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Player vs AI
    VsAi { human_color: Stone },
    /// Player vs Player (hotseat)
    Hotseat,
}

impl Default for SessionMode {
    fn default() -> Self {
        SessionMode::VsAi { human_color: Stone::Black }
    }
}

impl SessionMode {
    fn seats(self) -> (GameMode, Seats) {
        match self {
            SessionMode::VsAi { human_color: Stone::White } => (
                GameMode::VsAi,
                Seats { black: Seat::Ai, white: Seat::Player(HUMAN) },
            ),
            SessionMode::VsAi { .. } => (
                GameMode::VsAi,
                Seats { black: Seat::Player(HUMAN), white: Seat::Ai },
            ),
            SessionMode::Hotseat => (
                GameMode::PvP,
                Seats { black: Seat::Player(HUMAN), white: Seat::Player(SECOND_HUMAN) },
            ),
        }
    }
}

/// The worker sends back its copy of the game with the chosen move
type AiReply = (Game, Result<MoveResult, EngineError>);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// Turn clock for the side panel
pub struct MoveTimer {
    pub start_time: Instant,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn restart(&mut self) {
        self.start_time = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Main match state
pub struct Session {
    /// `None` only while the worker holds the game
    game: Option<Game>,
    /// Cached for drawing while the worker holds the game
    snapshot: Snapshot,
    pub mode: SessionMode,
    pub size: usize,
    pub tier: AiTier,
    config: EngineConfig,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl Session {
    pub fn new(mode: SessionMode, size: usize, tier: AiTier, config: EngineConfig) -> Self {
        let game = Self::fresh_game(mode, size, tier, &config);
        Self {
            snapshot: game.snapshot(),
            size: game.size(),
            game: Some(game),
            mode,
            tier,
            config,
            ai_state: AiState::Idle,
            last_ai_result: None,
            move_timer: MoveTimer::default(),
            message: None,
        }
    }

    fn fresh_game(mode: SessionMode, size: usize, tier: AiTier, config: &EngineConfig) -> Game {
        let (game_mode, seats) = mode.seats();
        match Game::create(size, game_mode, seats, Some(tier)) {
            Ok(game) => game.with_engine(AIEngine::with_config(config.clone(), tier)),
            Err(e) => {
                log::warn!("cannot start a {size}x{size} game ({e}), using {DEFAULT_BOARD_SIZE}");
                Self::fresh_game(mode, DEFAULT_BOARD_SIZE, tier, config)
            }
        }
    }

    /// Start over with the current mode, size and tier
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.size, self.tier, self.config.clone());
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn status(&self) -> String {
        match &self.game {
            Some(game) => game.status(),
            None => format!("turn: {}", self.snapshot.turn),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.snapshot.finished
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    fn is_ai_turn(&self) -> bool {
        self.game.as_ref().is_some_and(Game::is_ai_turn)
    }

    /// Local player to move, if a human holds the turn
    fn player_to_move(&self) -> Option<PlayerId> {
        match self.game.as_ref()?.current_seat()? {
            Seat::Player(id) => Some(id),
            Seat::Ai => None,
        }
    }

    /// Whether a click at `pos` would be accepted
    pub fn is_legal_for_mover(&self, pos: Pos) -> bool {
        let Some(game) = &self.game else {
            return false;
        };
        if self.player_to_move().is_none() {
            return false;
        }
        let mut board = game.board().clone();
        crate::rules::is_legal(&mut board, pos, game.turn())
    }

    /// Attempt to place a stone for the local player to move
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        let user = self.player_to_move().ok_or("Not your turn")?;
        let game = self.game.as_mut().ok_or("AI is thinking")?;

        let (x, y) = pos.xy();
        let placed = game.place(x + 1, y + 1, user).map_err(|e| e.to_string())?;
        log::debug!("{} at {:?}: {}", placed.side, pos.xy(), placed.message());

        self.after_move();
        Ok(())
    }

    /// The local player to move gives up
    pub fn resign(&mut self) {
        let Some(user) = self.player_to_move() else {
            return;
        };
        let err = self.game.as_mut().and_then(|game| game.resign(user).err());
        self.after_move();
        self.message = err.map(|e| e.to_string());
    }

    fn after_move(&mut self) {
        if let Some(game) = &self.game {
            self.snapshot = game.snapshot();
        }
        self.message = None;
        self.move_timer.restart();
    }

    /// Hand the game to a worker if the AI is to move
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Some(mut game) = self.game.take() else {
            return;
        };

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = game.ai_select_move_with_stats();
            let _ = tx.send((game, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and commit its move
    pub fn check_ai_result(&mut self) {
        let reply = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(reply) => Some((reply, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    log::warn!("AI worker exited without a reply, starting a new game");
                    self.reset();
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some(((mut game, result), elapsed)) = reply else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.move_timer.ai_thinking_time = Some(elapsed);

        match result {
            Ok(stats) => {
                let (x, y) = stats.best_move.xy();
                let side = game.turn();
                if let Err(e) = game.apply_raw(x, y, side) {
                    self.message = Some(e.to_string());
                }
                self.last_ai_result = Some(stats);
            }
            Err(e) => self.message = Some(e.to_string()),
        }

        self.game = Some(game);
        let message = self.message.take();
        self.after_move();
        self.message = message;
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
