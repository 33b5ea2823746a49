//! Gomoku with Renju restrictions and a tiered AI opponent
//!
//! - Square boards from 5x5 to 19x19, Black moves first
//! - Black wins only with exactly five; overline, double-four and
//!   double-three are forbidden for Black
//! - White wins with five or more and has no restrictions
//! - A full board without a winner is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation and scratch-move guard
//! - [`rules`]: Win detection, forbidden patterns and move validation
//! - [`eval`]: Per-move and per-position heuristics
//! - [`search`]: Candidate generation, tactical shortcuts and negamax
//! - [`engine`]: Tier pipeline choosing the AI's move
//! - [`game`]: Turn state and the per-match API
//! - [`config`]: Tier settings, loadable from TOML
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, AiTier, Board, Pos, Stone};
//!
//! let mut board = Board::new(15);
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut engine = AIEngine::seeded(AiTier::Normal, 42);
//! let result = engine.select_move(&mut board, Stone::White).unwrap();
//! board.place_stone(result.best_move, Stone::White);
//! ```
//!
//! # Move Priority
//!
//! 1. Immediate win
//! 2. Block the opponent's immediate win
//! 3. Block an opponent fork (normal and hard)
//! 4. Create a fork (hard)
//! 5. Negamax search (hard)
//! 6. Random pick among the best-scored candidates
//! 7. Centre or first legal cell

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::{AiTier, EngineConfig, TierConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, EngineError, MoveError};
pub use game::{Game, GameMode, Outcome, Placed, PlayerId, Seat, Seats, Snapshot};
