//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation bounded by radius and count
//! - One-move tactical shortcuts (win, block, forks)
//! - Fixed-depth negamax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher, WIN_SCORE};
pub use candidates::{generate_candidates, neighborhood};
pub use threat::{
    count_immediate_wins, find_double_three_moves, find_fork_block, find_fork_create, find_fork_moves,
    find_immediate_block, find_immediate_win, is_fork_move, winning_cells,
};
