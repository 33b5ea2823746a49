//! Game rules for Gomoku with Renju restrictions on Black
//!
//! This module implements the rule set:
//! - Win conditions (exact five for Black, five or more for White)
//! - Forbidden moves for Black (overline, double-four, double-three)
//! - Move classification used by the game controller and the AI

pub mod forbidden;
pub mod validate;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{count_open_threes, is_double_four, is_double_three};
pub use validate::{classify_placement, is_legal, legal_moves, Placement};
pub use win::{
    creates_overline, find_winning_line, has_exact_five, has_five_or_more, is_winning_run,
    wins_if_placed,
};
