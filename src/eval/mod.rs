//! Static evaluation
//!
//! Contains:
//! - Per-side line pattern tables
//! - Candidate move scoring and whole-position scoring for search leaves

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_bonus, score_move, score_position};
pub use patterns::{line_score, PatternScore};
