//! Fixed-depth negamax with alpha-beta pruning
//!
//! The search sits at the bottom of the tier pipeline, after every one-move
//! shortcut has been tried. Each ply enumerates candidates for the side to
//! move, plays them through [`Board::trial`], and negates the opponent's best
//! reply. The trial guard removes the stone on every exit, including cutoffs.
//!
//! Values are always taken from the side to move:
//! - a move that completes a win scores `WIN_SCORE`
//! - a node with no candidates (full board) scores 0
//! - a leaf scores [`score_position`] for the side to move
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(9);
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//!
//! let mut searcher = Searcher::new(2, 12);
//! let roots = vec![Pos::new(3, 3), Pos::new(4, 5)];
//! let result = searcher.search(&mut board, Stone::White, 2, &roots);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::score_position;
use crate::rules::is_winning_run;

use super::candidates::generate_candidates;

/// Value of a won position for the side that just won
pub const WIN_SCORE: i64 = 1_000_000_000;

/// Bound for alpha-beta windows; above any reachable value
const INF: i64 = 4 * WIN_SCORE;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any (first of `tied` in enumeration order)
    pub best_move: Option<Pos>,
    /// Negamax value of the best move for the searching side
    pub score: i64,
    /// Every root move sharing the best value, in enumeration order
    pub tied: Vec<Pos>,
    /// Total nodes searched
    pub nodes: u64,
}

/// Depth-bounded negamax searcher.
///
/// Inner nodes generate their own candidates with the same radius and limit
/// as the root.
pub struct Searcher {
    radius: u8,
    candidate_limit: usize,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(radius: u8, candidate_limit: usize) -> Self {
        Self {
            radius,
            candidate_limit,
            nodes: 0,
        }
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score every root move to `depth` plies and keep the best.
    ///
    /// Each root is searched with a window opening one point below the best
    /// value so far. Worse roots are cut off early while roots that equal the
    /// best still get exact values, which lets the caller break ties among
    /// `tied`. A root that wins on the spot is returned immediately.
    pub fn search(&mut self, board: &mut Board, side: Stone, depth: u8, roots: &[Pos]) -> SearchResult {
        self.nodes = 0;
        let depth = depth.max(1);

        let mut best_score = -INF;
        let mut tied: Vec<Pos> = Vec::new();

        for &mv in roots {
            self.nodes += 1;
            let mut trial = board.trial(mv, side);
            if is_winning_run(&trial, mv, side) {
                return SearchResult {
                    best_move: Some(mv),
                    score: WIN_SCORE,
                    tied: vec![mv],
                    nodes: self.nodes,
                };
            }
            let alpha = if best_score == -INF { -INF } else { best_score - 1 };
            let score = -self.negamax(&mut trial, side.opponent(), depth - 1, -INF, -alpha);
            drop(trial);

            if score > best_score {
                best_score = score;
                tied.clear();
                tied.push(mv);
            } else if score == best_score {
                tied.push(mv);
            }
        }

        SearchResult {
            best_move: tied.first().copied(),
            score: best_score,
            tied,
            nodes: self.nodes,
        }
    }

    /// Negamax value of the position for `to_move`
    fn negamax(&mut self, board: &mut Board, to_move: Stone, depth: u8, mut alpha: i64, beta: i64) -> i64 {
        if depth == 0 {
            return score_position(board, to_move);
        }

        let moves = generate_candidates(board, to_move, self.radius, self.candidate_limit, &[]);
        if moves.is_empty() {
            return 0;
        }

        let mut best = -INF;
        for mv in moves {
            self.nodes += 1;
            let mut trial = board.trial(mv, to_move);
            let score = if is_winning_run(&trial, mv, to_move) {
                WIN_SCORE
            } else {
                -self.negamax(&mut trial, to_move.opponent(), depth - 1, -beta, -alpha)
            };
            drop(trial);

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }

        best
    }
}
