//! One-move tactical shortcuts
//!
//! These run before any tree search:
//! - Immediate win: a legal cell that completes our winning run
//! - Immediate block: a cell where the opponent would win next move
//! - Forks: a move after which the mover has two or more immediate wins,
//!   which a single reply cannot stop
//! - Double threes: a move making two live open threes at once, blocked as a
//!   fork when no immediate-win fork exists
//!
//! Scans that are not ranked run in row-major order, so their answers are
//! deterministic.

use crate::board::{Board, Pos, Stone};
use crate::eval::score_move;
use crate::rules::{count_open_threes, is_legal, wins_if_placed};

use super::candidates::neighborhood;

/// Radius (Chebyshev) around stones searched for fork moves
pub const FORK_RADIUS: u8 = 3;

/// First cell, row-major, where `side` wins by playing.
///
/// `wins_if_placed` already implies legality: a restricted exact five without
/// overline is never forbidden.
pub fn find_immediate_win(board: &Board, side: Stone) -> Option<Pos> {
    board.empty_cells().find(|&p| wins_if_placed(board, p, side))
}

/// Every cell where `side` wins by playing, row-major
pub fn winning_cells(board: &Board, side: Stone) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&p| wins_if_placed(board, p, side))
        .collect()
}

/// First cell, row-major, where the opponent of `side` would win next move
/// and `side` may legally play.
pub fn find_immediate_block(board: &mut Board, side: Stone) -> Option<Pos> {
    let threats = winning_cells(board, side.opponent());
    threats.into_iter().find(|&p| is_legal(board, p, side))
}

/// Number of immediate wins for `side`, counting no further than `early_stop`
pub fn count_immediate_wins(board: &Board, side: Stone, early_stop: usize) -> usize {
    board
        .empty_cells()
        .filter(|&p| wins_if_placed(board, p, side))
        .take(early_stop)
        .count()
}

/// Playing `pos` leaves `side` with two or more immediate wins
pub fn is_fork_move(board: &mut Board, pos: Pos, side: Stone) -> bool {
    if !is_legal(board, pos, side) {
        return false;
    }
    let trial = board.trial(pos, side);
    count_immediate_wins(&trial, side, 2) >= 2
}

/// Fork moves for `side` near existing stones, row-major
pub fn find_fork_moves(board: &mut Board, side: Stone) -> Vec<Pos> {
    let cells = neighborhood(board, side, FORK_RADIUS);
    cells
        .into_iter()
        .filter(|&p| is_fork_move(board, p, side))
        .collect()
}

/// Cells near stones where `side` would make open threes in two directions.
///
/// Only legal cells are returned, so this is always empty for Black.
pub fn find_double_three_moves(board: &mut Board, side: Stone) -> Vec<Pos> {
    let cells = neighborhood(board, side, FORK_RADIUS);
    cells
        .into_iter()
        .filter(|&p| count_open_threes(board, p, side) >= 2)
        .collect()
}

/// Highest [`score_move`] for `side` among `cells`; the first wins on ties
fn best_scoring(board: &mut Board, cells: &[Pos], side: Stone) -> Option<Pos> {
    let mut best: Option<(i64, Pos)> = None;
    for &p in cells {
        if !is_legal(board, p, side) {
            continue;
        }
        let score = score_move(board, p, side);
        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, p));
        }
    }
    best.map(|(_, p)| p)
}

/// Occupy the opponent's best fork cell before they can play it.
///
/// Immediate-win forks take precedence; without any, the opponent's double
/// three cells are blocked instead.
pub fn find_fork_block(board: &mut Board, side: Stone) -> Option<Pos> {
    let opponent = side.opponent();
    let mut forks = find_fork_moves(board, opponent);
    if forks.is_empty() {
        forks = find_double_three_moves(board, opponent);
    }
    if forks.is_empty() {
        return None;
    }
    best_scoring(board, &forks, side)
}

/// Our own best fork move, if any
pub fn find_fork_create(board: &mut Board, side: Stone) -> Option<Pos> {
    let forks = find_fork_moves(board, side);
    best_scoring(board, &forks, side)
}
