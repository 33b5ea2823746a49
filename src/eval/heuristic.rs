//! Heuristic evaluation for candidate moves and search leaves
//!
//! `score_move` rates one empty cell for the side about to play:
//! - Illegal or occupied cells get `PatternScore::ILLEGAL`
//! - A legal win beats everything, then blocking the opponent's win
//! - Otherwise attack + 95% of defence + a centre bonus
//!
//! `score_position` rates a whole board for the side to move by comparing the
//! best reply available to each side. It is the leaf value of the negamax
//! search, so it is always taken from the mover's point of view.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::rules::{is_legal, wins_if_placed};

use super::patterns::{line_score, PatternScore};

/// Share of the opponent's line value counted as defence, in percent
const DEFENCE_WEIGHT: i64 = 95;

/// Share of the opponent's best reply subtracted in `score_position`, in percent
const OPPONENT_WEIGHT: i64 = 92;

/// Leaf value of a board with no stones when the centre is still free
const OPENING_VALUE: i64 = 50;

/// Run length through `pos` (treated as `stone`) along one axis and the
/// number of empty on-board cells right past each end
fn line_features(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> (usize, u8) {
    let size = board.size();
    let walk = |sr: i32, sc: i32| {
        let mut k = 1;
        loop {
            match pos.offset(sr, sc, k, size) {
                Some(p) if board.get(p) == stone => k += 1,
                Some(p) if board.get(p) == Stone::Empty => return ((k - 1) as usize, 1u8),
                _ => return ((k - 1) as usize, 0u8),
            }
        }
    };
    let (fwd, open_fwd) = walk(dr, dc);
    let (back, open_back) = walk(-dr, -dc);
    (1 + fwd + back, open_fwd + open_back)
}

/// Sum of the four directional line scores for `stone` at `pos`
fn shape_score(board: &Board, pos: Pos, stone: Stone) -> i64 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let (length, open_ends) = line_features(board, pos, stone, dr, dc);
            line_score(stone, length, open_ends)
        })
        .sum()
}

/// Bonus for cells near the middle: `120 - 6 * manhattan(pos, centre)`.
///
/// The centre is `(size - 1) / 2` on both axes, which falls between cells on
/// even boards; the doubled form below keeps the arithmetic exact.
#[inline]
pub fn center_bonus(size: usize, pos: Pos) -> i64 {
    let span = size as i64 - 1;
    let dr = (2 * i64::from(pos.row) - span).abs();
    let dc = (2 * i64::from(pos.col) - span).abs();
    PatternScore::CENTER_BONUS - PatternScore::CENTER_STEP / 2 * (dr + dc)
}

/// Static score of `side` playing at `pos`.
///
/// Takes `&mut Board` only for legality trials; the board is unchanged on
/// return.
pub fn score_move(board: &mut Board, pos: Pos, side: Stone) -> i64 {
    if !board.contains(pos) || !board.is_empty(pos) || !is_legal(board, pos, side) {
        return PatternScore::ILLEGAL;
    }

    if wins_if_placed(board, pos, side) {
        return PatternScore::WIN_MOVE;
    }
    let opp = side.opponent();
    if wins_if_placed(board, pos, opp) && is_legal(board, pos, opp) {
        return PatternScore::BLOCK_MOVE;
    }

    let attack = shape_score(board, pos, side);
    let defence = shape_score(board, pos, opp);

    attack + defence * DEFENCE_WEIGHT / 100 + center_bonus(board.size(), pos)
}

/// Empty cells 8-adjacent to at least one stone, row-major
fn frontier(board: &Board) -> Vec<Pos> {
    let size = board.size();
    board
        .empty_cells()
        .filter(|&p| {
            (-1..=1).any(|dr| {
                (-1..=1).any(|dc| {
                    (dr, dc) != (0, 0)
                        && p.offset(dr, dc, 1, size)
                            .is_some_and(|q| !board.is_empty(q))
                })
            })
        })
        .collect()
}

/// Best `score_move` for `side` over `cells`, or 0 if none is legal
fn best_reply(board: &mut Board, cells: &[Pos], side: Stone) -> i64 {
    cells
        .iter()
        .map(|&p| score_move(board, p, side))
        .filter(|&s| s != PatternScore::ILLEGAL)
        .max()
        .unwrap_or(0)
}

/// Evaluate the board for `side`, the side to move.
///
/// Positive favours `side`. Only cells touching existing stones are
/// considered, for both sides.
pub fn score_position(board: &mut Board, side: Stone) -> i64 {
    let near = frontier(board);
    if near.is_empty() {
        return if board.is_empty(board.center()) {
            OPENING_VALUE
        } else {
            0
        };
    }

    let mine = best_reply(board, &near, side);
    let theirs = best_reply(board, &near, side.opponent());
    mine - theirs * OPPONENT_WEIGHT / 100
}
