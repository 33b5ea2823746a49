//! Renju forbidden-move patterns for Black
//!
//! Black may not play a move that creates, in two or more directions at once,
//! either an open three (double-three) or a four (double-four).
//!
//! The detector is a practical approximation: open threes are matched against
//! fixed shapes on a 13-cell window. A direction holds a four when some empty
//! cell within five steps of the move along it would then complete an exact
//! five in any direction. Some edge configurations can be over- or
//! under-counted this way; that behavior is kept as is.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::win::{creates_overline, has_exact_five};

/// Cells read on each side of the move when matching open threes
const WINDOW_RADIUS: i32 = 6;
const WINDOW_LEN: usize = (2 * WINDOW_RADIUS + 1) as usize;
const CENTER: usize = WINDOW_RADIUS as usize;

/// Cells checked on each side of the move when looking for fours
const FOUR_RADIUS: i32 = 5;

/// One cell of a line window, from the mover's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Own,
    Empty,
    Opponent,
    /// Off the board
    Edge,
}

use Cell::{Empty as E, Own as X};

/// Open-three shapes: `.XXX.`, `.XX.X.`, `.X.XX.`
const OPEN_THREE_SHAPES: [&[Cell]; 3] = [
    &[E, X, X, X, E],
    &[E, X, X, E, X, E],
    &[E, X, E, X, X, E],
];

/// Read the line through `pos` along `(dr, dc)`, treating `pos` as `stone`
fn read_window(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> [Cell; WINDOW_LEN] {
    let mut cells = [Cell::Edge; WINDOW_LEN];
    for (i, k) in (-WINDOW_RADIUS..=WINDOW_RADIUS).enumerate() {
        cells[i] = if k == 0 {
            Cell::Own
        } else {
            match pos.offset(dr, dc, k, board.size()) {
                None => Cell::Edge,
                Some(p) => match board.get(p) {
                    Stone::Empty => Cell::Empty,
                    s if s == stone => Cell::Own,
                    _ => Cell::Opponent,
                },
            }
        };
    }
    cells
}

/// Some open-three shape matches the window and covers the centre cell
fn window_has_open_three(cells: &[Cell; WINDOW_LEN]) -> bool {
    OPEN_THREE_SHAPES.iter().any(|shape| {
        cells
            .windows(shape.len())
            .enumerate()
            .any(|(start, w)| w == *shape && start <= CENTER && CENTER < start + shape.len())
    })
}

/// Placing `stone` at `pos` makes an open three along `(dr, dc)` that
/// includes `pos` itself
pub fn has_open_three_in_direction(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> bool {
    window_has_open_three(&read_window(board, pos, stone, dr, dc))
}

/// Count directions with an open three through `pos` (stops at 2)
pub fn count_open_threes(board: &Board, pos: Pos, stone: Stone) -> u8 {
    let mut count = 0;

    for &(dr, dc) in &DIRECTIONS {
        if has_open_three_in_direction(board, pos, stone, dr, dc) {
            count += 1;
            // Early exit: double-three only needs 2+
            if count >= 2 {
                return count;
            }
        }
    }

    count
}

/// Number of empty cells within five steps of `pos` along `(dr, dc)` that
/// would complete an exact five, in any direction, once `pos` holds `stone`.
///
/// The stone at `pos` is only placed while counting.
pub fn four_completions_in_direction(
    board: &mut Board,
    pos: Pos,
    stone: Stone,
    dr: i32,
    dc: i32,
) -> usize {
    let size = board.size();
    let trial = board.trial(pos, stone);

    (-FOUR_RADIUS..=FOUR_RADIUS)
        .filter(|&k| k != 0)
        .filter_map(|k| pos.offset(dr, dc, k, size))
        .filter(|&cell| trial.is_empty(cell))
        .filter(|&cell| has_exact_five(&trial, cell, stone) && !creates_overline(&trial, cell, stone))
        .count()
}

/// Whether placing `stone` at `pos` creates a four in two or more directions
pub fn is_double_four(board: &mut Board, pos: Pos, stone: Stone) -> bool {
    let mut four_dirs = 0;
    for &(dr, dc) in &DIRECTIONS {
        if four_completions_in_direction(board, pos, stone, dr, dc) >= 1 {
            four_dirs += 1;
            if four_dirs >= 2 {
                return true;
            }
        }
    }
    false
}

/// Whether placing `stone` at `pos` creates two or more open threes
pub fn is_double_three(board: &Board, pos: Pos, stone: Stone) -> bool {
    count_open_threes(board, pos, stone) >= 2
}
