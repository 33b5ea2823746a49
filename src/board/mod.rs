//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Trial};

use serde::{Deserialize, Serialize};

/// Largest supported side length (limited by the bitboard width)
pub const MAX_BOARD_SIZE: usize = 19;
/// Smallest side length on which five-in-a-row is still possible
pub const MIN_BOARD_SIZE: usize = 5;
/// Side length used when the caller does not pick one
pub const DEFAULT_BOARD_SIZE: usize = 15;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 361

/// The 4 line axes: horizontal, vertical, and the two diagonals.
/// Each one is scanned both ways from a cell.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stone colors
///
/// Black always moves first and is the side bound by the forbidden-move
/// rules (overline, double-four, double-three). White is unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Whether this side plays under the forbidden-move restrictions
    #[inline]
    pub fn is_restricted(self) -> bool {
        self == Stone::Black
    }

    /// Display name used in status lines
    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position on the board (0-indexed)
///
/// The chat protocol talks in `x` (column) and `y` (row); see [`Pos::from_xy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Build from 0-indexed `x` (column) and `y` (row)
    #[inline]
    pub fn from_xy(x: usize, y: usize) -> Self {
        Self::new(y as u8, x as u8)
    }

    /// 0-indexed `(x, y)`, i.e. `(col, row)`
    #[inline]
    pub fn xy(self) -> (usize, usize) {
        (self.col as usize, self.row as usize)
    }

    /// Step `k` cells along `(dr, dc)`, or `None` when leaving a board of `size`
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32, size: usize) -> Option<Pos> {
        let r = i32::from(self.row) + dr * k;
        let c = i32::from(self.col) + dc * k;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    // Row-major, matching the scan order used everywhere else
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
