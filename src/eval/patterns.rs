//! Pattern scores for move evaluation
//!
//! A line is described by its run length through the candidate cell and the
//! number of open (empty, on-board) ends. The unrestricted side's table sits
//! slightly above the restricted side's, so White values its own shapes a
//! little more than Black does.

use crate::board::Stone;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Candidate completes a legal win
    pub const WIN_MOVE: i64 = 100_000_000;
    /// Candidate takes the cell of an opponent's immediate win
    pub const BLOCK_MOVE: i64 = 90_000_000;
    /// Occupied or forbidden cell
    pub const ILLEGAL: i64 = -1_000_000_000;

    /// Base of the centre-proximity bonus
    pub const CENTER_BONUS: i64 = 120;
    /// Bonus lost per unit of Manhattan distance to the centre
    pub const CENTER_STEP: i64 = 6;
}

/// Score rows: `[five_or_more, len4, len3, len2]`, each `[open2, open1]`
struct LineTable {
    five: i64,
    rows: [[i64; 2]; 3],
}

const WHITE_TABLE: LineTable = LineTable {
    five: 1_000_000,
    rows: [[120_000, 30_000], [12_000, 3_000], [1_200, 300]],
};

const BLACK_TABLE: LineTable = LineTable {
    five: 800_000,
    rows: [[110_000, 25_000], [11_000, 2_500], [1_000, 250]],
};

/// Score one direction for `stone` given run length and open ends (0..=2)
pub fn line_score(stone: Stone, length: usize, open_ends: u8) -> i64 {
    let table = if stone.is_restricted() {
        &BLACK_TABLE
    } else {
        &WHITE_TABLE
    };

    if length >= 5 {
        return table.five;
    }
    let row = match length {
        4 => table.rows[0],
        3 => table.rows[1],
        2 => table.rows[2],
        _ => return 0,
    };
    match open_ends {
        2 => row[0],
        1 => row[1],
        _ => 0,
    }
}
