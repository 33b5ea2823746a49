//! Run-length counting and win conditions
//!
//! Win conditions are asymmetric:
//! 1. Black (restricted) wins only with a run of exactly five
//! 2. White (unrestricted) wins with five or more
//!
//! All functions treat `pos` as holding `stone` whether or not it is
//! actually on the board, so they serve both applied and hypothetical moves.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Number of consecutive `stone` cells starting one step from `pos`
#[inline]
pub fn count_one_dir(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    let mut count = 0;
    let mut k = 1;
    while let Some(p) = pos.offset(dr, dc, k, board.size()) {
        if board.get(p) != stone {
            break;
        }
        count += 1;
        k += 1;
    }
    count
}

/// Length of the run through `pos` along one axis, counting both ways
#[inline]
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    1 + count_one_dir(board, pos, dr, dc, stone) + count_one_dir(board, pos, -dr, -dc, stone)
}

/// Some axis has a run of exactly five through `pos`
pub fn has_exact_five(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc, stone) == 5)
}

/// Some axis has a run of five or more through `pos`
pub fn has_five_or_more(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc, stone) >= 5)
}

/// Some axis has a run of six or more through `pos`
pub fn creates_overline(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc, stone) >= 6)
}

/// The stone at `pos` completes its side's winning run.
///
/// Black needs exactly five in some direction; White needs five or more.
#[inline]
pub fn is_winning_run(board: &Board, pos: Pos, stone: Stone) -> bool {
    if stone.is_restricted() {
        has_exact_five(board, pos, stone)
    } else {
        has_five_or_more(board, pos, stone)
    }
}

/// Placing `stone` at `pos` would legally win on the spot.
///
/// For Black an exact five that also makes an overline elsewhere is not a
/// win, because the overline makes the whole move forbidden.
pub fn wins_if_placed(board: &Board, pos: Pos, stone: Stone) -> bool {
    if stone.is_restricted() {
        has_exact_five(board, pos, stone) && !creates_overline(board, pos, stone)
    } else {
        has_five_or_more(board, pos, stone)
    }
}

/// Cells of the winning run through `pos`, ordered along the line
pub fn find_winning_line(board: &Board, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
    for &(dr, dc) in &DIRECTIONS {
        let len = run_length(board, pos, dr, dc, stone);
        let wins = if stone.is_restricted() { len == 5 } else { len >= 5 };
        if !wins {
            continue;
        }
        let back = count_one_dir(board, pos, -dr, -dc, stone) as i32;
        let line = (-back..(len as i32 - back))
            .filter_map(|k| pos.offset(dr, dc, k, board.size()))
            .collect();
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(board: &mut Board, row: u8, cols: std::ops::Range<u8>, stone: Stone) {
        for c in cols {
            board.place_stone(Pos::new(row, c), stone);
        }
    }

    #[test]
    fn test_run_length_both_ways() {
        let mut board = Board::new(15);
        row_of(&mut board, 7, 3..8, Stone::Black);
        assert_eq!(run_length(&board, Pos::new(7, 5), 0, 1, Stone::Black), 5);
        assert_eq!(run_length(&board, Pos::new(7, 5), 1, 0, Stone::Black), 1);
    }

    #[test]
    fn test_run_stops_at_edge() {
        let mut board = Board::new(9);
        row_of(&mut board, 0, 0..4, Stone::White);
        assert_eq!(count_one_dir(&board, Pos::new(0, 0), 0, -1, Stone::White), 0);
        assert_eq!(run_length(&board, Pos::new(0, 0), 0, 1, Stone::White), 4);
    }

    #[test]
    fn test_exact_five_black_wins() {
        let mut board = Board::new(15);
        row_of(&mut board, 7, 0..5, Stone::Black);
        assert!(is_winning_run(&board, Pos::new(7, 4), Stone::Black));
    }

    #[test]
    fn test_six_never_exact_five() {
        let mut board = Board::new(15);
        row_of(&mut board, 7, 0..6, Stone::Black);
        assert!(!has_exact_five(&board, Pos::new(7, 5), Stone::Black));
        assert!(creates_overline(&board, Pos::new(7, 5), Stone::Black));
        assert!(!is_winning_run(&board, Pos::new(7, 5), Stone::Black));
    }

    #[test]
    fn test_white_six_wins() {
        let mut board = Board::new(15);
        row_of(&mut board, 7, 0..6, Stone::White);
        assert!(is_winning_run(&board, Pos::new(7, 2), Stone::White));
    }

    #[test]
    fn test_diagonal_five() {
        let mut board = Board::new(9);
        for i in 0..5 {
            board.place_stone(Pos::new(i, 4 - i), Stone::White);
        }
        assert!(has_five_or_more(&board, Pos::new(2, 2), Stone::White));
    }

    #[test]
    fn test_wins_if_placed_hypothetical() {
        let mut board = Board::new(15);
        row_of(&mut board, 3, 2..6, Stone::Black);
        // (3,6) is still empty
        assert!(wins_if_placed(&board, Pos::new(3, 6), Stone::Black));
        assert!(wins_if_placed(&board, Pos::new(3, 1), Stone::Black));
        assert!(!wins_if_placed(&board, Pos::new(4, 6), Stone::Black));
    }

    #[test]
    fn test_exact_five_with_overline_elsewhere_is_not_a_win() {
        let mut board = Board::new(15);
        // Horizontal four ending at col 6; vertically (7,7) joins a run of eight
        row_of(&mut board, 7, 3..7, Stone::Black);
        for r in [2u8, 3, 4, 5, 6, 8, 9] {
            board.place_stone(Pos::new(r, 7), Stone::Black);
        }
        let pos = Pos::new(7, 7);
        assert!(has_exact_five(&board, pos, Stone::Black));
        assert!(creates_overline(&board, pos, Stone::Black));
        assert!(!wins_if_placed(&board, pos, Stone::Black));
    }

    #[test]
    fn test_find_winning_line_ordered() {
        let mut board = Board::new(9);
        row_of(&mut board, 4, 2..7, Stone::Black);
        let line = find_winning_line(&board, Pos::new(4, 4), Stone::Black).expect("five");
        let expected: Vec<Pos> = (2..7).map(|c| Pos::new(4, c)).collect();
        assert_eq!(line, expected);
    }
}
