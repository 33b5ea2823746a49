//! Move legality for both sides
//!
//! Check order for Black is significant: overline first, then the exact-five
//! win, then double-four and double-three. A five that wins is never reported
//! as forbidden even when it also forms threes or fours elsewhere.

use crate::board::{Board, Pos, Stone};
use crate::error::MoveError;

use super::forbidden::{is_double_four, is_double_three};
use super::win::{creates_overline, has_exact_five, has_five_or_more};

/// What a legal placement does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Completes a winning run for the mover
    Win,
    /// Legal, game goes on
    Quiet,
}

/// Classify placing `stone` at `pos` without applying it.
///
/// The board is left exactly as it was on every return path.
pub fn classify_placement(board: &mut Board, pos: Pos, stone: Stone) -> Result<Placement, MoveError> {
    debug_assert!(stone != Stone::Empty, "classify_placement needs a side");

    if !board.contains(pos) {
        return Err(MoveError::OutOfRange { size: board.size() });
    }
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied);
    }

    if !stone.is_restricted() {
        return Ok(if has_five_or_more(board, pos, stone) {
            Placement::Win
        } else {
            Placement::Quiet
        });
    }

    if creates_overline(board, pos, stone) {
        return Err(MoveError::Overline);
    }
    if has_exact_five(board, pos, stone) {
        return Ok(Placement::Win);
    }
    if is_double_four(board, pos, stone) {
        return Err(MoveError::DoubleFour);
    }
    if is_double_three(board, pos, stone) {
        return Err(MoveError::DoubleThree);
    }

    Ok(Placement::Quiet)
}

/// Whether `stone` may be placed at `pos`
#[inline]
pub fn is_legal(board: &mut Board, pos: Pos, stone: Stone) -> bool {
    classify_placement(board, pos, stone).is_ok()
}

/// Legal empty cells for `stone`, row-major
pub fn legal_moves(board: &mut Board, stone: Stone) -> Vec<Pos> {
    let empties: Vec<Pos> = board.empty_cells().collect();
    empties
        .into_iter()
        .filter(|&p| is_legal(board, p, stone))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    #[test]
    fn test_occupied_rejected() {
        let mut board = Board::new(9);
        board.place_stone(Pos::new(4, 4), Stone::White);
        assert_eq!(
            classify_placement(&mut board, Pos::new(4, 4), Stone::Black),
            Err(MoveError::Occupied)
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut board = Board::new(9);
        assert_eq!(
            classify_placement(&mut board, Pos::new(9, 0), Stone::White),
            Err(MoveError::OutOfRange { size: 9 })
        );
        assert!(!is_legal(&mut board, Pos::new(0, 12), Stone::Black));
    }

    #[test]
    fn test_black_overline_forbidden() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 2), (7, 3), (7, 4), (7, 6), (7, 7)], Stone::Black);
        assert_eq!(
            classify_placement(&mut board, Pos::new(7, 5), Stone::Black),
            Err(MoveError::Overline)
        );
    }

    #[test]
    fn test_white_overline_wins() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 2), (7, 3), (7, 4), (7, 6), (7, 7)], Stone::White);
        assert_eq!(
            classify_placement(&mut board, Pos::new(7, 5), Stone::White),
            Ok(Placement::Win)
        );
    }

    #[test]
    fn test_black_exact_five_wins() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        assert_eq!(
            classify_placement(&mut board, Pos::new(7, 7), Stone::Black),
            Ok(Placement::Win)
        );
    }

    #[test]
    fn test_winning_five_beats_double_three() {
        let mut board = Board::new(15);
        // Row 7 four, plus two diagonal pairs that would be open threes
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        place_all(&mut board, &[(6, 6), (5, 5), (6, 8), (5, 9)], Stone::Black);
        assert_eq!(
            classify_placement(&mut board, Pos::new(7, 7), Stone::Black),
            Ok(Placement::Win)
        );
    }

    #[test]
    fn test_black_double_three_forbidden() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 6), (7, 8), (6, 7), (8, 7)], Stone::Black);
        assert_eq!(
            classify_placement(&mut board, Pos::new(7, 7), Stone::Black),
            Err(MoveError::DoubleThree)
        );
    }

    #[test]
    fn test_white_double_three_allowed() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 6), (7, 8), (6, 7), (8, 7)], Stone::White);
        assert!(is_legal(&mut board, Pos::new(7, 7), Stone::White));
    }

    #[test]
    fn test_black_double_four_forbidden() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6)], Stone::Black);
        place_all(&mut board, &[(4, 7), (5, 7), (6, 7)], Stone::Black);
        board.place_stone(Pos::new(7, 3), Stone::White);
        board.place_stone(Pos::new(3, 7), Stone::White);
        assert_eq!(
            classify_placement(&mut board, Pos::new(7, 7), Stone::Black),
            Err(MoveError::DoubleFour)
        );
    }

    #[test]
    fn test_double_four_through_remote_completions() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Stone::Black);
        place_all(&mut board, &[(1, 8), (2, 8), (3, 8), (4, 8)], Stone::Black);
        place_all(&mut board, &[(0, 5), (0, 8)], Stone::White);
        assert_eq!(
            classify_placement(&mut board, Pos::new(5, 4), Stone::Black),
            Err(MoveError::DoubleFour)
        );
        assert!(is_legal(&mut board, Pos::new(5, 4), Stone::White));
    }

    #[test]
    fn test_classify_leaves_board_unchanged() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6)], Stone::Black);
        place_all(&mut board, &[(4, 7), (5, 7), (6, 7)], Stone::Black);
        let before = board.clone();
        for p in before.empty_cells() {
            let _ = classify_placement(&mut board, p, Stone::Black);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves_excludes_forbidden() {
        let mut board = Board::new(9);
        place_all(&mut board, &[(4, 3), (4, 5), (3, 4), (5, 4)], Stone::Black);
        let moves = legal_moves(&mut board, Stone::Black);
        assert!(!moves.contains(&Pos::new(4, 4)));
        assert_eq!(moves.len(), 81 - 4 - 1);
        assert!(legal_moves(&mut board, Stone::White).contains(&Pos::new(4, 4)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rules::is_winning_run;
    use proptest::prelude::*;

    fn random_board(stones: &[(u8, u8, bool)]) -> Board {
        let mut board = Board::new(11);
        for &(r, c, black) in stones {
            let pos = Pos::new(r, c);
            if board.is_empty(pos) {
                let stone = if black { Stone::Black } else { Stone::White };
                board.place_stone(pos, stone);
            }
        }
        board
    }

    proptest! {
        #[test]
        fn classify_never_mutates(stones in prop::collection::vec((0u8..11, 0u8..11, any::<bool>()), 0..60)) {
            let mut board = random_board(&stones);
            let before = board.clone();
            for pos in before.positions() {
                for side in [Stone::Black, Stone::White] {
                    let _ = classify_placement(&mut board, pos, side);
                }
            }
            prop_assert_eq!(board, before);
        }

        #[test]
        fn win_classification_agrees_with_run_check(
            stones in prop::collection::vec((0u8..11, 0u8..11, any::<bool>()), 0..80),
            black in any::<bool>(),
        ) {
            let mut board = random_board(&stones);
            let side = if black { Stone::Black } else { Stone::White };
            for pos in board.empty_cells().collect::<Vec<_>>() {
                if let Ok(placement) = classify_placement(&mut board, pos, side) {
                    let trial = board.trial(pos, side);
                    prop_assert_eq!(placement == Placement::Win, is_winning_run(&trial, pos, side));
                }
            }
        }
    }
}
