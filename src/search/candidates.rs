//! Candidate move generation
//!
//! Bounds the branching factor: only empty cells close to existing stones are
//! considered, and only the best-scoring few of those. Forced cells (such as
//! every cell where the opponent wins next move) bypass the trim.

use crate::board::{Board, Pos, Stone};
use crate::eval::score_move;
use crate::rules::is_legal;

/// Empty cells within Chebyshev `radius` of any stone, legal for `side`,
/// in row-major order.
///
/// An empty board yields the centre only.
pub fn neighborhood(board: &mut Board, side: Stone, radius: u8) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    let r = i32::from(radius);
    let mut near = vec![false; size * size];
    for stone in board.occupied() {
        for dr in -r..=r {
            for dc in -r..=r {
                let row = i32::from(stone.row) + dr;
                let col = i32::from(stone.col) + dc;
                if Pos::is_valid(row, col, size) {
                    near[row as usize * size + col as usize] = true;
                }
            }
        }
    }

    let cells: Vec<Pos> = board
        .empty_cells()
        .filter(|p| near[p.row as usize * size + p.col as usize])
        .collect();
    cells
        .into_iter()
        .filter(|&p| is_legal(board, p, side))
        .collect()
}

/// Candidate moves for `side`, best first.
///
/// `forced` cells that are empty and legal come first in the given order and
/// are never trimmed. The remaining neighbourhood cells are ranked by
/// [`score_move`] and cut to `limit - forced`; equal scores keep row-major
/// order. An empty board yields the centre only.
pub fn generate_candidates(
    board: &mut Board,
    side: Stone,
    radius: u8,
    limit: usize,
    forced: &[Pos],
) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let mut must_keep: Vec<Pos> = Vec::with_capacity(forced.len());
    for &p in forced {
        if !must_keep.contains(&p) && is_legal(board, p, side) {
            must_keep.push(p);
        }
    }

    let rest: Vec<Pos> = neighborhood(board, side, radius)
        .into_iter()
        .filter(|p| !must_keep.contains(p))
        .collect();

    let mut scored: Vec<(i64, Pos)> = rest
        .into_iter()
        .map(|p| (score_move(board, p, side), p))
        .collect();
    // Stable: ties stay row-major
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let room = limit.saturating_sub(must_keep.len());
    must_keep.extend(scored.into_iter().take(room).map(|(_, p)| p));
    must_keep
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_yields_center() {
        let mut board = Board::new(9);
        assert_eq!(generate_candidates(&mut board, Stone::Black, 2, 18, &[]), vec![Pos::new(4, 4)]);
        let mut board = Board::new(15);
        assert_eq!(neighborhood(&mut board, Stone::White, 3), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_neighborhood_radius() {
        let mut board = Board::new(9);
        board.place_stone(Pos::new(4, 4), Stone::Black);
        assert_eq!(neighborhood(&mut board, Stone::White, 1).len(), 8);
        assert_eq!(neighborhood(&mut board, Stone::White, 2).len(), 24);
    }

    #[test]
    fn test_neighborhood_clipped_at_corner() {
        let mut board = Board::new(9);
        board.place_stone(Pos::new(0, 0), Stone::Black);
        let cells = neighborhood(&mut board, Stone::White, 2);
        assert_eq!(cells.len(), 8);
        assert!(cells.iter().all(|p| p.row <= 2 && p.col <= 2));
    }

    #[test]
    fn test_candidates_exclude_forbidden_for_black() {
        let mut board = Board::new(15);
        for &(r, c) in &[(7, 6), (7, 8), (6, 7), (8, 7)] {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        let cands = generate_candidates(&mut board, Stone::Black, 2, 100, &[]);
        assert!(!cands.contains(&Pos::new(7, 7)));
        let cands = generate_candidates(&mut board, Stone::White, 2, 100, &[]);
        assert!(cands.contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_limit_respected_and_sorted() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::White);
        board.place_stone(Pos::new(7, 8), Stone::White);
        let cands = generate_candidates(&mut board, Stone::White, 2, 5, &[]);
        assert_eq!(cands.len(), 5);
        let scores: Vec<i64> = cands
            .iter()
            .map(|&p| score_move(&mut board, p, Stone::White))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_forced_kept_first_and_untrimmed() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let far = Pos::new(0, 14);
        let cands = generate_candidates(&mut board, Stone::White, 1, 1, &[far]);
        assert_eq!(cands, vec![far]);

        let cands = generate_candidates(&mut board, Stone::White, 1, 3, &[far, far]);
        assert_eq!(cands[0], far);
        assert_eq!(cands.len(), 3);
    }

    #[test]
    fn test_forced_occupied_is_dropped() {
        let mut board = Board::new(9);
        board.place_stone(Pos::new(4, 4), Stone::Black);
        let cands = generate_candidates(&mut board, Stone::White, 1, 10, &[Pos::new(4, 4)]);
        assert!(!cands.contains(&Pos::new(4, 4)));
        assert_eq!(cands.len(), 8);
    }
}
