//! Board structure and the scoped trial primitive

use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Square game board of configurable size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`. Callers
    /// taking sizes from users validate first (see `Game::create`).
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} out of range"
        );
        Self {
            size,
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    fn pos_of(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as u8, (idx % self.size) as u8)
    }

    /// Whether `pos` lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone without any rule processing
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
    }

    /// Temporarily put `stone` at `pos`.
    ///
    /// Whatever the cell held before is put back when the returned guard
    /// drops, so every exit path of the caller (early `return`, `break`, `?`)
    /// restores the board.
    #[inline]
    pub fn trial(&mut self, pos: Pos, stone: Stone) -> Trial<'_> {
        let prev = self.get(pos);
        self.remove_stone(pos);
        self.place_stone(pos, stone);
        Trial { board: self, pos, prev }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Centre cell (`size / 2` on both axes)
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    /// Occupied cells of both colors, row-major
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        self.black
            .union(&self.white)
            .iter_ones()
            .map(move |idx| self.pos_of(idx))
    }

    /// Every cell, row-major
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size as u8;
        (0..size).flat_map(move |r| (0..size).map(move |c| Pos::new(r, c)))
    }

    /// Empty cells, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.is_empty(p))
    }

    /// Row-major copy of all cells
    pub fn cells(&self) -> Vec<Stone> {
        self.positions().map(|p| self.get(p)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}

/// A stone placed by [`Board::trial`]; the previous cell comes back on drop
pub struct Trial<'a> {
    board: &'a mut Board,
    pos: Pos,
    prev: Stone,
}

impl Trial<'_> {
    /// Cell holding the trial stone
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
        self.board.place_stone(self.pos, self.prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_restores_on_drop() {
        let mut board = Board::new(9);
        let before = board.clone();
        {
            let t = board.trial(Pos::new(4, 4), Stone::Black);
            assert_eq!(t.get(Pos::new(4, 4)), Stone::Black);
            assert_eq!(t.stone_count(), 1);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_trials_restore_in_order() {
        let mut board = Board::new(9);
        board.place_stone(Pos::new(0, 0), Stone::White);
        let before = board.clone();
        {
            let mut outer = board.trial(Pos::new(1, 1), Stone::Black);
            {
                let inner = outer.trial(Pos::new(2, 2), Stone::White);
                assert_eq!(inner.stone_count(), 3);
            }
            assert_eq!(outer.get(Pos::new(2, 2)), Stone::Empty);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_on_occupied_cell_restores_stone() {
        let mut board = Board::new(9);
        board.place_stone(Pos::new(4, 4), Stone::White);
        let before = board.clone();
        {
            let t = board.trial(Pos::new(4, 4), Stone::Black);
            assert_eq!(t.get(Pos::new(4, 4)), Stone::Black);
            assert_eq!(t.stone_count(), 1);
        }
        assert_eq!(board, before);
        assert_eq!(board.get(Pos::new(4, 4)), Stone::White);
    }

    #[test]
    fn test_trial_restores_on_early_return() {
        fn first_count(board: &mut Board) -> Option<u32> {
            let t = board.trial(Pos::new(3, 3), Stone::Black);
            if t.stone_count() > 0 {
                return Some(t.stone_count());
            }
            None
        }

        let mut board = Board::new(9);
        assert_eq!(first_count(&mut board), Some(1));
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_occupied_is_row_major() {
        let mut board = Board::new(9);
        board.place_stone(Pos::new(5, 1), Stone::White);
        board.place_stone(Pos::new(0, 8), Stone::Black);
        board.place_stone(Pos::new(5, 0), Stone::Black);
        let cells: Vec<Pos> = board.occupied().collect();
        assert_eq!(cells, vec![Pos::new(0, 8), Pos::new(5, 0), Pos::new(5, 1)]);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(5);
        for p in board.positions().collect::<Vec<_>>() {
            board.place_stone(p, Stone::White);
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_board_too_large_panics() {
        let _ = Board::new(20);
    }
}
