//! Main AI Engine integrating all search components
//!
//! The engine picks a move through a fixed priority list. Each step runs only
//! if every earlier one found nothing:
//!
//! 1. **Immediate win**: a legal cell that completes our five
//! 2. **Block**: the opponent's immediate win, if we may play there
//! 3. **Fork block** (tiers with `fork_block`): the opponent's best fork cell
//! 4. **Fork create** (tiers with `fork_create`): our own best fork
//! 5. **Alpha-Beta** (tiers with `depth > 0`): negamax over bounded candidates
//! 6. **Candidate**: uniform pick among the best `random_top` candidates
//! 7. **Fallback**: centre, else the first legal cell in row-major order
//!
//! Steps 1 to 4 are deterministic. Randomness comes only from the engine's own
//! seedable RNG.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, AiTier, Board, Stone, Pos};
//!
//! let mut engine = AIEngine::seeded(AiTier::Normal, 7);
//! let mut board = Board::new(9);
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//!
//! let result = engine.select_move(&mut board, Stone::White).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Pos, Stone};
use crate::config::{AiTier, EngineConfig, TierConfig};
use crate::error::EngineError;
use crate::eval::{score_move, PatternScore};
use crate::rules::is_legal;
use crate::search::{
    find_fork_block, find_fork_create, find_immediate_block, find_immediate_win,
    generate_candidates, winning_cells, Searcher, WIN_SCORE,
};

/// Type of search that produced the result.
///
/// This indicates which phase of the search hierarchy found the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found an immediate winning move
    ImmediateWin,
    /// Took the cell of the opponent's immediate win
    Block,
    /// Occupied a cell that would give the opponent a fork
    ForkBlock,
    /// Created our own fork
    ForkCreate,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Random pick among the best candidates
    Candidate,
    /// No candidate available; centre or first legal cell
    Fallback,
}

/// Result of a move search with detailed statistics.
///
/// Contains the best move found along with metadata about the search.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move (0-indexed)
    pub best_move: Pos,
    /// Score of the move from the mover's point of view
    pub score: i64,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn shortcut(pos: Pos, score: i64, search_type: SearchType) -> Self {
        Self {
            best_move: pos,
            score,
            search_type,
            time_ms: 0,
            nodes: 1,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Holds the tier settings and the random source. The board is passed per
/// call and is left unchanged: every speculative placement goes through
/// [`Board::trial`].
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: EngineConfig,
    tier: AiTier,
    rng: ChaCha8Rng,
}

impl AIEngine {
    /// Engine with the default tier table, seeded from entropy
    #[must_use]
    pub fn new(tier: AiTier) -> Self {
        Self::with_config(EngineConfig::default(), tier)
    }

    /// Engine with a custom tier table, seeded from entropy
    #[must_use]
    pub fn with_config(config: EngineConfig, tier: AiTier) -> Self {
        Self {
            config,
            tier,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic engine: the same seed replays the same choices.
    ///
    /// # Example
    ///
    /// ```
    /// use gomoku::{AIEngine, AiTier};
    ///
    /// let engine = AIEngine::seeded(AiTier::Hard, 42);
    /// assert_eq!(engine.tier(), AiTier::Hard);
    /// ```
    #[must_use]
    pub fn seeded(tier: AiTier, seed: u64) -> Self {
        Self::with_config_seeded(EngineConfig::default(), tier, seed)
    }

    #[must_use]
    pub fn with_config_seeded(config: EngineConfig, tier: AiTier, seed: u64) -> Self {
        Self {
            config,
            tier,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn tier(&self) -> AiTier {
        self.tier
    }

    pub fn set_tier(&mut self, tier: AiTier) {
        self.tier = tier;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a move for `side`.
    ///
    /// The returned move is always legal for `side`. Fails only when `side`
    /// has no legal cell at all.
    pub fn select_move(&mut self, board: &mut Board, side: Stone) -> Result<MoveResult, EngineError> {
        let start = Instant::now();
        let tier = self.config.tier(self.tier).clone();

        let mut result = self.run_pipeline(board, side, &tier)?;
        result.time_ms = start.elapsed().as_millis() as u64;

        debug_assert!(is_legal(board, result.best_move, side));
        log::debug!(
            "{} AI ({}) plays {:?} via {:?}: score {} in {}ms, {} nodes",
            side,
            self.tier,
            result.best_move.xy(),
            result.search_type,
            result.score,
            result.time_ms,
            result.nodes
        );
        Ok(result)
    }

    fn run_pipeline(
        &mut self,
        board: &mut Board,
        side: Stone,
        tier: &TierConfig,
    ) -> Result<MoveResult, EngineError> {
        // 1. Our own win
        if let Some(pos) = find_immediate_win(board, side) {
            return Ok(MoveResult::shortcut(pos, PatternScore::WIN_MOVE, SearchType::ImmediateWin));
        }

        // 2. Opponent's win next move
        if let Some(pos) = find_immediate_block(board, side) {
            return Ok(MoveResult::shortcut(pos, PatternScore::BLOCK_MOVE, SearchType::Block));
        }

        // 3. Opponent's fork
        if tier.fork_block {
            if let Some(pos) = find_fork_block(board, side) {
                let score = score_move(board, pos, side);
                return Ok(MoveResult::shortcut(pos, score, SearchType::ForkBlock));
            }
        }

        // 4. Our fork
        if tier.fork_create {
            if let Some(pos) = find_fork_create(board, side) {
                let score = score_move(board, pos, side);
                return Ok(MoveResult::shortcut(pos, score, SearchType::ForkCreate));
            }
        }

        // 5. Tree search; with no root at all, drop to the normal tier's pick
        let mut pick = tier;
        if tier.searches() {
            if let Some(result) = self.search(board, side, tier) {
                return Ok(result);
            }
            pick = &self.config.normal;
        }

        // 6. Random among the best few
        let moves = generate_candidates(board, side, pick.radius, pick.candidate_limit, &[]);
        let top = &moves[..pick.random_top.min(moves.len())];
        if let Some(&pos) = top.choose(&mut self.rng) {
            let score = score_move(board, pos, side);
            return Ok(MoveResult {
                best_move: pos,
                score,
                search_type: SearchType::Candidate,
                time_ms: 0,
                nodes: moves.len() as u64,
            });
        }

        // 7. Nothing near the stones
        self.fallback(board, side)
    }

    fn search(&mut self, board: &mut Board, side: Stone, tier: &TierConfig) -> Option<MoveResult> {
        // Every opponent winning cell stays in the root set
        let forced = winning_cells(board, side.opponent());
        let roots = generate_candidates(board, side, tier.radius, tier.candidate_limit, &forced);
        if roots.is_empty() {
            return None;
        }

        let mut searcher = Searcher::new(tier.radius, tier.candidate_limit);
        let result = searcher.search(board, side, tier.depth, &roots);

        let best = if tier.randomize_ties {
            result.tied.choose(&mut self.rng).copied()
        } else {
            result.best_move
        }?;

        if result.score <= -WIN_SCORE {
            log::debug!("{side} AI sees a forced loss at depth {}", tier.depth);
        }

        Some(MoveResult {
            best_move: best,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms: 0,
            nodes: result.nodes,
        })
    }

    fn fallback(&mut self, board: &mut Board, side: Stone) -> Result<MoveResult, EngineError> {
        let center = board.center();
        let pos = if is_legal(board, center, side) {
            Some(center)
        } else {
            let empties: Vec<Pos> = board.empty_cells().collect();
            empties.into_iter().find(|&p| is_legal(board, p, side))
        };

        match pos {
            Some(pos) => {
                log::warn!("{side} AI found no candidate, falling back to {:?}", pos.xy());
                Ok(MoveResult::shortcut(pos, 0, SearchType::Fallback))
            }
            None => Err(EngineError::NoLegalMove(side)),
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(AiTier::default())
    }
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
    fn test_engine_empty_board_plays_center() {
        for tier in [AiTier::Easy, AiTier::Normal, AiTier::Hard] {
            let mut engine = AIEngine::seeded(tier, 1);
            let mut board = Board::new(9);
            let result = engine.select_move(&mut board, Stone::Black).unwrap();
            assert_eq!(result.best_move, Pos::new(4, 4));
        }
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::White);
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3)], Stone::Black);

        let mut engine = AIEngine::seeded(AiTier::Easy, 3);
        let result = engine.select_move(&mut board, Stone::White).unwrap();
        assert_eq!(result.best_move, Pos::new(7, 2));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_hard_immediate_win_ignores_depth() {
        let mut config = EngineConfig::default();
        config.hard.depth = 6;
        config.hard.candidate_limit = 200;
        let mut board = Board::new(15);
        place_all(&mut board, &[(3, 3), (4, 4), (5, 5), (6, 6)], Stone::Black);
        place_all(&mut board, &[(3, 4), (4, 5), (5, 6)], Stone::White);

        let mut engine = AIEngine::with_config_seeded(config, AiTier::Hard, 9);
        let result = engine.select_move(&mut board, Stone::Black).unwrap();
        assert_eq!(result.best_move, Pos::new(2, 2));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::White);
        board.place_stone(Pos::new(7, 2), Stone::Black);

        let mut engine = AIEngine::seeded(AiTier::Easy, 5);
        let result = engine.select_move(&mut board, Stone::Black).unwrap();
        assert_eq!(result.best_move, Pos::new(7, 7));
        assert_eq!(result.search_type, SearchType::Block);
    }

    #[test]
    fn test_normal_blocks_fork() {
        let mut board = Board::new(15);
        // White open three: extending it makes an open four (two winning cells)
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7)], Stone::White);
        board.place_stone(Pos::new(6, 6), Stone::Black);

        let mut engine = AIEngine::seeded(AiTier::Normal, 11);
        let result = engine.select_move(&mut board, Stone::Black).unwrap();
        assert_eq!(result.search_type, SearchType::ForkBlock);
        assert!(result.best_move == Pos::new(7, 4) || result.best_move == Pos::new(7, 8));
    }

    #[test]
    fn test_blocks_double_open_three() {
        // White at (7,7) would make live threes on row 7 and column 7
        for tier in [AiTier::Normal, AiTier::Hard] {
            for seed in 0..5 {
                let mut board = Board::new(15);
                place_all(&mut board, &[(7, 6), (7, 8), (6, 7), (8, 7)], Stone::White);

                let mut engine = AIEngine::seeded(tier, seed);
                let result = engine.select_move(&mut board, Stone::Black).unwrap();
                assert_eq!(result.search_type, SearchType::ForkBlock, "{tier:?} seed {seed}");
                assert_eq!(result.best_move, Pos::new(7, 7), "{tier:?} seed {seed}");
            }
        }
    }

    #[test]
    fn test_easy_ignores_forks() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7)], Stone::White);
        board.place_stone(Pos::new(6, 6), Stone::Black);

        let mut engine = AIEngine::seeded(AiTier::Easy, 11);
        let result = engine.select_move(&mut board, Stone::Black).unwrap();
        assert_eq!(result.search_type, SearchType::Candidate);
    }

    #[test]
    fn test_hard_creates_fork() {
        let mut board = Board::new(15);
        place_all(&mut board, &[(7, 5), (7, 6), (7, 7)], Stone::White);
        place_all(&mut board, &[(0, 0), (0, 14)], Stone::Black);

        let mut engine = AIEngine::seeded(AiTier::Hard, 2);
        let result = engine.select_move(&mut board, Stone::White).unwrap();
        assert_eq!(result.search_type, SearchType::ForkCreate);
        assert!(result.best_move == Pos::new(7, 4) || result.best_move == Pos::new(7, 8));
    }

    #[test]
    fn test_hard_search_returns_legal_move() {
        let mut board = Board::new(9);
        place_all(&mut board, &[(4, 4), (3, 5)], Stone::Black);
        board.place_stone(Pos::new(3, 4), Stone::White);
        let before = board.clone();

        let mut engine = AIEngine::seeded(AiTier::Hard, 4);
        let result = engine.select_move(&mut board, Stone::White).unwrap();
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(result.nodes > 1);
        assert_eq!(board, before);
        assert!(is_legal(&mut board, result.best_move, Stone::White));
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut board = Board::new(13);
        place_all(&mut board, &[(6, 6), (5, 7)], Stone::Black);
        board.place_stone(Pos::new(6, 7), Stone::White);

        for tier in [AiTier::Easy, AiTier::Normal] {
            let mut a = AIEngine::seeded(tier, 1234);
            let mut b = AIEngine::seeded(tier, 1234);
            for _ in 0..5 {
                let ma = a.select_move(&mut board, Stone::White).unwrap().best_move;
                let mb = b.select_move(&mut board, Stone::White).unwrap().best_move;
                assert_eq!(ma, mb);
            }
        }
    }

    #[test]
    fn test_easy_picks_among_top_candidates() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let top = generate_candidates(&mut board, Stone::White, 2, 18, &[]);

        let mut engine = AIEngine::seeded(AiTier::Easy, 99);
        for _ in 0..10 {
            let mv = engine.select_move(&mut board, Stone::White).unwrap().best_move;
            assert!(top.contains(&mv));
        }
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let mut board = Board::new(5);
        for p in board.positions().collect::<Vec<_>>() {
            let stone = if (p.row / 2 + p.col) % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(p, stone);
        }
        let mut engine = AIEngine::seeded(AiTier::Hard, 0);
        assert_eq!(
            engine.select_move(&mut board, Stone::Black).unwrap_err(),
            EngineError::NoLegalMove(Stone::Black)
        );
    }

    #[test]
    fn test_fallback_takes_first_legal_cell() {
        let mut board = Board::new(5);
        // Only (0,0) is empty, so the centre is unavailable
        for p in board.positions().collect::<Vec<_>>() {
            if p != Pos::new(0, 0) {
                let stone = if (p.row / 2 + p.col) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place_stone(p, stone);
            }
        }
        let mut engine = AIEngine::seeded(AiTier::Easy, 0);
        let result = engine.fallback(&mut board, Stone::White).unwrap();
        assert_eq!(result.best_move, Pos::new(0, 0));
        assert_eq!(result.search_type, SearchType::Fallback);
    }
}
