//! Minimax search with optional depth limit and alpha-beta pruning
//!
//! One recursive procedure covers all four search variants. X maximizes and
//! O minimizes; scores are always from X's point of view.
//!
//! Every node runs the same steps:
//! 1. Terminal check on the lines through the anchor (the mark just placed)
//! 2. Depth cutoff: heuristic score when the remaining depth is 0
//! 3. No empty cells left: draw (0)
//! 4. Expand each candidate by placing, recursing and removing the mark
//!
//! Ties keep the first move found in generator order, so shuffled move
//! ordering changes which of several equal moves is played.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark, Pos};
//! use tictactoe::search::{SearchParams, Searcher};
//! use rand::SeedableRng;
//!
//! let mut board = Board::new(3);
//! board.place_stone(Pos::new(0, 0), Mark::X);
//! board.place_stone(Pos::new(0, 1), Mark::X);
//!
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(1);
//! let params = SearchParams::full(3).with_pruning(true);
//! let result = Searcher::new(&params, &mut rng).search(&mut board, Mark::X, Some(Pos::new(0, 1)));
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use rand::RngCore;

use super::movegen::MovePolicy;
use crate::board::{Board, Mark, Pos};
use crate::eval::{evaluate, win_score};
use crate::rules::winner;

/// Search result: chosen move, backed-up value and nodes visited.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` at terminal or exhausted positions
    pub best_move: Option<Pos>,
    /// Backed-up minimax value from X's point of view
    pub score: f64,
    /// Total nodes visited, root included
    pub nodes: u64,
}

/// Parameters fixed for one search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub win_length: usize,
    /// Remaining plies at the root, `None` for a full search
    pub depth_limit: Option<u8>,
    pub pruning: bool,
    pub policy: MovePolicy,
}

impl SearchParams {
    /// Plain full-depth minimax in row-major move order
    pub fn full(win_length: usize) -> Self {
        Self {
            win_length,
            depth_limit: None,
            pruning: false,
            policy: MovePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth_limit = Some(depth);
        self
    }

    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: MovePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Runs one search over a borrowed board.
pub struct Searcher<'a> {
    params: &'a SearchParams,
    rng: &'a mut dyn RngCore,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(params: &'a SearchParams, rng: &'a mut dyn RngCore) -> Self {
        Self {
            params,
            rng,
            nodes: 0,
        }
    }

    /// Search for the best move of `to_move`.
    ///
    /// `anchor` is the last mark placed on `board`, or `None` when unknown (the
    /// terminal test then scans the whole board). The board is left exactly as
    /// it was passed in.
    pub fn search(&mut self, board: &mut Board, to_move: Mark, anchor: Option<Pos>) -> SearchResult {
        debug_assert!(to_move != Mark::Empty);
        self.nodes = 0;
        let (best_move, score) = self.minimax(
            board,
            to_move,
            anchor,
            self.params.depth_limit,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        to_move: Mark,
        anchor: Option<Pos>,
        depth: Option<u8>,
        mut alpha: f64,
        mut beta: f64,
    ) -> (Option<Pos>, f64) {
        self.nodes += 1;
        let k = self.params.win_length;

        if let Some(side) = winner(board, anchor, k) {
            let value = if side.is_maximizer() {
                win_score(k)
            } else {
                -win_score(k)
            };
            return (None, value);
        }

        if depth == Some(0) {
            return (None, evaluate(board, anchor, k));
        }

        let moves = self.params.policy.generate_moves(board, &mut *self.rng);
        if moves.is_empty() {
            return (None, 0.0);
        }

        let maximizing = to_move.is_maximizer();
        let child_depth = depth.map(|d| d - 1);
        let mut best_move = None;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mov in moves {
            board.place_stone(mov, to_move);
            let (_, score) = self.minimax(board, to_move.opponent(), Some(mov), child_depth, alpha, beta);
            board.remove_stone(mov);

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mov);
                }
                beta = beta.min(best);
            }

            if self.params.pruning && alpha >= beta {
                break;
            }
        }

        (best_move, best)
    }
}
