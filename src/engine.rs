//! Engine facade used by the game loop
//!
//! Each AI-controlled side owns one [`Engine`]. The engine keeps its own copy
//! of the board: the game loop reports the opponent's moves with
//! [`Engine::apply_opponent_move`] and asks for the engine's reply with
//! [`Engine::compute_next_move`], which also records that reply on the
//! engine's board.
//!
//! The first reply of a game skips search and takes the central cell (or its
//! diagonal neighbour when the opponent already took the center). Every later
//! reply runs the search variant selected by [`SearchConfig`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{Engine, Mark, Pos, SearchConfig};
//!
//! let mut engine = Engine::new(3, 3, Mark::O).unwrap();
//! engine.configure(SearchConfig::new(0, true, false, false)).unwrap();
//!
//! engine.apply_opponent_move(Pos::new(1, 1)).unwrap();
//! let reply = engine.compute_next_move().unwrap();
//! assert_eq!(reply, Pos::new(0, 0));
//! ```

use std::time::Instant;

use log::{debug, info, trace};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::board::{Board, Mark, Pos};
use crate::config::{GameConfig, SearchConfig, SearchVariant};
use crate::error::{Error, Result};
use crate::rules::check_winner;
use crate::search::{Locality, MovePolicy, SearchParams, SearchResult, Searcher};

/// How a move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Fixed opening move, no search
    Opening,
    /// Result of the configured search variant
    Search(SearchVariant),
}

/// Result of a move computation with search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Move played
    pub best_move: Pos,
    /// Backed-up value from X's point of view (0 for the opening move)
    pub score: f64,
    /// How the move was chosen
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0.0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_search(pos: Pos, result: &SearchResult, variant: SearchVariant, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: result.score,
            search_type: SearchType::Search(variant),
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Game-tree search engine for one side.
pub struct Engine {
    game: GameConfig,
    side: Mark,
    search: SearchConfig,
    board: Board,
    /// Last move applied to the board by either side
    last_move: Option<Pos>,
    first_move_taken: bool,
    rng: Pcg64,
}

impl Engine {
    /// Create an engine playing `side` on a `size`×`size` board with the
    /// default search (full minimax, no filters).
    pub fn new(size: usize, win_length: usize, side: Mark) -> Result<Self> {
        Self::with_config(GameConfig::new(size, win_length)?, side, SearchConfig::default())
    }

    /// Create an engine with explicit game and search configuration.
    pub fn with_config(game: GameConfig, side: Mark, search: SearchConfig) -> Result<Self> {
        game.validate()?;
        search.validate()?;
        if side == Mark::Empty {
            return Err(Error::InvalidSide);
        }
        let rng = seeded_rng(&search);
        Ok(Self {
            game,
            side,
            search,
            board: Board::new(game.size),
            last_move: None,
            first_move_taken: false,
            rng,
        })
    }

    /// Select the search variant and move filters.
    ///
    /// Only allowed before any move has been applied to this engine's board.
    pub fn configure(&mut self, search: SearchConfig) -> Result<()> {
        if self.first_move_taken || !self.board.is_board_empty() {
            return Err(Error::AlreadyConfigured);
        }
        search.validate()?;
        self.rng = seeded_rng(&search);
        self.search = search;
        info!(
            "engine {} configured: {:?} (locality: {}, randomize: {})",
            self.side,
            self.search.variant(),
            self.search.locality,
            self.search.randomize
        );
        Ok(())
    }

    /// Record the opponent's move on the engine's board.
    pub fn apply_opponent_move(&mut self, pos: Pos) -> Result<()> {
        self.board.try_place(pos, self.side.opponent())?;
        self.last_move = Some(pos);
        Ok(())
    }

    /// Choose the next move, apply it to the engine's board and return it.
    pub fn compute_next_move(&mut self) -> Result<Pos> {
        self.compute_next_move_with_stats().map(|result| result.best_move)
    }

    /// Like [`Engine::compute_next_move`], with search statistics.
    pub fn compute_next_move_with_stats(&mut self) -> Result<MoveResult> {
        let start = Instant::now();

        if let Some(winner) = self.winner() {
            return Err(Error::GameOver { winner });
        }
        if self.board.is_full() {
            return Err(Error::NoMovesAvailable);
        }

        if !self.first_move_taken {
            self.first_move_taken = true;
            if let Some(pos) = self.opening_move() {
                trace!("engine {} opening at {}", self.side, pos);
                self.play(pos);
                return Ok(MoveResult::opening(pos, start.elapsed().as_millis() as u64));
            }
        }

        let variant = self.search.variant();
        let params = self.search_params(variant);
        let result =
            Searcher::new(&params, &mut self.rng).search(&mut self.board, self.side, self.last_move);
        let pos = result.best_move.ok_or(Error::NoMovesAvailable)?;

        debug!(
            "engine {} {:?}: {} score {} ({} nodes)",
            self.side, variant, pos, result.score, result.nodes
        );
        self.play(pos);
        Ok(MoveResult::from_search(
            pos,
            &result,
            variant,
            start.elapsed().as_millis() as u64,
        ))
    }

    /// Start a new round with the same configuration.
    pub fn reset(&mut self) {
        self.board.clear();
        self.last_move = None;
        self.first_move_taken = false;
        self.rng = seeded_rng(&self.search);
    }

    /// Winner on the engine's board, if any
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        check_winner(&self.board, self.game.win_length)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side(&self) -> Mark {
        self.side
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        self.game
    }

    #[must_use]
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    #[must_use]
    pub fn variant(&self) -> SearchVariant {
        self.search.variant()
    }

    fn play(&mut self, pos: Pos) {
        self.board.place_stone(pos, self.side);
        self.last_move = Some(pos);
    }

    fn search_params(&self, variant: SearchVariant) -> SearchParams {
        let k = self.game.win_length;
        let locality = match (self.search.locality, self.last_move) {
            (true, Some(center)) => Some(Locality {
                center,
                radius: Locality::radius_for(variant, k, self.search.depth),
            }),
            _ => None,
        };
        SearchParams {
            win_length: k,
            depth_limit: self.search.depth_limit(),
            pruning: self.search.pruning,
            policy: MovePolicy {
                locality,
                randomize: self.search.randomize,
            },
        }
    }

    /// Central cell, or its diagonal neighbour when the center is taken.
    ///
    /// Returns `None` when neither is free (only possible on tiny boards); the
    /// caller then falls back to search.
    fn opening_move(&self) -> Option<Pos> {
        let c = self.game.center() as i32;
        [(c, c), (c - 1, c - 1), (c + 1, c + 1)]
            .into_iter()
            .filter_map(|(r, col)| Pos::checked(r, col, self.game.size))
            .find(|&pos| self.board.is_empty(pos))
    }
}

fn seeded_rng(search: &SearchConfig) -> Pcg64 {
    match search.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_rng(&mut rand::rng()),
    }
}
