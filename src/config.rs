//! Game and search configuration

use serde::{Deserialize, Serialize};

use crate::board::MAX_BOARD_SIZE;
use crate::error::{Error, Result};

/// Board geometry, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board
    pub size: usize,
    /// Marks in a row needed to win
    pub win_length: usize,
}

impl GameConfig {
    pub fn new(size: usize, win_length: usize) -> Result<Self> {
        let config = Self { size, win_length };
        config.validate()?;
        Ok(config)
    }

    /// Reject boards outside `1..=MAX_BOARD_SIZE` and win lengths outside `1..=size`.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(Error::InvalidBoardSize { size: self.size });
        }
        if self.win_length == 0 || self.win_length > self.size {
            return Err(Error::InvalidWinLength {
                win_length: self.win_length,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Central cell coordinate, `⌊N/2⌋`
    #[inline]
    pub fn center(&self) -> usize {
        self.size / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            win_length: 3,
        }
    }
}

/// Which recursion the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchVariant {
    /// Full-depth minimax
    Minimax,
    /// Full-depth minimax with alpha-beta pruning
    AlphaBeta,
    /// Depth-limited minimax with heuristic cutoff
    DepthLimited,
    /// Depth-limited minimax with alpha-beta pruning
    DepthLimitedAlphaBeta,
}

/// Search options chosen once before play begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth limit in plies, 0 = search to the end of the game
    pub depth: u8,
    /// Enable alpha-beta pruning
    pub pruning: bool,
    /// Only consider moves near the last move on the real board
    pub locality: bool,
    /// Shuffle candidate moves before expanding them
    pub randomize: bool,
    /// Seed for the move-ordering RNG; random when absent
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn new(depth: u8, pruning: bool, locality: bool, randomize: bool) -> Self {
        Self {
            depth,
            pruning,
            locality,
            randomize,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Depth limit, `None` for a full search
    #[inline]
    pub fn depth_limit(&self) -> Option<u8> {
        (self.depth > 0).then_some(self.depth)
    }

    /// A non-zero depth must be odd so every horizon node is evaluated right
    /// after the engine's own move.
    pub fn validate(&self) -> Result<()> {
        if self.depth > 0 && self.depth % 2 == 0 {
            return Err(Error::DepthParity { depth: self.depth });
        }
        Ok(())
    }

    pub fn variant(&self) -> SearchVariant {
        match (self.depth_limit().is_some(), self.pruning) {
            (false, false) => SearchVariant::Minimax,
            (false, true) => SearchVariant::AlphaBeta,
            (true, false) => SearchVariant::DepthLimited,
            (true, true) => SearchVariant::DepthLimitedAlphaBeta,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(0, false, false, false)
    }
}
