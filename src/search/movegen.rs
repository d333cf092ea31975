//! Candidate move generation
//!
//! Moves are the empty cells in row-major order. Two optional policies wrap
//! the base list:
//! - **Locality**: keep only cells strictly closer than a radius to the last
//!   move applied to the real board. This is unsound on purpose; a winning
//!   reply outside the radius is never considered. It exists to cut the
//!   branching factor on large boards.
//! - **Randomization**: shuffle the candidates with the injected RNG. Values
//!   are unchanged, only which of several equal moves is found first.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::board::{Board, Pos};
use crate::config::SearchVariant;

/// Locality restriction around a fixed center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locality {
    pub center: Pos,
    pub radius: f64,
}

impl Locality {
    /// Radius used by `variant`: the win length, or `min(k, depth + 1)` for the
    /// depth-limited alpha-beta search.
    pub fn radius_for(variant: SearchVariant, win_length: usize, depth: u8) -> f64 {
        match variant {
            SearchVariant::DepthLimitedAlphaBeta => win_length.min(depth as usize + 1) as f64,
            _ => win_length as f64,
        }
    }

    #[inline]
    pub fn allows(&self, pos: Pos) -> bool {
        pos.distance(self.center) < self.radius
    }
}

/// Move generation policy for one search
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovePolicy {
    pub locality: Option<Locality>,
    pub randomize: bool,
}

impl MovePolicy {
    /// Generate candidate moves for `board`.
    ///
    /// When the locality filter leaves nothing while empty cells remain, the
    /// unfiltered list is used so a non-full board never reads as a draw.
    pub fn generate_moves(&self, board: &Board, rng: &mut dyn RngCore) -> Vec<Pos> {
        let mut moves: Vec<Pos> = match self.locality {
            Some(locality) => {
                let near: Vec<Pos> = board.empty_cells().filter(|&p| locality.allows(p)).collect();
                if near.is_empty() {
                    board.empty_cells().collect()
                } else {
                    near
                }
            }
            None => board.empty_cells().collect(),
        };

        if self.randomize {
            moves.shuffle(rng);
        }
        moves
    }
}
