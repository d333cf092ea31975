//! Game-tree search engine for m×n, k-in-a-row tic-tac-toe
//!
//! Computes moves on a square board of configurable size and win length
//! using minimax search, optionally with:
//! - Alpha-beta pruning
//! - A depth limit with a positional heuristic at the horizon
//! - A locality filter around the last move played
//! - Seeded random move ordering
//!
//! # Architecture
//!
//! - [`board`]: Board, marks and coordinates
//! - [`rules`]: Win detection (anchored and full-board)
//! - [`eval`]: Horizon heuristic
//! - [`search`]: Move generation and the minimax / alpha-beta recursion
//! - [`engine`]: Per-side facade used by the game loop
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Engine, Mark, SearchConfig};
//!
//! let mut x = Engine::new(3, 3, Mark::X).unwrap();
//! let mut o = Engine::new(3, 3, Mark::O).unwrap();
//! o.configure(SearchConfig::new(0, true, false, false)).unwrap();
//!
//! // X opens in the center, O answers
//! let first = x.compute_next_move().unwrap();
//! o.apply_opponent_move(first).unwrap();
//! let reply = o.compute_next_move().unwrap();
//! x.apply_opponent_move(reply).unwrap();
//! println!("X played {first}, O replied {reply}");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos};
pub use config::{GameConfig, SearchConfig, SearchVariant};
pub use engine::{Engine, MoveResult, SearchType};
pub use error::{Error, Result};
