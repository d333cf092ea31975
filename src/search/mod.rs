//! Search module for k-in-a-row
//!
//! Contains:
//! - Candidate move generation with locality filtering and shuffling
//! - Minimax search with optional depth limit and alpha-beta pruning

pub mod minimax;
pub mod movegen;

pub use minimax::{SearchParams, SearchResult, Searcher};
pub use movegen::{Locality, MovePolicy};
