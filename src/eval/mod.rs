//! Position evaluation for the depth-limited search

pub mod heuristic;

pub use heuristic::{evaluate, max_heuristic, win_score};
