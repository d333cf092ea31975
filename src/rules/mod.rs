//! Game rules for k-in-a-row tic-tac-toe
//!
//! The only rule with state is the win condition: `k` contiguous marks of
//! one side along a row, column or diagonal.

pub mod win;

pub use win::{check_winner, winner, winner_at};
