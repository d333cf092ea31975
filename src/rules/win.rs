//! Win condition checking for k-in-a-row
//!
//! A side wins with `k` contiguous marks along a row, column or diagonal.
//! During search only the four lines through the last placed mark (the
//! anchor) can have changed, so [`winner_at`] scans a `2k-1` window around
//! it. [`check_winner`] is the full-board fallback used when no anchor is
//! known.

use crate::board::{Board, Mark, Pos};

/// Direction vectors for line checking (4 directions)
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Extend a signed run with the next cell value.
///
/// Empty cells end the run. An opposing mark starts a new run of its own
/// sign instead of pausing the current one.
#[inline]
fn extend_run(run: i32, value: i32) -> i32 {
    if value == 0 {
        0
    } else if run > 0 && value < 0 {
        -1
    } else if run < 0 && value > 0 {
        1
    } else {
        run + value
    }
}

#[inline]
fn run_winner(run: i32, win_length: i32) -> Option<Mark> {
    if run == win_length {
        Some(Mark::X)
    } else if run == -win_length {
        Some(Mark::O)
    } else {
        None
    }
}

/// Check whether a line of `win_length` passes through `anchor`.
///
/// Only the four lines through the anchor are inspected, each within
/// `win_length - 1` cells on either side. Off-board cells are skipped.
#[inline]
pub fn winner_at(board: &Board, anchor: Pos, win_length: usize) -> Option<Mark> {
    let k = win_length as i32;
    let (row, col) = (i32::from(anchor.row), i32::from(anchor.col));

    for (dr, dc) in DIRECTIONS {
        let mut run = 0i32;
        for i in -(k - 1)..=(k - 1) {
            let Some(mark) = board.get_checked(row + dr * i, col + dc * i) else {
                continue;
            };
            run = extend_run(run, mark.value());
            if let Some(winner) = run_winner(run, k) {
                return Some(winner);
            }
        }
    }
    None
}

/// Check every line on the board for a winner.
///
/// Walks each row, column and both diagonal families from its first cell,
/// resetting the run at the start of every line.
pub fn check_winner(board: &Board, win_length: usize) -> Option<Mark> {
    let k = win_length as i32;
    let size = board.size() as i32;

    for (dr, dc) in DIRECTIONS {
        for r in 0..size {
            for c in 0..size {
                // Only start at cells whose predecessor is off the board
                if board.get_checked(r - dr, c - dc).is_some() {
                    continue;
                }
                let mut run = 0i32;
                let (mut rr, mut cc) = (r, c);
                while let Some(mark) = board.get_checked(rr, cc) {
                    run = extend_run(run, mark.value());
                    if let Some(winner) = run_winner(run, k) {
                        return Some(winner);
                    }
                    rr += dr;
                    cc += dc;
                }
            }
        }
    }
    None
}

/// Terminal test for a position.
///
/// Uses the anchored scan when the last move is known, the full-board scan
/// otherwise.
#[inline]
pub fn winner(board: &Board, anchor: Option<Pos>, win_length: usize) -> Option<Mark> {
    match anchor {
        Some(pos) => winner_at(board, pos, win_length),
        None => check_winner(board, win_length),
    }
}
