//! Heuristic evaluation at the search horizon
//!
//! The score looks only at the four lines through the anchor (the last mark
//! placed). Each line is split into the half before and the half after the
//! anchor, each at most `k - 1` cells long. A half contributes the square of
//! the plain sum of its cell values, so dense neighbourhoods score
//! super-linearly whether they belong to the mover (extension) or to the
//! opponent (a block).
//!
//! Orientation: the raw magnitude credits the side that placed the anchor.
//! It is returned positive when that side is X (the maximizer) and negated
//! when it is O, so larger is always better for X, matching the minimax
//! convention used by the search.

use crate::board::{Board, Mark, Pos};
use crate::rules::win::DIRECTIONS;

/// Upper bound on `|evaluate(..)|` for win length `k`: eight halves of
/// `k - 1` cells each.
#[inline]
pub fn max_heuristic(win_length: usize) -> f64 {
    let half = win_length.saturating_sub(1) as f64;
    8.0 * half * half
}

/// Value assigned to a won position, strictly above any heuristic score
#[inline]
pub fn win_score(win_length: usize) -> f64 {
    let k = win_length as f64;
    8.0 * k * k
}

/// Evaluate the position around `anchor` from X's point of view.
///
/// Returns 0 when there is no anchor or the anchor cell is empty. Off-board
/// cells are excluded from the half sums.
#[must_use]
pub fn evaluate(board: &Board, anchor: Option<Pos>, win_length: usize) -> f64 {
    let Some(anchor) = anchor else {
        return 0.0;
    };
    let mover = board.get(anchor);
    if mover == Mark::Empty {
        return 0.0;
    }

    let raw: i32 = DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let before = half_line_sum(board, anchor, -dr, -dc, win_length);
            let after = half_line_sum(board, anchor, dr, dc, win_length);
            before * before + after * after
        })
        .sum();

    if mover.is_maximizer() {
        f64::from(raw)
    } else {
        -f64::from(raw)
    }
}

/// Sum of cell values walking away from `anchor` for up to `k - 1` steps
fn half_line_sum(board: &Board, anchor: Pos, dr: i32, dc: i32, win_length: usize) -> i32 {
    let (row, col) = (i32::from(anchor.row), i32::from(anchor.col));
    (1..win_length as i32)
        .map_while(|i| board.get_checked(row + dr * i, col + dc * i))
        .map(Mark::value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_anchor_is_neutral() {
        let board = Board::new(3);
        assert_eq!(evaluate(&board, None, 3), 0.0);
        assert_eq!(evaluate(&board, Some(Pos::new(1, 1)), 3), 0.0);
    }

    #[test]
    fn test_isolated_mark_scores_zero() {
        let mut board = Board::new(5);
        board.place_stone(Pos::new(2, 2), Mark::X);
        assert_eq!(evaluate(&board, Some(Pos::new(2, 2)), 3), 0.0);
    }

    #[test]
    fn test_squares_half_line_sums() {
        let mut board = Board::new(5);
        board.place_stone(Pos::new(2, 2), Mark::X);
        board.place_stone(Pos::new(2, 3), Mark::X);
        board.place_stone(Pos::new(2, 4), Mark::X);
        // Right half of the row sums to 2
        assert_eq!(evaluate(&board, Some(Pos::new(2, 2)), 3), 4.0);
    }

    #[test]
    fn test_blocking_scores_for_blocker() {
        let mut board = Board::new(5);
        board.place_stone(Pos::new(2, 0), Mark::X);
        board.place_stone(Pos::new(2, 1), Mark::X);
        board.place_stone(Pos::new(2, 2), Mark::O);
        // Left half sums to +2, squared, credited to O (negative)
        assert_eq!(evaluate(&board, Some(Pos::new(2, 2)), 3), -4.0);
    }

    #[test]
    fn test_mixed_half_sums_cancel() {
        let mut board = Board::new(5);
        board.place_stone(Pos::new(2, 2), Mark::X);
        board.place_stone(Pos::new(2, 3), Mark::X);
        board.place_stone(Pos::new(2, 4), Mark::O);
        assert_eq!(evaluate(&board, Some(Pos::new(2, 2)), 3), 0.0);
    }

    #[test]
    fn test_orientation_is_antisymmetric() {
        let mut x_board = Board::new(4);
        x_board.place_stone(Pos::new(0, 0), Mark::X);
        x_board.place_stone(Pos::new(1, 1), Mark::X);

        let mut o_board = Board::new(4);
        o_board.place_stone(Pos::new(0, 0), Mark::O);
        o_board.place_stone(Pos::new(1, 1), Mark::O);

        let anchor = Some(Pos::new(1, 1));
        assert_eq!(evaluate(&x_board, anchor, 3), -evaluate(&o_board, anchor, 3));
        assert!(evaluate(&x_board, anchor, 3) > 0.0);
    }

    #[test]
    fn test_bounded_below_win_score() {
        // Anchor at the center of a full board of X
        let mut board = Board::new(5);
        for idx in 0..25 {
            board.place_stone(Pos::from_index(idx, 5), Mark::X);
        }
        let score = evaluate(&board, Some(Pos::new(2, 2)), 3);
        assert_eq!(score, max_heuristic(3));
        assert!(score < win_score(3));
    }
}
