//! Board representation for k-in-a-row tic-tac-toe

pub mod board;


// Re-exports
pub use board::Board;

/// Largest supported board side (coordinates are stored as `u8`)
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Cell marks.
///
/// `X` is the maximizing side (+1), `O` the minimizing side (-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Signed cell value: X = +1, O = -1, Empty = 0
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
            Mark::Empty => 0,
        }
    }

    #[inline]
    pub fn is_maximizer(self) -> bool {
        self == Mark::X
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a position from signed coordinates, `None` if outside an `size`×`size` grid
    #[inline]
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Self> {
        if row >= 0 && (row as usize) < size && col >= 0 && (col as usize) < size {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Euclidean distance between two cells
    #[inline]
    pub fn distance(self, other: Pos) -> f64 {
        let dr = f64::from(self.row) - f64::from(other.row);
        let dc = f64::from(self.col) - f64::from(other.col);
        (dr * dr + dc * dc).sqrt()
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
