use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ops;

/// Board side length. The grid is always `SIZE` x `SIZE`.
pub const SIZE: usize = 4;

/// The tile value that wins the game.
pub const WINNING_TILE: u32 = 2048;

/// Raw cell matrix in row-major order. 0 is empty; nonzero cells hold the
/// actual tile value (2, 4, 8, ...).
pub type Cells = [[u32; SIZE]; SIZE];

/// Score accumulator type.
pub type Score = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions in a fixed order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
}

/// A 4x4 2048 grid of tile values.
///
/// `Board` is a plain `Copy` value; every operation returns a new board and
/// leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board(pub(crate) Cells);

impl Board {
    /// A constant empty board (all zeros).
    pub const EMPTY: Board = Board([[0; SIZE]; SIZE]);

    /// Construct a `Board` from a cell matrix.
    #[inline]
    pub fn from_cells(cells: Cells) -> Self {
        Board(cells)
    }

    /// Consume this `Board`, returning the cell matrix.
    #[inline]
    pub fn into_cells(self) -> Cells {
        self.0
    }

    /// Borrow the cell matrix.
    #[inline]
    pub fn cells(&self) -> &Cells {
        &self.0
    }

    /// Value of the cell at (row, col); 0 means empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    /// Slide/merge tiles toward `direction`, reporting the new board, the
    /// score gained from merges, and whether anything changed. No spawn.
    ///
    /// ```
    /// use twenty48_core::engine::{Board, Move};
    ///
    /// let b = Board::from_cells([
    ///     [2, 0, 2, 4],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    /// ]);
    /// let out = b.slide(Move::Left);
    /// assert_eq!(out.board.cells()[0], [4, 4, 0, 0]);
    /// assert_eq!(out.gained, 4);
    /// assert!(out.moved);
    /// ```
    #[inline]
    pub fn slide(self, direction: Move) -> ops::SlideOutcome {
        ops::slide(self, direction)
    }

    /// Like [`Board::slide`] but returns just the resulting board.
    #[inline]
    pub fn shift(self, direction: Move) -> Self {
        ops::shift(self, direction)
    }

    /// Place a 2 or 4 (equal odds) on a uniformly chosen empty cell, using
    /// the provided RNG. A full board is returned unchanged.
    ///
    /// Deterministic example with a seeded RNG:
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use twenty48_core::engine::Board;
    ///
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let b = Board::EMPTY.with_random_tile(&mut rng).with_random_tile(&mut rng);
    /// assert_eq!(b.count_empty(), 14);
    /// ```
    #[inline]
    pub fn with_random_tile<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        ops::with_random_tile(self, rng)
    }

    /// Convenience: like `with_random_tile` but uses the thread-local RNG.
    #[inline]
    pub fn with_random_tile_thread(self) -> Self {
        let mut rng = rand::thread_rng();
        ops::with_random_tile(self, &mut rng)
    }

    /// True iff no empty cell remains and no adjacent pair of equal tiles
    /// exists.
    #[inline]
    pub fn is_game_over(self) -> bool {
        ops::is_game_over(self)
    }

    /// True iff a tile holds exactly [`WINNING_TILE`].
    #[inline]
    pub fn has_won(self) -> bool {
        ops::has_won(self)
    }

    /// The largest tile value on the board (0 on an empty board).
    #[inline]
    pub fn highest_tile(self) -> u32 {
        ops::highest_tile(self)
    }

    /// Count the number of empty cells.
    #[inline]
    pub fn count_empty(self) -> usize {
        ops::count_empty(self)
    }

    /// Coordinates of all empty cells in row-major order.
    #[inline]
    pub fn empty_cells(self) -> Vec<(usize, usize)> {
        ops::empty_cells(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board: Vec<_> = self.0.iter().flatten().map(|&v| ops::format_val(v)).collect();
        write!(
            f,
            "\n{}|{}|{}|{}\n--------------------------------\n{}|{}|{}|{}\n--------------------------------\n{}|{}|{}|{}\n--------------------------------\n{}|{}|{}|{}\n",
            board[0],
            board[1],
            board[2],
            board[3],
            board[4],
            board[5],
            board[6],
            board[7],
            board[8],
            board[9],
            board[10],
            board[11],
            board[12],
            board[13],
            board[14],
            board[15]
        )
    }
}

impl From<Cells> for Board {
    fn from(cells: Cells) -> Self {
        Board::from_cells(cells)
    }
}

impl From<Board> for Cells {
    fn from(board: Board) -> Self {
        board.into_cells()
    }
}
