use rand::Rng;

use super::ops;
use super::state::{Board, Cells, Move, Score};

/// A single game: board plus score accumulator.
///
/// Grid and score are created together (two tiles pre-placed), mutated only
/// through [`Game::apply_move`], and replaced wholesale by [`Game::reset`].
/// The score only ever grows, by the value of each newly formed merged tile.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use twenty48_core::engine::Game;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let game = Game::new(&mut rng);
/// assert_eq!(game.board().count_empty(), 14);
/// assert_eq!(game.score(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    score: Score,
}

impl Game {
    /// Start a fresh game: empty grid with two spawned tiles, score 0.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let board = Board::EMPTY.with_random_tile(rng).with_random_tile(rng);
        Game { board, score: 0 }
    }

    /// Convenience: like `new` but uses the thread-local RNG.
    pub fn new_thread() -> Self {
        let mut rng = rand::thread_rng();
        Self::new(&mut rng)
    }

    /// Discard the current game and start over.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Game::new(rng);
    }

    /// Slide and merge all tiles toward `direction`, reporting whether the
    /// grid changed.
    ///
    /// On a successful move the merge gains are added to the score and
    /// exactly one new tile is spawned before returning. A move that changes
    /// nothing leaves grid and score untouched and spawns nothing.
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use twenty48_core::engine::{Game, Move};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut game = Game::new(&mut rng);
    /// let before = game.score();
    /// let _ = game.apply_move(Move::Left, &mut rng);
    /// assert!(game.score() >= before);
    /// ```
    pub fn apply_move<R: Rng + ?Sized>(&mut self, direction: Move, rng: &mut R) -> bool {
        let outcome = ops::slide(self.board, direction);
        if !outcome.moved {
            return false;
        }
        self.score += outcome.gained;
        self.board = outcome.board.with_random_tile(rng);
        true
    }

    /// Convenience: like `apply_move` but uses the thread-local RNG.
    pub fn apply_move_thread(&mut self, direction: Move) -> bool {
        let mut rng = rand::thread_rng();
        self.apply_move(direction, &mut rng)
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Read-only snapshot of the 4x4 cell values.
    #[inline]
    pub fn grid(&self) -> Cells {
        self.board.into_cells()
    }

    /// The accumulated score.
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// True iff no empty cell remains and no adjacent pair can merge.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// True iff a 2048 tile is currently on the board.
    #[inline]
    pub fn has_won(&self) -> bool {
        self.board.has_won()
    }

    /// The largest tile value on the board.
    #[inline]
    pub fn highest_tile(&self) -> u32 {
        self.board.highest_tile()
    }
}
