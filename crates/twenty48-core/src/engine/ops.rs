use rand::seq::SliceRandom;
use rand::Rng;

use super::state::{Board, Cells, Move, Score, SIZE, WINNING_TILE};

/// Result of sliding a board in one direction, before any tile spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOutcome {
    /// The board after sliding and merging.
    pub board: Board,
    /// Score gained from merges: the value of each newly formed tile,
    /// counted once per merge.
    pub gained: Score,
    /// Whether any cell changed position or value.
    pub moved: bool,
}

/// Slide/merge tiles in the given direction. No randomness.
///
/// Every direction is expressed through the compact-left core by wrapping it
/// in reversible transforms: `right` reverses each row around it, `up`
/// transposes around it, `down` does both.
pub fn slide(board: Board, direction: Move) -> SlideOutcome {
    let mut cells = board.into_cells();
    let gained = match direction {
        Move::Left => compact_left(&mut cells),
        Move::Right => {
            reverse_rows(&mut cells);
            let gained = compact_left(&mut cells);
            reverse_rows(&mut cells);
            gained
        }
        Move::Up => {
            transpose(&mut cells);
            let gained = compact_left(&mut cells);
            transpose(&mut cells);
            gained
        }
        Move::Down => {
            transpose(&mut cells);
            reverse_rows(&mut cells);
            let gained = compact_left(&mut cells);
            reverse_rows(&mut cells);
            transpose(&mut cells);
            gained
        }
    };
    let out = Board::from_cells(cells);
    SlideOutcome {
        board: out,
        gained,
        moved: out != board || gained > 0,
    }
}

/// Like [`slide`] but returns just the resulting board.
pub fn shift(board: Board, direction: Move) -> Board {
    slide(board, direction).board
}

/// Compact every row toward the left edge, merging equal neighbors.
/// Returns the total score gained from merges.
fn compact_left(cells: &mut Cells) -> Score {
    let mut gained = 0;
    for row in cells.iter_mut() {
        gained += compact_row(row);
    }
    gained
}

/// Compact one row: drop zeros, merge equal adjacent pairs left to right,
/// pad with zeros on the right. The scan index advances after a merge, so a
/// freshly doubled tile is never merged again in the same pass.
fn compact_row(row: &mut [u32; SIZE]) -> Score {
    let mut tiles: Vec<u32> = row.iter().copied().filter(|&v| v != 0).collect();
    let mut gained = 0;
    let mut j = 0;
    while j + 1 < tiles.len() {
        if tiles[j] == tiles[j + 1] {
            tiles[j] *= 2;
            gained += Score::from(tiles[j]);
            tiles.remove(j + 1);
        }
        j += 1;
    }
    row.fill(0);
    row[..tiles.len()].copy_from_slice(&tiles);
    gained
}

/// In-place transpose across the main diagonal: (i, j) swaps with (j, i).
pub(crate) fn transpose(cells: &mut Cells) {
    for i in 0..SIZE {
        for j in (i + 1)..SIZE {
            let tmp = cells[i][j];
            cells[i][j] = cells[j][i];
            cells[j][i] = tmp;
        }
    }
}

/// Reverse each row in place.
pub(crate) fn reverse_rows(cells: &mut Cells) {
    for row in cells.iter_mut() {
        row.reverse();
    }
}

/// Place a 2 or 4 (equal odds) on a uniformly chosen empty cell, using the
/// provided RNG. A full board is returned unchanged.
pub fn with_random_tile<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Board {
    let empty = empty_cells(board);
    match empty.choose(rng) {
        Some(&(row, col)) => {
            let mut cells = board.into_cells();
            cells[row][col] = rng.gen_range(1..=2u32) * 2;
            Board::from_cells(cells)
        }
        None => board,
    }
}

/// Coordinates of all empty cells in row-major order.
pub fn empty_cells(board: Board) -> Vec<(usize, usize)> {
    let mut empty = Vec::new();
    for (i, row) in board.cells().iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            if val == 0 {
                empty.push((i, j));
            }
        }
    }
    empty
}

/// Count the number of empty cells.
pub fn count_empty(board: Board) -> usize {
    board.cells().iter().flatten().filter(|&&v| v == 0).count()
}

/// True iff the board has no empty cell and no two horizontally or
/// vertically adjacent cells hold equal values. Edge cells skip the missing
/// neighbor check.
pub fn is_game_over(board: Board) -> bool {
    let cells = board.cells();
    for i in 0..SIZE {
        for j in 0..SIZE {
            if cells[i][j] == 0 {
                return false;
            }
            if j + 1 < SIZE && cells[i][j] == cells[i][j + 1] {
                return false;
            }
            if i + 1 < SIZE && cells[i][j] == cells[i + 1][j] {
                return false;
            }
        }
    }
    true
}

/// True iff a tile holds exactly [`WINNING_TILE`]. Recomputed per call;
/// higher tiles do not count on their own.
pub fn has_won(board: Board) -> bool {
    board.cells().iter().flatten().any(|&v| v == WINNING_TILE)
}

/// The largest tile value on the board (0 on an empty board).
pub fn highest_tile(board: Board) -> u32 {
    board.cells().iter().flatten().copied().max().unwrap_or(0)
}

pub(crate) fn format_val(val: u32) -> String {
    match val {
        0 => String::from("       "),
        x => {
            let mut x = x.to_string();
            while x.len() < 7 {
                match x.len() {
                    6 => x = format!(" {}", x),
                    _ => x = format!(" {} ", x),
                }
            }
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn it_compact_row() {
        let mut r = [0, 0, 0, 0];
        assert_eq!(compact_row(&mut r), 0);
        assert_eq!(r, [0, 0, 0, 0]);

        let mut r = [2, 4, 2, 4];
        assert_eq!(compact_row(&mut r), 0);
        assert_eq!(r, [2, 4, 2, 4]);

        let mut r = [2, 0, 0, 2];
        assert_eq!(compact_row(&mut r), 4);
        assert_eq!(r, [4, 0, 0, 0]);

        let mut r = [2, 0, 2, 4];
        assert_eq!(compact_row(&mut r), 4);
        assert_eq!(r, [4, 4, 0, 0]);

        let mut r = [2, 2, 4, 4];
        assert_eq!(compact_row(&mut r), 12);
        assert_eq!(r, [4, 8, 0, 0]);
    }

    #[test]
    fn it_merges_each_tile_at_most_once() {
        let mut r = [2, 2, 2, 2];
        assert_eq!(compact_row(&mut r), 8);
        assert_eq!(r, [4, 4, 0, 0]);

        let mut r = [4, 4, 8, 0];
        assert_eq!(compact_row(&mut r), 8);
        assert_eq!(r, [8, 8, 0, 0]);
    }

    #[test]
    fn test_slide_left() {
        let b = Board::from_cells([
            [2, 0, 2, 4],
            [0, 0, 0, 0],
            [4, 4, 4, 0],
            [2, 4, 2, 4],
        ]);
        let out = slide(b, Move::Left);
        assert_eq!(
            out.board.into_cells(),
            [
                [4, 4, 0, 0],
                [0, 0, 0, 0],
                [8, 4, 0, 0],
                [2, 4, 2, 4],
            ]
        );
        assert_eq!(out.gained, 12);
        assert!(out.moved);
    }

    #[test]
    fn test_slide_right() {
        let b = Board::from_cells([
            [2, 0, 2, 4],
            [0, 0, 0, 0],
            [4, 4, 4, 0],
            [2, 4, 2, 4],
        ]);
        let out = slide(b, Move::Right);
        assert_eq!(
            out.board.into_cells(),
            [
                [0, 0, 4, 4],
                [0, 0, 0, 0],
                [0, 0, 4, 8],
                [2, 4, 2, 4],
            ]
        );
        assert_eq!(out.gained, 12);
        assert!(out.moved);
    }

    #[test]
    fn test_slide_up() {
        let b = Board::from_cells([
            [2, 0, 4, 2],
            [2, 0, 4, 4],
            [0, 2, 4, 2],
            [4, 2, 0, 4],
        ]);
        let out = slide(b, Move::Up);
        assert_eq!(
            out.board.into_cells(),
            [
                [4, 4, 8, 2],
                [4, 0, 4, 4],
                [0, 0, 0, 2],
                [0, 0, 0, 4],
            ]
        );
        assert_eq!(out.gained, 16);
        assert!(out.moved);
    }

    #[test]
    fn test_slide_down() {
        let b = Board::from_cells([
            [2, 0, 4, 2],
            [2, 0, 4, 4],
            [0, 2, 4, 2],
            [4, 2, 0, 4],
        ]);
        let out = slide(b, Move::Down);
        assert_eq!(
            out.board.into_cells(),
            [
                [0, 0, 0, 2],
                [0, 0, 0, 4],
                [4, 0, 4, 2],
                [4, 4, 8, 4],
            ]
        );
        assert_eq!(out.gained, 16);
        assert!(out.moved);
    }

    #[test]
    fn it_reports_no_move_on_locked_board() {
        let b = Board::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        for dir in Move::ALL {
            let out = slide(b, dir);
            assert!(!out.moved);
            assert_eq!(out.gained, 0);
            assert_eq!(out.board, b);
        }
    }

    #[test]
    fn it_conserves_tile_sum_through_merges() {
        let b = Board::from_cells([
            [2, 2, 4, 4],
            [8, 8, 0, 2],
            [0, 2, 2, 0],
            [16, 0, 16, 2],
        ]);
        let sum = |board: Board| -> u64 {
            board.cells().iter().flatten().map(|&v| u64::from(v)).sum()
        };
        for dir in Move::ALL {
            let out = slide(b, dir);
            assert_eq!(sum(out.board), sum(b));
        }
    }

    #[test]
    fn it_spawns_only_on_an_empty_cell() {
        let mut cells = [[2u32; SIZE]; SIZE];
        cells[1][2] = 0;
        let b = Board::from_cells(cells);
        let mut rng = StdRng::seed_from_u64(9);
        let spawned = with_random_tile(b, &mut rng);
        let val = spawned.get(1, 2);
        assert!(val == 2 || val == 4);
        for i in 0..SIZE {
            for j in 0..SIZE {
                if (i, j) != (1, 2) {
                    assert_eq!(spawned.get(i, j), b.get(i, j));
                }
            }
        }
    }

    #[test]
    fn it_spawn_on_full_board_is_a_noop() {
        let b = Board::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(with_random_tile(b, &mut rng), b);
    }

    #[test]
    fn it_spawn_fills_the_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = Board::EMPTY;
        for _ in 0..16 {
            board = with_random_tile(board, &mut rng);
        }
        assert_eq!(count_empty(board), 0);
        assert!(board.cells().iter().flatten().all(|&v| v == 2 || v == 4));
    }

    #[test]
    fn it_is_not_over_with_an_empty_cell() {
        let mut cells = [[2u32; SIZE]; SIZE];
        cells[3][3] = 0;
        assert!(!is_game_over(Board::from_cells(cells)));
        assert!(!is_game_over(Board::EMPTY));
    }

    #[test]
    fn it_is_over_on_a_checkerboard() {
        let b = Board::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(is_game_over(b));
    }

    #[test]
    fn it_is_not_over_with_an_adjacent_pair() {
        // Horizontal pair in the last row.
        let b = Board::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 8, 8],
        ]);
        assert!(!is_game_over(b));

        // Vertical pair in the last column.
        let b = Board::from_cells([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 8],
            [4, 2, 4, 8],
        ]);
        assert!(!is_game_over(b));
    }

    #[test]
    fn it_has_won_only_on_exact_2048() {
        let mut cells = [[0u32; SIZE]; SIZE];
        cells[0][0] = 1024;
        assert!(!has_won(Board::from_cells(cells)));

        cells[0][0] = 2048;
        assert!(has_won(Board::from_cells(cells)));

        // A higher tile alone does not satisfy the check.
        cells[0][0] = 4096;
        assert!(!has_won(Board::from_cells(cells)));

        cells[1][1] = 2048;
        assert!(has_won(Board::from_cells(cells)));
    }

    #[test]
    fn it_highest_tile() {
        assert_eq!(highest_tile(Board::EMPTY), 0);
        let b = Board::from_cells([
            [2, 4, 2, 4],
            [4, 256, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert_eq!(highest_tile(b), 256);
    }

    #[test]
    fn it_count_empty() {
        assert_eq!(count_empty(Board::EMPTY), 16);
        let mut cells = [[0u32; SIZE]; SIZE];
        cells[0][0] = 2;
        cells[2][3] = 4;
        assert_eq!(count_empty(Board::from_cells(cells)), 14);
        assert_eq!(
            empty_cells(Board::from_cells(cells)).len(),
            14
        );
    }

    #[test]
    fn it_transpose_and_reverse_are_involutions() {
        let cells = [
            [2, 4, 8, 16],
            [0, 2, 0, 4],
            [32, 0, 2, 0],
            [4, 8, 0, 2],
        ];
        let mut t = cells;
        transpose(&mut t);
        assert_eq!(t[0], [2, 0, 32, 4]);
        transpose(&mut t);
        assert_eq!(t, cells);

        let mut r = cells;
        reverse_rows(&mut r);
        assert_eq!(r[0], [16, 8, 4, 2]);
        reverse_rows(&mut r);
        assert_eq!(r, cells);
    }
}
