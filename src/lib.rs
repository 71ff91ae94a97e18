// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a Sudoku engine whose central operation is
//! constraint propagation over per-cell candidate sets. It supports the
//! following key features:
//!
//! * Parsing and printing boards of any perfect-square size (4x4, 9x9,
//! 16x16, ...)
//! * Incremental assignment with immediate contradiction detection
//! * Enumerating all, or a bounded number of, solutions of a partial board
//! by backtracking search
//! * Generating random puzzles with exactly one solution, optionally with
//! 180°-rotationally symmetric clue placement
//!
//! Note in this introduction we will mostly be using 4x4 boards due to their
//! simpler nature. These are divided in 4 2x2 regions, each with the digits 1
//! to 4, just like each row and column.
//!
//! # Boards and propagation
//!
//! A [Board] stores, for every cell, either a resolved value or the set of
//! values not yet ruled out for it (its *candidates*). Assigning a value with
//! [Board::set] eliminates that value from every other cell in the same row,
//! column, and region. Any cell thereby reduced to a single candidate is
//! assigned in turn, so one assignment can cascade into many. A cascade that
//! contradicts an earlier assignment fails with
//! [InconsistentAssignment](error::BoardError::InconsistentAssignment).
//!
//! ```
//! use sudoku_cascade::Board;
//!
//! let mut board = Board::empty(4).unwrap();
//! board.set(0, 0, 1).unwrap();
//!
//! // 1 cannot appear twice in the first column.
//! assert!(board.set(0, 1, 1).is_err());
//! ```
//!
//! # Parsing and printing boards
//!
//! See [Board::parse] for the exact format. Since known values are applied
//! through [Board::set], parsing alone can resolve cells that were not given
//! in the input.
//!
//! ```
//! use sudoku_cascade::Board;
//!
//! let board = Board::parse(4, "1 2 3 4  3 4 1 2  4 3 2 1  2 1 4 3").unwrap();
//! assert!(board.is_solved());
//! println!("{}", board);
//! ```
//!
//! # Solving boards
//!
//! The [solver](solver) module enumerates the completions of a partial board
//! by backtracking search, optionally capped at a maximum number of
//! solutions. A cap of 2 makes for a fast uniqueness check.
//!
//! ```
//! use sudoku_cascade::{solver, Board};
//!
//! let board = Board::empty(4).unwrap();
//!
//! // An empty board has many completions; stop after the second.
//! let solutions = solver::solve(&board, Some(2));
//! assert_eq!(2, solutions.len());
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) produces a [Puzzle](generator::Puzzle)
//! consisting of clues and the full solution they force. Replaying the clues
//! on an empty board resolves every cell by propagation alone, which is what
//! guarantees the solution is unique.
//!
//! ```
//! use sudoku_cascade::Board;
//! use sudoku_cascade::generator::Generator;
//!
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate(9, false).unwrap();
//! let mut board = Board::empty(9).unwrap();
//!
//! for clue in &puzzle.clues {
//!     board.set(clue.column, clue.row, clue.value).unwrap();
//! }
//!
//! assert!(board.is_solved());
//! assert_eq!(puzzle.solution, board.to_grid());
//! ```

pub mod error;
pub mod generator;
pub mod solver;
pub mod util;

use crate::error::{BoardError, BoardResult};
use crate::generator::Puzzle;
use crate::util::ValueSet;

use std::fmt::{self, Display, Formatter};

/// The state of a single cell of a [Board].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {

    /// The cell is fixed to a single value.
    Resolved(usize),

    /// The cell is still undetermined; the set holds the values not yet
    /// ruled out for it. A stable candidate set contains at least two
    /// values, since a set reduced to one value is resolved by the cascade
    /// that reduced it. The one exception is a fresh 1x1 board, whose
    /// single cell starts out with the stable singleton set `{1}`.
    Candidates(ValueSet)
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

/// A Sudoku board of cells that are organized into square regions in a way
/// that makes the entire board a square. Each cell is either resolved to a
/// value or holds the set of candidate values not yet ruled out for it.
///
/// The board side length must be a positive perfect square; the region side
/// length is its square root. For ordinary Sudoku the size is 9 with 3x3
/// regions.
///
/// Unlike a plain grid of digits, a `Board` is mutated exclusively through
/// [Board::set] and [Board::remove], which enforce the
/// one-value-per-row/column/region rule by propagation (see the
/// [crate-level documentation](index.html)). `Clone` yields the independent
/// deep copy that backtracking search branches on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    size: usize,
    region_size: usize,
    cells: Vec<Cell>
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for column in 0..self.size {
                if column > 0 {
                    f.write_str(" ")?;
                }

                match &self.cells[index(column, row, self.size)] {
                    Cell::Resolved(value) => write!(f, "{}", value)?,
                    Cell::Candidates(candidates) => {
                        let values = candidates.iter()
                            .map(|value| value.to_string())
                            .collect::<String>();
                        write!(f, "[{}]", values)?
                    }
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl Board {

    /// Creates a new, empty board with the given side length, where every
    /// cell holds the full candidate set `1..=size`.
    ///
    /// # Arguments
    ///
    /// * `size`: The side length of the board. Must be a positive perfect
    /// square no greater than 64, since the region side length is its square
    /// root.
    ///
    /// # Errors
    ///
    /// `BoardError::InvalidSize` if `size` is zero, not a perfect square, or
    /// greater than 64.
    pub fn empty(size: usize) -> BoardResult<Board> {
        let region_size = (size as f64).sqrt() as usize;

        if size == 0 || size > ValueSet::MAX_BOUND ||
                region_size * region_size != size {
            return Err(BoardError::InvalidSize);
        }

        let cells = vec![Cell::Candidates(ValueSet::full(size)); size * size];

        Ok(Board {
            size,
            region_size,
            cells
        })
    }

    /// Parses a textual board representation into a board. The text consists
    /// of whitespace-separated tokens in row-major order, where each row is
    /// completed before the next one is started. Any token that parses as an
    /// integer is applied via [Board::set]; any other token (conventionally
    /// `.`) leaves its cell unresolved. Missing tokens at the end also leave
    /// their cells unresolved.
    ///
    /// As an example, `"1 2 3 4  3 4 1 2  4 3 2 1  2 1 4 3"` parses to a
    /// fully resolved 4x4 board.
    ///
    /// # Arguments
    ///
    /// * `size`: The side length of the board. Must be a positive perfect
    /// square no greater than 64.
    /// * `text`: The textual representation as described above.
    ///
    /// # Errors
    ///
    /// * `BoardError::InvalidSize` if `size` is invalid (see [Board::empty]).
    /// * `BoardError::InconsistentAssignment` if the known values contradict
    /// each other. The board state is not recoverable in that case; callers
    /// are expected to provide self-consistent input.
    pub fn parse(size: usize, text: &str) -> BoardResult<Board> {
        let mut board = Board::empty(size)?;

        for (i, token) in text.split_whitespace()
                .take(size * size)
                .enumerate() {
            if let Ok(value) = token.parse::<usize>() {
                board.set(i % size, i / size, value)?;
            }
        }

        Ok(board)
    }

    /// Gets the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the side length of one region, i.e. the square root of
    /// [Board::size].
    pub fn region_size(&self) -> usize {
        self.region_size
    }

    /// Gets the state of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Panics
    ///
    /// If `column` or `row` are out of bounds.
    pub fn cell(&self, column: usize, row: usize) -> &Cell {
        assert!(column < self.size && row < self.size,
            "cell coordinates out of bounds");
        &self.cells[index(column, row, self.size)]
    }

    fn inconsistent(column: usize, row: usize, value: usize) -> BoardError {
        BoardError::InconsistentAssignment {
            column,
            row,
            value
        }
    }

    /// Resolves the cell at the specified position to the given value and
    /// eliminates that value from every other cell in the same row, column,
    /// and region. Eliminations cascade: a cell whose candidates are reduced
    /// to a single value is resolved in turn (see [Board::remove]).
    ///
    /// Setting a cell to the value it is already resolved to is a no-op.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `value`: The value to assign. Assignable values are in
    /// `[1, size]`; anything else is inconsistent by definition.
    ///
    /// # Errors
    ///
    /// `BoardError::InconsistentAssignment` if the cell is resolved to a
    /// different value, if `value` is not among the cell's candidates, or if
    /// the triggered cascade contradicts an earlier assignment elsewhere on
    /// the board. The payload identifies the cell at which the contradiction
    /// surfaced. After an error the board state is partially propagated;
    /// callers that need to recover must retain a copy (the solver branches
    /// on clones, the generator restarts from empty).
    ///
    /// # Panics
    ///
    /// If `column` or `row` are out of bounds.
    pub fn set(&mut self, column: usize, row: usize, value: usize)
            -> BoardResult<()> {
        let size = self.size;

        assert!(column < size && row < size,
            "cell coordinates out of bounds");

        if value == 0 || value > size {
            return Err(Board::inconsistent(column, row, value));
        }

        match &self.cells[index(column, row, size)] {
            Cell::Resolved(current) =>
                return if *current == value {
                    Ok(())
                }
                else {
                    Err(Board::inconsistent(column, row, value))
                },
            Cell::Candidates(candidates) =>
                if !candidates.contains(value) {
                    return Err(Board::inconsistent(column, row, value));
                }
        }

        self.cells[index(column, row, size)] = Cell::Resolved(value);

        for other_column in 0..size {
            if other_column != column {
                self.remove(other_column, row, value)?;
            }
        }

        for other_row in 0..size {
            if other_row != row {
                self.remove(column, other_row, value)?;
            }
        }

        let region_column = column / self.region_size * self.region_size;
        let region_row = row / self.region_size * self.region_size;

        for other_row in region_row..(region_row + self.region_size) {
            for other_column in
                    region_column..(region_column + self.region_size) {
                if other_column != column || other_row != row {
                    self.remove(other_column, other_row, value)?;
                }
            }
        }

        Ok(())
    }

    /// Removes the given value from the candidates of the cell at the
    /// specified position. If exactly one candidate remains afterwards, the
    /// cell is resolved to it via [Board::set], which may cascade further.
    /// Removing a value that is not among the candidates, or from a cell
    /// resolved to a different value, is a no-op.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cell. Must be in the
    /// range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cell. Must be in the range
    /// `[0, size[`.
    /// * `value`: The value to eliminate. Values outside `[1, size]` are
    /// never candidates, so removing them is a no-op.
    ///
    /// # Errors
    ///
    /// `BoardError::InconsistentAssignment` if the cell is already resolved
    /// to exactly `value`, or if the removal would leave the cell with no
    /// candidates at all. This is how cascades detect that two assignments
    /// are incompatible.
    ///
    /// # Panics
    ///
    /// If `column` or `row` are out of bounds.
    pub fn remove(&mut self, column: usize, row: usize, value: usize)
            -> BoardResult<()> {
        assert!(column < self.size && row < self.size,
            "cell coordinates out of bounds");

        if value == 0 || value > self.size {
            return Ok(());
        }

        let forced = match &mut self.cells[index(column, row, self.size)] {
            Cell::Resolved(current) =>
                return if *current == value {
                    Err(Board::inconsistent(column, row, value))
                }
                else {
                    Ok(())
                },
            Cell::Candidates(candidates) => {
                if !candidates.remove(value) {
                    return Ok(());
                }

                if candidates.is_empty() {
                    return Err(Board::inconsistent(column, row, value));
                }

                candidates.as_singleton()
            }
        };

        match forced {
            Some(last) => self.set(column, row, last),
            None => Ok(())
        }
    }

    /// Indicates whether this board is solved, i.e. no cell holds candidates
    /// anymore.
    pub fn is_solved(&self) -> bool {
        self.cells.iter()
            .all(|cell| matches!(cell, Cell::Resolved(_)))
    }

    /// Converts this board into a plain grid of values, row by row. Resolved
    /// cells map to their value, unresolved cells to 0.
    pub fn to_grid(&self) -> Vec<Vec<usize>> {
        (0..self.size)
            .map(|row| (0..self.size)
                .map(|column|
                    match self.cells[index(column, row, self.size)] {
                        Cell::Resolved(value) => value,
                        Cell::Candidates(_) => 0
                    })
                .collect())
            .collect()
    }
}

/// A plain grid of values filled in by a player, as opposed to the
/// propagating [Board] the engine itself works on. This is the state a
/// presentation layer needs: cells hold a value or nothing, clue cells are
/// marked fixed so the player cannot change them, and the filled grid can be
/// compared against a stored solution.
///
/// What to do when the grid becomes filled or a cell is cleared (showing a
/// success message, say) is the presentation layer's business; this type only
/// provides the queries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayerGrid {
    size: usize,
    cells: Vec<Option<usize>>,
    fixed: Vec<bool>
}

impl PlayerGrid {

    /// Creates a new, empty player grid with the given side length.
    ///
    /// # Errors
    ///
    /// `BoardError::InvalidSize` if `size` is zero.
    pub fn new(size: usize) -> BoardResult<PlayerGrid> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }

        Ok(PlayerGrid {
            size,
            cells: vec![None; size * size],
            fixed: vec![false; size * size]
        })
    }

    /// Creates a player grid for the given puzzle, with every clue entered
    /// as a fixed cell.
    ///
    /// # Panics
    ///
    /// If the puzzle's solution grid is empty, since the grid side length is
    /// taken from it.
    pub fn from_puzzle(puzzle: &Puzzle) -> PlayerGrid {
        let size = puzzle.solution.len();
        let mut grid = PlayerGrid::new(size)
            .expect("puzzle has empty solution grid");

        for clue in &puzzle.clues {
            grid.set(clue.column, clue.row, clue.value, true);
        }

        grid
    }

    /// Gets the side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    fn checked_index(&self, column: usize, row: usize) -> usize {
        assert!(column < self.size && row < self.size,
            "cell coordinates out of bounds");
        index(column, row, self.size)
    }

    /// Gets the value of the cell at the specified position, or `None` if it
    /// is empty.
    ///
    /// # Panics
    ///
    /// If `column` or `row` are out of bounds.
    pub fn get(&self, column: usize, row: usize) -> Option<usize> {
        self.cells[self.checked_index(column, row)]
    }

    /// Indicates whether the cell at the specified position is fixed, i.e.
    /// holds a clue the player cannot change.
    ///
    /// # Panics
    ///
    /// If `column` or `row` are out of bounds.
    pub fn is_fixed(&self, column: usize, row: usize) -> bool {
        self.fixed[self.checked_index(column, row)]
    }

    /// Sets the value of the cell at the specified position, overwriting any
    /// previous value. If `fixed` is `true`, the cell is additionally marked
    /// as a clue, protecting it from later writes and clears. Returns whether
    /// the write happened; it does not if the cell is fixed or `value` is
    /// outside `[1, size]`.
    ///
    /// # Panics
    ///
    /// If `column` or `row` are out of bounds.
    pub fn set(&mut self, column: usize, row: usize, value: usize,
            fixed: bool) -> bool {
        let i = self.checked_index(column, row);

        if value == 0 || value > self.size {
            return false;
        }

        if self.fixed[i] {
            return false;
        }

        self.cells[i] = Some(value);
        self.fixed[i] = fixed;
        true
    }

    /// Clears the cell at the specified position. Returns whether the cell
    /// was cleared; fixed cells are not.
    ///
    /// # Panics
    ///
    /// If `column` or `row` are out of bounds.
    pub fn clear(&mut self, column: usize, row: usize) -> bool {
        let i = self.checked_index(column, row);

        if self.fixed[i] {
            return false;
        }

        self.cells[i] = None;
        true
    }

    /// Indicates whether every cell of the grid holds a value.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Converts this grid into a plain grid of values, row by row. Empty
    /// cells map to 0.
    pub fn to_grid(&self) -> Vec<Vec<usize>> {
        (0..self.size)
            .map(|row| (0..self.size)
                .map(|column|
                    self.cells[index(column, row, self.size)].unwrap_or(0))
                .collect())
            .collect()
    }

    /// Indicates whether the grid content equals the given solution grid,
    /// cell by cell. A grid that is not filled never matches a complete
    /// solution.
    pub fn matches(&self, solution: &[Vec<usize>]) -> bool {
        self.to_grid() == solution
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::generator::Clue;

    // The row-major pattern grid used by several tests. It is a valid
    // solution: row y is the sequence 1..=9 rotated left by 3 * y + y / 3.
    const PATTERN_9X9: &str =
        "1 2 3 4 5 6 7 8 9 \
         4 5 6 7 8 9 1 2 3 \
         7 8 9 1 2 3 4 5 6 \
         2 3 4 5 6 7 8 9 1 \
         5 6 7 8 9 1 2 3 4 \
         8 9 1 2 3 4 5 6 7 \
         3 4 5 6 7 8 9 1 2 \
         6 7 8 9 1 2 3 4 5 \
         9 1 2 3 4 5 6 7 8";

    #[test]
    fn empty_board_has_all_candidates() {
        for &size in &[1usize, 4, 9, 16] {
            let board = Board::empty(size).unwrap();

            assert_eq!(size, board.size());
            assert!(!board.is_solved());

            for row in 0..size {
                for column in 0..size {
                    assert_eq!(&Cell::Candidates(ValueSet::full(size)),
                        board.cell(column, row));
                }
            }
        }
    }

    #[test]
    fn empty_rejects_invalid_sizes() {
        for &size in &[0usize, 2, 3, 5, 8, 12, 15, 81] {
            assert_eq!(Err(BoardError::InvalidSize), Board::empty(size));
        }
    }

    #[test]
    fn region_size_is_square_root() {
        assert_eq!(2, Board::empty(4).unwrap().region_size());
        assert_eq!(3, Board::empty(9).unwrap().region_size());
        assert_eq!(4, Board::empty(16).unwrap().region_size());
    }

    #[test]
    fn parse_full_grid() {
        let board =
            Board::parse(4, "1 2 3 4 3 4 1 2 4 3 2 1 2 1 4 3").unwrap();

        assert!(board.is_solved());
        assert_eq!(vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![4, 3, 2, 1],
            vec![2, 1, 4, 3]
        ], board.to_grid());
    }

    #[test]
    fn parse_resolves_blanks_by_propagation() {
        let board = Board::parse(9,
            "1 2 3 4 5 . . . . \
             4 5 6 7 8 . . . 3 \
             7 8 9 1 2 . . . . \
             2 3 4 5 6 7 . . . \
             5 6 7 8 9 1 2 3 4 \
             8 9 1 2 3 4 5 6 7 \
             3 4 5 6 7 8 9 1 2 \
             6 7 8 9 1 2 3 4 5 \
             9 1 2 3 4 5 6 7 8").unwrap();
        let solution = Board::parse(9, PATTERN_9X9).unwrap();

        assert!(board.is_solved());
        assert_eq!(solution, board);
    }

    #[test]
    fn parse_with_missing_tokens_leaves_cells_unresolved() {
        let board = Board::parse(4, "1 2").unwrap();

        assert_eq!(&Cell::Resolved(1), board.cell(0, 0));
        assert_eq!(&Cell::Resolved(2), board.cell(1, 0));
        assert!(matches!(board.cell(0, 1), Cell::Candidates(_)));
        assert!(!board.is_solved());
    }

    #[test]
    fn parse_inconsistent_text_fails() {
        assert_eq!(
            Err(BoardError::InconsistentAssignment {
                column: 1,
                row: 0,
                value: 1
            }),
            Board::parse(4, "1 1 . ."));
    }

    #[test]
    fn conflicting_set_in_column_fails() {
        let mut board = Board::empty(4).unwrap();
        board.set(0, 0, 1).unwrap();

        assert_eq!(
            Err(BoardError::InconsistentAssignment {
                column: 0,
                row: 1,
                value: 1
            }),
            board.set(0, 1, 1));
    }

    #[test]
    fn conflicting_set_in_region_fails() {
        let mut board = Board::empty(4).unwrap();
        board.set(0, 0, 1).unwrap();

        assert!(board.set(1, 1, 1).is_err());
    }

    #[test]
    fn set_out_of_range_value_fails() {
        let mut board = Board::empty(4).unwrap();

        assert!(board.set(0, 0, 0).is_err());
        assert!(board.set(0, 0, 5).is_err());
    }

    // An out-of-range column with a small row would land on a valid flat
    // index of a different cell, so bounds are checked before indexing.

    #[test]
    #[should_panic(expected = "cell coordinates out of bounds")]
    fn set_out_of_bounds_column_panics() {
        let mut board = Board::empty(4).unwrap();
        board.set(4, 0, 1).unwrap();
    }

    #[test]
    #[should_panic(expected = "cell coordinates out of bounds")]
    fn remove_out_of_bounds_row_panics() {
        let mut board = Board::empty(4).unwrap();
        board.remove(0, 4, 1).unwrap();
    }

    #[test]
    fn set_is_idempotent() {
        let mut board = Board::empty(4).unwrap();
        board.set(2, 1, 3).unwrap();
        let before = board.clone();

        assert_eq!(Ok(()), board.set(2, 1, 3));
        assert_eq!(before, board);
    }

    #[test]
    fn set_propagates_to_peers() {
        let mut board = Board::empty(4).unwrap();
        board.set(0, 0, 1).unwrap();

        assert_eq!(&Cell::Resolved(1), board.cell(0, 0));

        // Row, column, and region peers all lose candidate 1.

        for &(column, row) in &[(1, 0), (2, 0), (3, 0), (0, 1), (0, 2),
                (0, 3), (1, 1)] {
            match board.cell(column, row) {
                Cell::Candidates(candidates) => {
                    assert_eq!(3, candidates.len());
                    assert!(!candidates.contains(1));
                },
                Cell::Resolved(_) =>
                    panic!("peer cell resolved by single assignment")
            }
        }

        // A cell sharing no group keeps all candidates.

        assert_eq!(&Cell::Candidates(ValueSet::full(4)), board.cell(2, 2));
    }

    #[test]
    fn remove_of_unrelated_value_keeps_resolved_cell() {
        let mut board = Board::empty(4).unwrap();
        board.set(0, 0, 1).unwrap();

        assert_eq!(Ok(()), board.remove(0, 0, 2));
        assert_eq!(&Cell::Resolved(1), board.cell(0, 0));
    }

    #[test]
    fn remove_of_resolved_value_is_contradiction() {
        let mut board = Board::empty(4).unwrap();
        board.set(0, 0, 1).unwrap();

        assert_eq!(
            Err(BoardError::InconsistentAssignment {
                column: 0,
                row: 0,
                value: 1
            }),
            board.remove(0, 0, 1));
    }

    #[test]
    fn remove_of_last_but_one_candidate_cascades() {
        let mut board = Board::empty(4).unwrap();
        board.remove(0, 0, 1).unwrap();
        board.remove(0, 0, 2).unwrap();
        board.remove(0, 0, 3).unwrap();

        assert_eq!(&Cell::Resolved(4), board.cell(0, 0));

        // The forced assignment propagates like an explicit set.

        if let Cell::Candidates(candidates) = board.cell(1, 0) {
            assert!(!candidates.contains(4));
        }
        else {
            panic!("peer cell unexpectedly resolved");
        }
    }

    #[test]
    fn remove_of_absent_value_is_noop() {
        let mut board = Board::empty(4).unwrap();
        board.remove(0, 0, 1).unwrap();
        let before = board.clone();

        assert_eq!(Ok(()), board.remove(0, 0, 1));
        assert_eq!(Ok(()), board.remove(0, 0, 7));
        assert_eq!(before, board);
    }

    #[test]
    fn to_grid_maps_unresolved_to_zero() {
        let mut board = Board::empty(4).unwrap();
        board.set(1, 2, 3).unwrap();

        let grid = board.to_grid();

        assert_eq!(3, grid[2][1]);
        assert_eq!(0, grid[0][0]);
        assert_eq!(0, grid[3][3]);
    }

    #[test]
    fn display_shows_resolved_and_candidate_cells() {
        let mut board = Board::empty(4).unwrap();
        board.set(0, 0, 1).unwrap();

        let printed = format!("{}", board);
        let mut lines = printed.lines();

        assert_eq!(Some("1 [234] [234] [234]"), lines.next());
        assert_eq!(Some("[234] [234] [1234] [1234]"), lines.next());
    }

    #[test]
    fn pretty_print_round_trip_keeps_known_values() {
        let text = "1 2 3 4 3 4 1 2 4 3 2 1 2 1 4 3";
        let board = Board::parse(4, text).unwrap();
        let printed = format!("{}", board);
        let reparsed = Board::parse(4, &printed).unwrap();

        assert_eq!(board, reparsed);

        for token in text.split_whitespace() {
            assert!(printed.split_whitespace().any(|t| t == token));
        }
    }

    fn example_puzzle() -> Puzzle {
        Puzzle {
            clues: vec![
                Clue { column: 0, row: 0, value: 1 },
                Clue { column: 2, row: 1, value: 4 }
            ],
            solution: vec![
                vec![1, 2, 3, 4],
                vec![3, 4, 1, 2],
                vec![4, 3, 2, 1],
                vec![2, 1, 4, 3]
            ]
        }
    }

    #[test]
    fn player_grid_starts_empty() {
        let grid = PlayerGrid::new(4).unwrap();

        assert!(!grid.is_filled());
        assert_eq!(None, grid.get(0, 0));
        assert_eq!(vec![vec![0; 4]; 4], grid.to_grid());
    }

    #[test]
    fn player_grid_rejects_zero_size() {
        assert_eq!(Err(BoardError::InvalidSize), PlayerGrid::new(0));
    }

    #[test]
    fn player_grid_fixed_cells_are_protected() {
        let mut grid = PlayerGrid::new(4).unwrap();

        assert!(grid.set(0, 0, 1, true));
        assert!(grid.is_fixed(0, 0));
        assert!(!grid.set(0, 0, 2, false));
        assert!(!grid.clear(0, 0));
        assert_eq!(Some(1), grid.get(0, 0));
    }

    #[test]
    fn player_grid_set_and_clear() {
        let mut grid = PlayerGrid::new(4).unwrap();

        assert!(grid.set(1, 2, 3, false));
        assert_eq!(Some(3), grid.get(1, 2));
        assert!(grid.set(1, 2, 4, false));
        assert_eq!(Some(4), grid.get(1, 2));
        assert!(grid.clear(1, 2));
        assert_eq!(None, grid.get(1, 2));
        assert!(!grid.set(1, 2, 5, false));
    }

    #[test]
    #[should_panic(expected = "cell coordinates out of bounds")]
    fn player_grid_set_out_of_bounds_column_panics() {
        let mut grid = PlayerGrid::new(4).unwrap();
        grid.set(4, 0, 3, false);
    }

    #[test]
    #[should_panic(expected = "cell coordinates out of bounds")]
    fn player_grid_get_out_of_bounds_row_panics() {
        let grid = PlayerGrid::new(4).unwrap();
        grid.get(0, 4);
    }

    #[test]
    #[should_panic(expected = "cell coordinates out of bounds")]
    fn player_grid_clear_out_of_bounds_column_panics() {
        let mut grid = PlayerGrid::new(4).unwrap();
        grid.clear(4, 0);
    }

    #[test]
    fn player_grid_from_puzzle_fixes_clues() {
        let grid = PlayerGrid::from_puzzle(&example_puzzle());

        assert_eq!(4, grid.size());
        assert_eq!(Some(1), grid.get(0, 0));
        assert!(grid.is_fixed(0, 0));
        assert_eq!(Some(4), grid.get(2, 1));
        assert!(grid.is_fixed(2, 1));
        assert_eq!(None, grid.get(3, 3));
        assert!(!grid.is_fixed(3, 3));
    }

    #[test]
    fn player_grid_matches_solution_only_when_filled_correctly() {
        let puzzle = example_puzzle();
        let mut grid = PlayerGrid::new(4).unwrap();

        assert!(!grid.matches(&puzzle.solution));

        for (row, values) in puzzle.solution.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                grid.set(column, row, value, false);
            }
        }

        assert!(grid.is_filled());
        assert!(grid.matches(&puzzle.solution));

        grid.set(3, 3, 1, false);

        assert!(!grid.matches(&puzzle.solution));
    }
}
